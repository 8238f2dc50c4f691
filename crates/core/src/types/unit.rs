//! Measurement units and their base-unit multipliers.
//!
//! Units fall into three categories, each with one canonical base unit:
//!
//! | Category | Base | Units |
//! |----------|------|-------|
//! | Mass     | gram | `Gram` = 1, `Kg` = 1000, `Ons` = 100 |
//! | Volume   | ml   | `ML` = 1, `Liter` = 1000, `Sdm` = 15, `Sdt` = 5, `Cup` = 240 |
//! | Count    | pcs  | `Pcs` = 1 |
//!
//! Mass and volume share a scale at an assumed density of 1 g/ml. Count never
//! converts to or from the other two categories.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Unit`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// The label is empty or whitespace.
    #[error("unit label cannot be empty")]
    Empty,
    /// The label does not name a known unit.
    #[error("unknown unit: {0}")]
    Unknown(String),
}

/// Measurement category a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Mass,
    Volume,
    Count,
}

/// A recognized measurement unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Gram,
    Kg,
    /// 100 grams.
    Ons,
    #[serde(rename = "ML")]
    Ml,
    Liter,
    /// Tablespoon, 15 ml.
    Sdm,
    /// Teaspoon, 5 ml.
    Sdt,
    Cup,
    Pcs,
}

impl Unit {
    /// Every recognized unit, in table order.
    pub const ALL: [Self; 9] = [
        Self::Gram,
        Self::Kg,
        Self::Ons,
        Self::Ml,
        Self::Liter,
        Self::Sdm,
        Self::Sdt,
        Self::Cup,
        Self::Pcs,
    ];

    /// The category this unit measures.
    #[must_use]
    pub const fn category(self) -> UnitCategory {
        match self {
            Self::Gram | Self::Kg | Self::Ons => UnitCategory::Mass,
            Self::Ml | Self::Liter | Self::Sdm | Self::Sdt | Self::Cup => UnitCategory::Volume,
            Self::Pcs => UnitCategory::Count,
        }
    }

    /// How many base units one of this unit is.
    #[must_use]
    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Gram | Self::Ml | Self::Pcs => Decimal::ONE,
            Self::Kg | Self::Liter => Decimal::ONE_THOUSAND,
            Self::Ons => Decimal::ONE_HUNDRED,
            Self::Sdm => Decimal::from(15),
            Self::Sdt => Decimal::from(5),
            Self::Cup => Decimal::from(240),
        }
    }

    /// Canonical label, as stored in catalogs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gram => "Gram",
            Self::Kg => "Kg",
            Self::Ons => "Ons",
            Self::Ml => "ML",
            Self::Liter => "Liter",
            Self::Sdm => "Sdm",
            Self::Sdt => "Sdt",
            Self::Cup => "Cup",
            Self::Pcs => "Pcs",
        }
    }

    /// Rate that turns a quantity in `self` into a quantity in `to`.
    ///
    /// Returns `None` when exactly one side is a count unit.
    #[must_use]
    pub fn rate_to(self, to: Self) -> Option<Decimal> {
        if self == to {
            return Some(Decimal::ONE);
        }
        let from_count = self.category() == UnitCategory::Count;
        let to_count = to.category() == UnitCategory::Count;
        if from_count != to_count {
            return None;
        }
        Some(self.multiplier() / to.multiplier())
    }

    /// The unit whose canonical label is exactly `label`.
    ///
    /// Catalog labels are matched verbatim: `"Kg"` is a unit, `"kg"` is not.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.label() == label)
    }

    /// Parse a canonical unit label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty or not one of the canonical labels.
    pub fn parse(label: &str) -> Result<Self, UnitError> {
        if label.trim().is_empty() {
            return Err(UnitError::Empty);
        }
        Self::from_label(label).ok_or_else(|| UnitError::Unknown(label.to_owned()))
    }

    /// Parse a unit typed by a person.
    ///
    /// Matching ignores case and surrounding whitespace and accepts common
    /// aliases (`g`, `kg`, `ml`, `l`, `tbsp`, `tsp`, `pc`, `piece`). Use
    /// [`Unit::parse`] for stored labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty or not a known unit.
    pub fn parse_lenient(label: &str) -> Result<Self, UnitError> {
        let normalized = label.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(UnitError::Empty);
        }
        match normalized.as_str() {
            "gram" | "g" | "gr" => Ok(Self::Gram),
            "kg" | "kilogram" => Ok(Self::Kg),
            "ons" => Ok(Self::Ons),
            "ml" | "milliliter" | "millilitre" => Ok(Self::Ml),
            "liter" | "litre" | "l" => Ok(Self::Liter),
            "sdm" | "tbsp" | "tablespoon" => Ok(Self::Sdm),
            "sdt" | "tsp" | "teaspoon" => Ok(Self::Sdt),
            "cup" => Ok(Self::Cup),
            "pcs" | "pc" | "piece" => Ok(Self::Pcs),
            _ => Err(UnitError::Unknown(label.trim().to_owned())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A unit label as entered by the user or imported from a spreadsheet.
///
/// Labels are kept verbatim so that records with unmapped units still load;
/// [`UnitLabel::unit`] resolves the label when it names a known unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitLabel(String);

impl UnitLabel {
    /// Wrap a raw label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The unit this label names, if it is a canonical label.
    #[must_use]
    pub fn unit(&self) -> Option<Unit> {
        Unit::from_label(&self.0)
    }
}

impl From<Unit> for UnitLabel {
    fn from(unit: Unit) -> Self {
        Self(unit.label().to_owned())
    }
}

impl From<&str> for UnitLabel {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl fmt::Display for UnitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for UnitLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for UnitLabel {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for UnitLabel {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for UnitLabel {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
