use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use electrovault_core::{DomainError, DomainResult, Entity, RecordId, ValueObject};

/// Component category (fixed set).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum Category {
    #[serde(rename = "GPU")]
    Gpu,
    #[serde(rename = "CPU")]
    Cpu,
    Mobile,
    Laptop,
    Accessory,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Gpu,
        Category::Cpu,
        Category::Mobile,
        Category::Laptop,
        Category::Accessory,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gpu => "GPU",
            Category::Cpu => "CPU",
            Category::Mobile => "Mobile",
            Category::Laptop => "Laptop",
            Category::Accessory => "Accessory",
            Category::Other => "Other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(
                    "category must be one of: GPU, CPU, Mobile, Laptop, Accessory, Other",
                )
            })
    }
}

// Persisted files may carry categories outside the fixed set; those load as `Other`.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = JsonValue::deserialize(deserializer)?;
        Ok(raw
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Category::Other))
    }
}

/// Unit price. Always finite and non-negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    /// Negative or non-finite amounts collapse to zero.
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            Self(amount)
        } else {
            Self::ZERO
        }
    }

    /// Lenient conversion from an untyped JSON value.
    ///
    /// Numbers and numeric strings are accepted; anything else is zero.
    pub fn coerce(value: &JsonValue) -> Self {
        let amount = match value {
            JsonValue::Number(n) => n.as_f64(),
            JsonValue::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        amount.map(Self::new).unwrap_or(Self::ZERO)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = JsonValue::deserialize(deserializer)?;
        Ok(Price::coerce(&raw))
    }
}

/// Units in stock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(units: u64) -> Self {
        Self(units)
    }

    /// Lenient conversion from an untyped JSON value.
    ///
    /// Fractional values are truncated; negative or unparsable values are zero.
    pub fn coerce(value: &JsonValue) -> Self {
        match value {
            JsonValue::Number(n) => {
                if let Some(units) = n.as_u64() {
                    Self(units)
                } else {
                    n.as_f64().map(Self::from_float).unwrap_or(Self::ZERO)
                }
            }
            JsonValue::String(s) => {
                let s = s.trim();
                if let Ok(units) = s.parse::<u64>() {
                    Self(units)
                } else {
                    s.parse::<f64>().map(Self::from_float).unwrap_or(Self::ZERO)
                }
            }
            _ => Self::ZERO,
        }
    }

    fn from_float(value: f64) -> Self {
        if value.is_finite() && value >= 1.0 {
            Self(value.trunc() as u64)
        } else {
            Self::ZERO
        }
    }

    pub fn units(&self) -> u64 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = JsonValue::deserialize(deserializer)?;
        Ok(Quantity::coerce(&raw))
    }
}

/// One stock record.
///
/// Field order is the persisted/exported JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub qty: Quantity,
}

impl InventoryRecord {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        category: Category,
        price: Price,
        qty: Quantity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
            qty,
        }
    }

    /// `price × qty`.
    pub fn total_value(&self) -> f64 {
        self.price.amount() * self.qty.units() as f64
    }
}

impl Entity for InventoryRecord {
    type Id = RecordId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Command: add a record to the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct AddRecord {
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub qty: Quantity,
    pub occurred_at: DateTime<Utc>,
}

impl AddRecord {
    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        Ok(())
    }
}
