// Fraud class value object
// Derived from the transaction location by a fixed rule, not a model.

use serde::{Deserialize, Serialize};

/// The only location that classifies as fraudulent. Compared case-sensitively.
pub const FRAUD_LOCATION: &str = "Moscow";

pub type Rgba = [u8; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudClass {
    Fraudulent,
    Normal,
}

impl FraudClass {
    pub fn from_location(location: &str) -> Self {
        if location == FRAUD_LOCATION {
            FraudClass::Fraudulent
        } else {
            FraudClass::Normal
        }
    }

    /// Value of the `CLASS` column.
    pub fn flag(&self) -> u8 {
        match self {
            FraudClass::Fraudulent => 1,
            FraudClass::Normal => 0,
        }
    }

    /// Value of the `PROBABILITY` column. A per-class constant.
    pub fn probability(&self) -> f64 {
        match self {
            FraudClass::Fraudulent => 0.92,
            FraudClass::Normal => 0.05,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FraudClass::Fraudulent => "FRAUDULENT",
            FraudClass::Normal => "NORMAL",
        }
    }

    pub fn color(&self) -> Rgba {
        match self {
            FraudClass::Fraudulent => [255, 0, 0, 255],
            FraudClass::Normal => [0, 128, 0, 255],
        }
    }
}
