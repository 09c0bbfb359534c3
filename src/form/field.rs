// src/form/field.rs

use chrono::{Datelike, Local};

/// The five housing attributes the form collects.
///
/// Ordering follows the order the inputs are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Bathrooms,
    SquareFootage,
    LotSize,
    YearBuilt,
    Bedrooms,
}

/// Inclusive numeric range accepted for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

pub const EARLIEST_YEAR_BUILT: i64 = 1900;

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Bathrooms,
        Field::SquareFootage,
        Field::LotSize,
        Field::YearBuilt,
        Field::Bedrooms,
    ];

    /// Form and JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Bathrooms => "bathrooms",
            Field::SquareFootage => "square_footage",
            Field::LotSize => "lot_size",
            Field::YearBuilt => "year_built",
            Field::Bedrooms => "bedrooms",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Bathrooms => "Bathrooms",
            Field::SquareFootage => "Square Footage",
            Field::LotSize => "Lot Size",
            Field::YearBuilt => "Year Built",
            Field::Bedrooms => "Bedrooms",
        }
    }

    /// Message shown next to the input when the value is empty or out of range.
    pub fn message(self) -> &'static str {
        match self {
            Field::Bathrooms => "Bathrooms must be between 1 and 6",
            Field::SquareFootage => "Square footage must be between 500 and 10000",
            Field::LotSize => "Lot size must be between 1000 and 50000",
            Field::YearBuilt => "Year built must be valid",
            Field::Bedrooms => "Bedrooms must be between 1 and 10",
        }
    }

    /// Year built is capped at `current_year`, so the upper bound moves.
    pub fn bounds(self, current_year: i32) -> Bounds {
        let (min, max) = match self {
            Field::Bathrooms => (1, 6),
            Field::SquareFootage => (500, 10_000),
            Field::LotSize => (1_000, 50_000),
            Field::YearBuilt => (EARLIEST_YEAR_BUILT, i64::from(current_year)),
            Field::Bedrooms => (1, 10),
        };

        Bounds { min, max }
    }
}

/// Calendar year in the server's local time zone.
pub fn current_year() -> i32 {
    Local::now().year()
}
