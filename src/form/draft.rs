use crate::form::Field;
use serde::Serialize;

/// The in-progress set of field values, kept exactly as typed.
///
/// Serializes to the prediction request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub bathrooms: String,
    pub square_footage: String,
    pub lot_size: String,
    pub year_built: String,
    pub bedrooms: String,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Bathrooms => &self.bathrooms,
            Field::SquareFootage => &self.square_footage,
            Field::LotSize => &self.lot_size,
            Field::YearBuilt => &self.year_built,
            Field::Bedrooms => &self.bedrooms,
        }
    }

    /// Stores `raw` as-is. No trimming, no coercion.
    pub fn set(&mut self, field: Field, raw: impl Into<String>) {
        let slot = match field {
            Field::Bathrooms => &mut self.bathrooms,
            Field::SquareFootage => &mut self.square_footage,
            Field::LotSize => &mut self.lot_size,
            Field::YearBuilt => &mut self.year_built,
            Field::Bedrooms => &mut self.bedrooms,
        };
        *slot = raw.into();
    }
}
