mod coerce;
mod draft;
mod field;
mod validate;
mod widget;

pub use coerce::{loose_number, strict_number, NumericPolicy};
pub use draft::Draft;
pub use field::{current_year, Field};
pub use validate::{validate, FieldErrors};
pub use widget::{FieldState, HousePriceForm};
