pub mod error;
pub mod number_field;
pub mod price;

pub use error::error_page;
pub use number_field::number_field;
pub use price::price_display;
