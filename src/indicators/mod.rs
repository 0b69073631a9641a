pub mod error;
pub mod offset;
pub mod parser;
pub mod validation;

pub mod trend;
pub mod volatility;

pub use error::IndicatorError;
pub use offset::apply_offset;
pub use parser::*;
pub use validation::*;
