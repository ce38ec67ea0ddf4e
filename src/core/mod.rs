pub mod dataset;
pub mod errors;

pub use dataset::{columns, CellValue, Dataset};
pub use errors::{Error, Result};
