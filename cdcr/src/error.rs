pub mod generic;
pub mod missing_value;
pub mod unsupported_database;
pub mod upstream;

pub use generic::{CDCRError, CDCRResult};
