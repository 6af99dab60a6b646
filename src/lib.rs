pub mod config;
pub mod error;
pub mod inspect;
pub mod metadata;
pub mod output;
pub mod rows;

pub use error::InspectError;
pub use inspect::Inspector;
pub use metadata::{ParquetMetadata, SchemaSource};
pub use rows::{PolarsRows, RowSource};
