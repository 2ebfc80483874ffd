//! CSV output for synth-csv.
//!
//! This crate drives a [`synth_generator::RowAssembler`] for a fixed number
//! of rows and writes the header plus every row as CSV.
//!
//! # Example
//!
//! ```ignore
//! use synth_core::Schema;
//! use synth_generator::GenerationContext;
//! use synth_populate_csv::CsvPopulator;
//!
//! let schema = Schema::from_file("schema.json")?;
//! let columns = vec!["id".to_string(), "email".to_string()];
//! let mut populator = CsvPopulator::new(schema, columns, GenerationContext::new(Some(42)))?;
//!
//! // Write 1000 rows to stdout
//! let metrics = populator.populate(std::io::stdout().lock(), 1000)?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{LangArg, PopulateArgs};
pub use error::CsvPopulatorError;
pub use populator::{CsvPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
