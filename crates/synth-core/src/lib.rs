//! Core types for the synth-csv generator.
//!
//! This crate holds the declarative side of data generation:
//!
//! - [`ColumnConfig`] - How a single output column is produced
//! - [`GeneratorConfig`] - Typed parameters for each generator strategy
//! - [`Schema`] - Column name to configuration mapping, loaded from JSON or YAML
//!
//! # Architecture
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    ├─── synth-generator       (strategies, uniqueness stores, row assembly)
//!    │
//!    └─── synth-populate-csv    (run driver writing CSV records)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::{GeneratorConfig, Schema};
//!
//! let schema = Schema::from_json(r#"{
//!     "id":   { "type": "uniq_int32_by_key" },
//!     "tier": { "type": "enum", "values": ["gold", "silver"] }
//! }"#).unwrap();
//!
//! assert_eq!(schema.column_names(), vec!["id", "tier"]);
//! assert!(matches!(
//!     schema.get_column("id").unwrap().generator,
//!     GeneratorConfig::UniqInt32ByKey
//! ));
//! ```

pub mod schema;

pub use schema::{parse_timestamp, ColumnConfig, GeneratorConfig, Schema, SchemaError};
