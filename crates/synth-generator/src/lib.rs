//! Value generation engine for synth-csv.
//!
//! This crate turns a [`synth_core::Schema`] into rows of strings. A
//! [`RowAssembler`] owns all run state in a [`GenerationContext`]: the RNG,
//! the locale-primitive source, and the [`UniqueStores`] that keep sequences
//! and email addresses unique for the lifetime of the run.
//!
//! # Architecture
//!
//! ```text
//! Schema + output columns
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │     RowAssembler     │
//! │                      │
//! │  - RowPlan           │   resolution order: keys before dependents
//! │  - GenerationContext │   rng, locale, uniqueness stores
//! └──────────┬───────────┘
//!            │ per column
//!            ▼
//!     resolve_value ──► enum / uniq_int32_by_key / enum_by_key / date /
//!                       unix_timestamp / norm_int32 / norm_multiplier_key /
//!                       uniq_email
//!            │
//!            ▼
//!      Vec<String> in output order
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::Schema;
//! use synth_generator::{GenerationContext, RowAssembler};
//!
//! let schema = Schema::from_json(r#"{
//!     "id":    { "type": "uniq_int32_by_key" },
//!     "bonus": { "type": "norm_multiplier_key", "key": "id", "mean": 1.0, "stddev": 0.0 }
//! }"#).unwrap();
//!
//! let columns = vec!["id".to_string(), "bonus".to_string()];
//! let mut assembler = RowAssembler::new(schema, columns, GenerationContext::new(Some(42))).unwrap();
//!
//! assembler.next_row().unwrap();
//! assert_eq!(assembler.next_row().unwrap(), vec!["1", "1.00"]);
//! ```

pub mod context;
pub mod generator;
pub mod generators;
pub mod locale;
pub mod plan;
pub mod stores;

// Re-exports for convenience
pub use context::{GenerationContext, DEFAULT_MAX_UNIQUE_ATTEMPTS};
pub use generator::{GeneratorError, RowAssembler, RowIterator};
pub use locale::{BuiltinLocale, Lang, LocaleSource};
pub use plan::RowPlan;
pub use stores::UniqueStores;
