//! Row assembly: turns a schema into CSV-ready records.

use crate::context::GenerationContext;
use crate::generators::resolve_value;
use crate::plan::RowPlan;
use std::collections::HashMap;
use synth_core::Schema;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Schema error
    #[error("Schema error: {0}")]
    SchemaError(#[from] synth_core::SchemaError),

    /// A unique generator ran out of fresh values
    #[error(
        "{generator} produced no new value after {attempts} attempts ({emitted} values already emitted)"
    )]
    UniqueExhausted {
        generator: &'static str,
        attempts: u32,
        emitted: usize,
    },

    /// A sequence went past the int32 range
    #[error("Sequence for column '{column}' and key '{key}' exceeded the int32 range")]
    SequenceOverflow { column: String, key: String },

    /// Date formatting failed
    #[error("Failed to format date with '{0}'")]
    DateFormat(String),
}

/// Produces rows for a fixed list of output columns.
///
/// Owns the run's [`GenerationContext`], so uniqueness holds across every
/// row produced by one assembler.
pub struct RowAssembler {
    /// Column configurations
    schema: Schema,
    /// Output columns and resolution order
    plan: RowPlan,
    /// RNG, locale source and uniqueness stores
    ctx: GenerationContext,
    /// Number of rows produced so far
    index: u64,
}

impl RowAssembler {
    /// Create an assembler writing `columns` (in that order) from `schema`.
    pub fn new(
        schema: Schema,
        columns: Vec<String>,
        ctx: GenerationContext,
    ) -> Result<Self, GeneratorError> {
        let plan = RowPlan::build(&schema, &columns)?;
        Ok(Self {
            schema,
            plan,
            ctx,
            index: 0,
        })
    }

    /// Output columns, i.e. the CSV header.
    pub fn columns(&self) -> &[String] {
        self.plan.output()
    }

    /// Get the current row index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next row.
    ///
    /// Every column is resolved after its key column, so a dependent column
    /// always sees the key value of the same row. Values are returned in
    /// output order.
    pub fn next_row(&mut self) -> Result<Vec<String>, GeneratorError> {
        let mut resolved: HashMap<&str, String> =
            HashMap::with_capacity(self.plan.resolution_order().len());

        for name in self.plan.resolution_order() {
            let Some(column) = self.schema.get_column(name) else {
                continue;
            };

            let key_value = if column.is_dependent() {
                Some(resolved.get(column.key.as_str()).map_or("", String::as_str))
            } else {
                None
            };

            let value = resolve_value(name, column, key_value, &mut self.ctx)?;
            resolved.insert(name.as_str(), value);
        }

        let row = self
            .plan
            .output()
            .iter()
            .map(|name| resolved.get(name.as_str()).cloned().unwrap_or_default())
            .collect();

        self.index += 1;
        Ok(row)
    }

    /// Generate `count` rows lazily.
    pub fn rows(&mut self, count: u64) -> RowIterator<'_> {
        RowIterator {
            assembler: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates rows.
///
/// Stops after the first error.
pub struct RowIterator<'a> {
    assembler: &'a mut RowAssembler,
    remaining: u64,
}

impl Iterator for RowIterator<'_> {
    type Item = Result<Vec<String>, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        let row = self.assembler.next_row();
        if row.is_err() {
            self.remaining = 0;
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining as usize))
    }
}
