//! Column resolution order.
//!
//! Columns are resolved in levels: first every column without a key, then
//! every column whose key column was resolved in an earlier level, and so on.
//! For the common single-level case this is exactly "independent columns,
//! then dependent columns".

use std::collections::HashSet;
use synth_core::{Schema, SchemaError};
use tracing::{debug, warn};

/// Output columns plus the order in which their values must be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPlan {
    /// Columns in output order (the CSV header)
    output: Vec<String>,
    /// Schema columns in dependency-safe order, including key columns that
    /// are not part of the output
    resolution_order: Vec<String>,
}

impl RowPlan {
    /// Build the plan for writing `columns` from `schema`.
    ///
    /// Output columns missing from the schema are kept and will be empty.
    pub fn build(schema: &Schema, columns: &[String]) -> Result<Self, SchemaError> {
        schema.validate()?;

        let mut required: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for name in columns {
            if !schema.contains(name) {
                warn!("Column '{}' is not defined in the schema, it will be empty", name);
                continue;
            }
            // Pull in key columns even when they are not written
            let mut current = name.as_str();
            while seen.insert(current) {
                required.push(current);
                match schema.get_column(current) {
                    Some(column) if column.is_dependent() => current = column.key.as_str(),
                    _ => break,
                }
            }
        }

        let output: HashSet<&str> = columns.iter().map(String::as_str).collect();
        let hidden: Vec<&str> = required
            .iter()
            .copied()
            .filter(|name| !output.contains(name))
            .collect();
        if !hidden.is_empty() {
            debug!("Generating key columns not in the output: {:?}", hidden);
        }

        // Keep output order within a level, hidden key columns last
        required.sort_by_key(|name| {
            columns
                .iter()
                .position(|c| c.as_str() == *name)
                .unwrap_or(usize::MAX)
        });

        let mut resolution_order: Vec<String> = Vec::with_capacity(required.len());
        let mut resolved: HashSet<&str> = HashSet::new();
        let mut pending = required;

        while !pending.is_empty() {
            let (ready, blocked): (Vec<&str>, Vec<&str>) =
                pending.into_iter().partition(|name| {
                    schema
                        .get_column(name)
                        .map(|column| !column.is_dependent() || resolved.contains(column.key.as_str()))
                        .unwrap_or(true)
                });

            if ready.is_empty() {
                let mut cycle: Vec<String> = blocked.iter().map(|s| s.to_string()).collect();
                cycle.sort();
                return Err(SchemaError::DependencyCycle(cycle));
            }

            resolved.extend(ready.iter().copied());
            resolution_order.extend(ready.into_iter().map(str::to_string));
            pending = blocked;
        }

        Ok(Self {
            output: columns.to_vec(),
            resolution_order,
        })
    }

    /// Columns in output order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Columns in the order their values are generated.
    pub fn resolution_order(&self) -> &[String] {
        &self.resolution_order
    }
}
