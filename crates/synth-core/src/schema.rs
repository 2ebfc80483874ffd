//! Schema definitions for synth-csv.
//!
//! A schema maps each column name to a [`ColumnConfig`]. The document is a
//! flat JSON (or YAML) object, one entry per column:
//!
//! ```json
//! {
//!   "order_id": { "type": "uniq_int32_by_key" },
//!   "line_no":  { "type": "uniq_int32_by_key", "key": "order_id" },
//!   "amount":   { "type": "norm_multiplier_key", "key": "qty", "mean": 9.5, "stddev": 2.0 }
//! }
//! ```
//!
//! ## Type Hierarchy
//!
//! - `Schema` - Column name to configuration mapping
//! - `ColumnConfig` - Common column settings (`key`, `pct_empty`) plus a generator
//! - `GeneratorConfig` - One variant per generator strategy with its typed parameters

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A column depends on a key column that is not in the schema
    #[error("Column '{column}' depends on unknown key column '{key}'")]
    UnknownKeyColumn { column: String, key: String },

    /// A column names itself as its key column
    #[error("Column '{0}' depends on itself")]
    SelfDependency(String),

    /// Key columns form a cycle
    #[error("Dependency cycle between columns: {}", .0.join(", "))]
    DependencyCycle(Vec<String>),

    /// The date format contains unsupported specifiers
    #[error("Column '{column}' has invalid date format '{format}'")]
    InvalidDateFormat { column: String, format: String },

    /// Blank probability outside [0, 1]
    #[error("Column '{column}' has pct_empty {value}, expected a value between 0 and 1")]
    InvalidEmptyFraction { column: String, value: f64 },
}

// ============================================================================
// Generator Types
// ============================================================================

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Generator configuration for a column.
///
/// The `type` tag selects the strategy. Tags that are not recognised
/// deserialize to [`GeneratorConfig::Unknown`], which produces empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Uniform random pick from a list of values
    Enum {
        /// Candidate values
        #[serde(default)]
        values: Vec<String>,
    },

    /// Sequential integers starting at 0, one sequence per key value
    #[serde(rename = "uniq_int32_by_key")]
    UniqInt32ByKey,

    /// Uniform random pick from the candidates listed for the key value
    EnumByKey {
        /// Key value to candidate values
        #[serde(default)]
        key_values: HashMap<String, Vec<String>>,
    },

    /// Random date between `date_low_boundary` and now
    Date {
        /// strftime-style output format
        #[serde(default = "default_date_format")]
        date_format: String,
        /// Inclusive lower bound (RFC 3339 or `YYYY-MM-DD`)
        #[serde(deserialize_with = "deserialize_boundary")]
        date_low_boundary: DateTime<Utc>,
    },

    /// Random unix timestamp (seconds) between `date_low_boundary` and now
    UnixTimestamp {
        /// Inclusive lower bound (RFC 3339 or `YYYY-MM-DD`)
        #[serde(deserialize_with = "deserialize_boundary")]
        date_low_boundary: DateTime<Utc>,
    },

    /// Absolute value of a normal sample, rounded to an integer
    #[serde(rename = "norm_int32")]
    NormInt32 {
        #[serde(default)]
        mean: f64,
        #[serde(default)]
        stddev: f64,
    },

    /// Key value multiplied by the absolute value of a normal sample
    NormMultiplierKey {
        #[serde(default)]
        mean: f64,
        #[serde(default)]
        stddev: f64,
    },

    /// Fake email address, unique within a run
    UniqEmail,

    /// Unrecognised type tag
    #[serde(other)]
    Unknown,
}

/// Configuration of one output column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Generator strategy and its parameters
    #[serde(flatten)]
    pub generator: GeneratorConfig,

    /// Probability of replacing the generated value with an empty string
    #[serde(default)]
    pub pct_empty: f64,

    /// Name of the column whose value this column depends on (empty = independent)
    #[serde(default)]
    pub key: String,
}

impl ColumnConfig {
    /// Create an independent column using the given generator.
    pub fn new(generator: GeneratorConfig) -> Self {
        Self {
            generator,
            pct_empty: 0.0,
            key: String::new(),
        }
    }

    /// Make this column depend on the value of `key`.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Blank the value with probability `pct_empty`.
    pub fn with_pct_empty(mut self, pct_empty: f64) -> Self {
        self.pct_empty = pct_empty;
        self
    }

    /// Whether this column depends on another column.
    pub fn is_dependent(&self) -> bool {
        !self.key.is_empty()
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Full generation schema.
///
/// Columns are kept in a sorted map so iteration order does not depend on
/// the order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    columns: BTreeMap<String, ColumnConfig>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load schema from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Schema = serde_json::from_str(json)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Parse schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: Schema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Add or replace a column.
    pub fn insert(&mut self, name: impl Into<String>, column: ColumnConfig) {
        self.columns.insert(name.into(), column);
    }

    /// Builder-style variant of [`Schema::insert`].
    pub fn with_column(mut self, name: impl Into<String>, column: ColumnConfig) -> Self {
        self.insert(name, column);
        self
    }

    /// Get a column configuration by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnConfig> {
        self.columns.get(name)
    }

    /// Whether the schema defines the given column.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// All column names, sorted.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Iterate over `(name, config)` pairs in name order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnConfig)> {
        self.columns.iter().map(|(name, column)| (name.as_str(), column))
    }

    /// Number of columns in the schema.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Check the settings generation relies on.
    ///
    /// Dependency cycles spanning several columns are detected when the
    /// resolution order is built, not here.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (name, column) in &self.columns {
            if !(0.0..=1.0).contains(&column.pct_empty) {
                return Err(SchemaError::InvalidEmptyFraction {
                    column: name.clone(),
                    value: column.pct_empty,
                });
            }

            if column.is_dependent() {
                if column.key == *name {
                    return Err(SchemaError::SelfDependency(name.clone()));
                }
                if !self.columns.contains_key(&column.key) {
                    return Err(SchemaError::UnknownKeyColumn {
                        column: name.clone(),
                        key: column.key.clone(),
                    });
                }
            }

            if let GeneratorConfig::Date { date_format, .. } = &column.generator {
                if !is_valid_date_format(date_format) {
                    return Err(SchemaError::InvalidDateFormat {
                        column: name.clone(),
                        format: date_format.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Whether chrono can render every specifier in `format`.
fn is_valid_date_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Parse a timestamp string in various formats.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS` (UTC) and `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

fn deserialize_boundary<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date_low_boundary '{raw}'")))
}

// ============================================================================
// Tests
// ============================================================================
