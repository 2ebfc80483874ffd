//! CLI argument definitions for the CSV populator.

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use synth_core::Schema;
use synth_generator::{GenerationContext, Lang, DEFAULT_MAX_UNIQUE_ATTEMPTS};

/// Language of the built-in fake primitives.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LangArg {
    /// English
    #[default]
    En,
    /// Russian (transliterated)
    Ru,
}

impl From<LangArg> for Lang {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::En => Lang::En,
            LangArg::Ru => Lang::Ru,
        }
    }
}

/// Arguments for a CSV generation run.
#[derive(Args, Clone, Debug)]
pub struct PopulateArgs {
    /// Path to the schema file (`.json` is read as JSON, anything else as YAML)
    #[arg(long, short = 's', env = "SYNTH_CSV_SCHEMA", default_value = "schema.json")]
    pub schema: PathBuf,

    /// Number of rows to generate
    #[arg(long, env = "SYNTH_CSV_ROWS", default_value = "1000")]
    pub rows: u64,

    /// Language of fake values such as email addresses
    #[arg(long, value_enum, env = "SYNTH_CSV_LANG", default_value = "en")]
    pub lang: LangArg,

    /// Output columns in order (comma-separated, empty = all schema columns sorted by name)
    #[arg(long, value_delimiter = ',', env = "SYNTH_CSV_COLUMNS")]
    pub columns: Vec<String>,

    /// Random seed for reproducible output (omit for a random seed)
    #[arg(long, env = "SYNTH_CSV_SEED")]
    pub seed: Option<u64>,

    /// Write CSV to this file instead of stdout
    #[arg(long, short = 'o', env = "SYNTH_CSV_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Draws allowed per unique value before the run fails
    #[arg(long, env = "SYNTH_CSV_MAX_UNIQUE_ATTEMPTS", default_value_t = DEFAULT_MAX_UNIQUE_ATTEMPTS)]
    pub max_unique_attempts: u32,
}

impl PopulateArgs {
    /// Output columns for `schema`.
    ///
    /// Falls back to every schema column when no column was requested.
    pub fn output_columns(&self, schema: &Schema) -> Vec<String> {
        let requested: Vec<String> = self
            .columns
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        if requested.is_empty() {
            schema.column_names().into_iter().map(str::to_string).collect()
        } else {
            requested
        }
    }

    /// Generation context configured from these arguments.
    pub fn generation_context(&self) -> GenerationContext {
        GenerationContext::new(self.seed)
            .with_locale(synth_generator::BuiltinLocale::new(self.lang.into()))
            .with_max_unique_attempts(self.max_unique_attempts)
    }
}
