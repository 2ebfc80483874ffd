//! Individual value generators.
//!
//! This module provides the generation logic for each strategy and the
//! dispatcher that maps a column configuration onto one of them.

pub mod email;
pub mod enumeration;
pub mod numeric;
pub mod sequence;
pub mod timestamp;

use crate::context::GenerationContext;
use crate::generator::GeneratorError;
use chrono::Utc;
use rand::Rng;
use synth_core::{ColumnConfig, GeneratorConfig};

/// Generate one value for `column`.
///
/// `key_value` is the value already produced for the column's key column in
/// the same row (`None` for independent columns). Unknown generator types
/// produce an empty string.
pub fn resolve_value(
    name: &str,
    column: &ColumnConfig,
    key_value: Option<&str>,
    ctx: &mut GenerationContext,
) -> Result<String, GeneratorError> {
    let key_value = key_value.unwrap_or("");

    let value = match &column.generator {
        GeneratorConfig::Enum { values } => enumeration::generate_enum(&mut ctx.rng, values),

        GeneratorConfig::UniqInt32ByKey => {
            sequence::generate_uniq_int32_by_key(&mut ctx.stores, name, key_value)?
        }

        GeneratorConfig::EnumByKey { key_values } => {
            enumeration::generate_enum_by_key(&mut ctx.rng, key_values, key_value)
        }

        GeneratorConfig::Date {
            date_format,
            date_low_boundary,
        } => timestamp::generate_date(&mut ctx.rng, date_format, *date_low_boundary, Utc::now())?,

        GeneratorConfig::UnixTimestamp { date_low_boundary } => {
            timestamp::generate_unix_timestamp(&mut ctx.rng, *date_low_boundary, Utc::now())
        }

        GeneratorConfig::NormInt32 { mean, stddev } => {
            numeric::generate_norm_int32(&mut ctx.rng, *mean, *stddev)
        }

        GeneratorConfig::NormMultiplierKey { mean, stddev } => {
            numeric::generate_norm_multiplier_key(&mut ctx.rng, key_value, *mean, *stddev)
        }

        GeneratorConfig::UniqEmail => email::generate_uniq_email(
            &mut ctx.rng,
            ctx.locale.as_mut(),
            &mut ctx.stores,
            ctx.max_unique_attempts,
        )?,

        GeneratorConfig::Unknown => return Ok(String::new()),
    };

    Ok(apply_pct_empty(&mut ctx.rng, value, column.pct_empty))
}

/// Replace `value` with an empty string with probability `pct_empty`.
pub fn apply_pct_empty<R: Rng + ?Sized>(rng: &mut R, value: String, pct_empty: f64) -> String {
    if pct_empty > 0.0 && rng.gen_bool(pct_empty.min(1.0)) {
        String::new()
    } else {
        value
    }
}
