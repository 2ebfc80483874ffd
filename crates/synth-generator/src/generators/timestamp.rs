//! Date and timestamp generators.

use crate::generator::GeneratorError;
use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use std::fmt::Write;

/// Sample an instant uniformly in `[lower, upper)`.
///
/// An empty or inverted interval yields `lower`.
pub fn sample_instant<R: Rng + ?Sized>(
    rng: &mut R,
    lower: DateTime<Utc>,
    upper: DateTime<Utc>,
) -> DateTime<Utc> {
    let span = upper.signed_duration_since(lower);
    if span <= TimeDelta::zero() {
        return lower;
    }

    match span.num_microseconds() {
        Some(micros) if micros > 0 => lower + TimeDelta::microseconds(rng.gen_range(0..micros)),
        Some(_) => lower,
        // Spans beyond ~292k years do not fit in microseconds
        None => lower + TimeDelta::seconds(rng.gen_range(0..span.num_seconds())),
    }
}

/// Generate a random date in `[lower, now)` rendered with a strftime format.
pub fn generate_date<R: Rng + ?Sized>(
    rng: &mut R,
    format: &str,
    lower: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<String, GeneratorError> {
    let instant = sample_instant(rng, lower, now);

    let mut out = String::new();
    write!(out, "{}", instant.format(format))
        .map_err(|_| GeneratorError::DateFormat(format.to_string()))?;
    Ok(out)
}

/// Generate a random unix timestamp (seconds) in `[lower, now)`.
pub fn generate_unix_timestamp<R: Rng + ?Sized>(
    rng: &mut R,
    lower: DateTime<Utc>,
    now: DateTime<Utc>,
) -> String {
    sample_instant(rng, lower, now).timestamp().to_string()
}
