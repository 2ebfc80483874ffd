//! Normal-distribution generators.

use rand::Rng;
use rand_distr::StandardNormal;
use tracing::warn;

/// Absolute value of a sample from N(mean, stddev²).
pub fn sample_abs_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, stddev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    (mean + stddev * z).abs()
}

/// Generate a non-negative integer around `mean`.
pub fn generate_norm_int32<R: Rng + ?Sized>(rng: &mut R, mean: f64, stddev: f64) -> String {
    format!("{:.0}", sample_abs_normal(rng, mean, stddev))
}

/// Parse the number at the start of `input`, ignoring leading whitespace
/// and anything after the number (`"12abc"` reads as 12).
fn parse_leading_f64(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Multiply the key column's value by a normally distributed factor.
///
/// Only the leading number of the key value is used; a key value without
/// one is logged and treated as 0.
pub fn generate_norm_multiplier_key<R: Rng + ?Sized>(
    rng: &mut R,
    key_value: &str,
    mean: f64,
    stddev: f64,
) -> String {
    let base = match parse_leading_f64(key_value) {
        Some(value) => value,
        None => {
            warn!("Error when scanning key value '{}': no number found", key_value);
            0.0
        }
    };
    let multiplier = sample_abs_normal(rng, mean, stddev);
    format!("{:.2}", base * multiplier)
}
