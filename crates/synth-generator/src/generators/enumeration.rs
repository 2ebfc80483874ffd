//! Random selection from candidate lists.

use rand::Rng;
use std::collections::HashMap;

/// Pick one value uniformly at random. An empty list yields an empty string.
pub fn generate_enum<R: Rng + ?Sized>(rng: &mut R, values: &[String]) -> String {
    if values.is_empty() {
        return String::new();
    }
    values[rng.gen_range(0..values.len())].clone()
}

/// Pick one value from the candidates registered for `key_value`.
///
/// A key value without candidates yields an empty string.
pub fn generate_enum_by_key<R: Rng + ?Sized>(
    rng: &mut R,
    key_values: &HashMap<String, Vec<String>>,
    key_value: &str,
) -> String {
    match key_values.get(key_value) {
        Some(values) => generate_enum(rng, values),
        None => String::new(),
    }
}
