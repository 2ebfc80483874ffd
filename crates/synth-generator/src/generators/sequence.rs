//! Per-key unique integer sequences.

use crate::generator::GeneratorError;
use crate::stores::UniqueStores;

/// Return the next number of the sequence for `key`.
///
/// Sequences start at 0 and grow by one per call. Each key value has its own
/// sequence, shared by every column drawing from it; `column` only names the
/// failing column on overflow.
pub fn generate_uniq_int32_by_key(
    stores: &mut UniqueStores,
    column: &str,
    key: &str,
) -> Result<String, GeneratorError> {
    stores
        .next_sequence(key)
        .map(|n| n.to_string())
        .ok_or_else(|| GeneratorError::SequenceOverflow {
            column: column.to_string(),
            key: key.to_string(),
        })
}
