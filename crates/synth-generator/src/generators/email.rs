//! Unique email generator.

use crate::generator::GeneratorError;
use crate::locale::LocaleSource;
use crate::stores::UniqueStores;
use rand::Rng;

/// Draw email addresses from the locale source until one has not been
/// emitted yet in this run.
///
/// Gives up with [`GeneratorError::UniqueExhausted`] after `max_attempts`
/// draws.
pub fn generate_uniq_email<R: Rng>(
    rng: &mut R,
    locale: &mut dyn LocaleSource,
    stores: &mut UniqueStores,
    max_attempts: u32,
) -> Result<String, GeneratorError> {
    for _ in 0..max_attempts {
        let candidate = locale.email(rng);
        if stores.insert_email(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GeneratorError::UniqueExhausted {
        generator: "uniq_email",
        attempts: max_attempts,
        emitted: stores.email_count(),
    })
}
