//! Mutable state shared by all generators during one run.

use crate::locale::{BuiltinLocale, LocaleSource};
use crate::stores::UniqueStores;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default number of draws before a unique generator gives up.
pub const DEFAULT_MAX_UNIQUE_ATTEMPTS: u32 = 1000;

/// Randomness, locale primitives and uniqueness stores for one run.
///
/// Constructed once per run and owned by the
/// [`RowAssembler`](crate::RowAssembler); nothing in here is global.
pub struct GenerationContext {
    pub(crate) rng: StdRng,
    pub(crate) locale: Box<dyn LocaleSource>,
    pub(crate) stores: UniqueStores,
    pub(crate) max_unique_attempts: u32,
}

impl GenerationContext {
    /// Create a context with the built-in English locale.
    ///
    /// With `Some(seed)` the random stream is reproducible; with `None` the
    /// RNG is seeded from the operating system.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            locale: Box::new(BuiltinLocale::default()),
            stores: UniqueStores::new(),
            max_unique_attempts: DEFAULT_MAX_UNIQUE_ATTEMPTS,
        }
    }

    /// Replace the locale-primitive source.
    pub fn with_locale(mut self, locale: impl LocaleSource + 'static) -> Self {
        self.locale = Box::new(locale);
        self
    }

    /// Cap the number of draws per unique value.
    pub fn with_max_unique_attempts(mut self, attempts: u32) -> Self {
        self.max_unique_attempts = attempts.max(1);
        self
    }

    /// Uniqueness state accumulated so far.
    pub fn stores(&self) -> &UniqueStores {
        &self.stores
    }

    pub fn max_unique_attempts(&self) -> u32 {
        self.max_unique_attempts
    }
}
