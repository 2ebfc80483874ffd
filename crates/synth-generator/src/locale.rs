//! Locale-specific fake primitives.
//!
//! Generators only ask the locale source for raw values (currently email
//! addresses); uniqueness is enforced by the caller.

use rand::{Rng, RngCore};

/// Source of raw fake primitives.
pub trait LocaleSource {
    /// Produce a random email-formatted string. Values may repeat.
    fn email(&mut self, rng: &mut dyn RngCore) -> String;
}

/// Languages supported by [`BuiltinLocale`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Ru,
}

const EN_FIRST_NAMES: &[&str] = &[
    "james", "mary", "john", "patricia", "robert", "jennifer", "michael", "linda", "william",
    "elizabeth", "david", "barbara", "richard", "susan", "joseph", "jessica", "thomas", "sarah",
    "charles", "karen", "daniel", "nancy", "matthew", "lisa", "anthony", "betty", "mark",
    "margaret", "donald", "sandra",
];

const EN_LAST_NAMES: &[&str] = &[
    "smith", "johnson", "williams", "brown", "jones", "garcia", "miller", "davis", "rodriguez",
    "martinez", "hernandez", "lopez", "gonzalez", "wilson", "anderson", "taylor", "moore",
    "jackson", "martin", "lee", "thompson", "white", "harris", "clark", "lewis", "walker",
];

const EN_DOMAINS: &[&str] = &[
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "example.com", "mail.com",
    "aol.com", "icloud.com",
];

const RU_FIRST_NAMES: &[&str] = &[
    "aleksandr", "dmitriy", "maksim", "sergey", "andrey", "aleksey", "artem", "ilya", "kirill",
    "mikhail", "nikita", "anna", "mariya", "elena", "olga", "natalya", "tatyana", "irina",
    "ekaterina", "svetlana", "yuliya", "anastasiya", "darya", "polina",
];

const RU_LAST_NAMES: &[&str] = &[
    "ivanov", "smirnov", "kuznetsov", "popov", "vasilev", "petrov", "sokolov", "mikhaylov",
    "novikov", "fedorov", "morozov", "volkov", "alekseev", "lebedev", "semenov", "egorov",
    "pavlov", "kozlov", "stepanov", "nikolaev",
];

const RU_DOMAINS: &[&str] = &[
    "mail.ru", "yandex.ru", "rambler.ru", "list.ru", "bk.ru", "inbox.ru", "gmail.com",
];

/// Built-in word lists for English and (transliterated) Russian.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinLocale {
    lang: Lang,
}

impl BuiltinLocale {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    fn corpus(&self) -> (&'static [&'static str], &'static [&'static str], &'static [&'static str]) {
        match self.lang {
            Lang::En => (EN_FIRST_NAMES, EN_LAST_NAMES, EN_DOMAINS),
            Lang::Ru => (RU_FIRST_NAMES, RU_LAST_NAMES, RU_DOMAINS),
        }
    }
}

impl Default for BuiltinLocale {
    fn default() -> Self {
        Self::new(Lang::default())
    }
}

fn pick<'a>(rng: &mut dyn RngCore, words: &[&'a str]) -> &'a str {
    words[rng.gen_range(0..words.len())]
}

impl LocaleSource for BuiltinLocale {
    fn email(&mut self, rng: &mut dyn RngCore) -> String {
        let (first_names, last_names, domains) = self.corpus();
        let first = pick(rng, first_names);
        let last = pick(rng, last_names);
        let domain = pick(rng, domains);

        let user = match rng.gen_range(0..4) {
            0 => format!("{first}.{last}"),
            1 => format!("{first}{}", rng.gen_range(1..10_000)),
            2 => format!("{}{last}", &first[..1]),
            _ => format!("{first}_{last}{}", rng.gen_range(1..100)),
        };

        format!("{user}@{domain}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut locale = BuiltinLocale::new(Lang::En);

        for _ in 0..200 {
            let email = locale.email(&mut rng);
            let (user, domain) = email.split_once('@').expect("email must contain '@'");
            assert!(!user.is_empty());
            assert!(EN_DOMAINS.contains(&domain), "unexpected domain {domain}");
            assert!(email.is_ascii());
        }
    }

    #[test]
    fn test_ru_domains() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut locale = BuiltinLocale::new(Lang::Ru);

        for _ in 0..100 {
            let email = locale.email(&mut rng);
            let domain = email.rsplit('@').next().unwrap();
            assert!(RU_DOMAINS.contains(&domain));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut locale = BuiltinLocale::default();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(locale.email(&mut rng1), locale.email(&mut rng2));
    }
}
