//! Fake data generation for seeding.
//!
//! Values are random but well formed. Email uniqueness is guaranteed only
//! within one generator's lifetime, not against existing store contents.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Alice", "Amara", "Bianca", "Bruno", "Carla", "Carlos", "Diego", "Elena",
    "Emil", "Fatima", "Felix", "Grace", "Gustavo", "Hana", "Hugo", "Ines", "Ivan", "Julia",
    "Kenji", "Laura", "Leo", "Lucia", "Marco", "Maria", "Nadia", "Nora", "Oscar", "Paula",
    "Pedro", "Priya", "Rosa", "Samir", "Sofia", "Tomas", "Uma", "Victor", "Wei", "Yara",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Becker", "Castillo", "Chen", "Costa", "Duarte", "Fernandez", "Fischer", "Garcia",
    "Gomez", "Haddad", "Herrera", "Ibrahim", "Jensen", "Kato", "Kowalski", "Lopez", "Marino",
    "Mendoza", "Moreau", "Nakamura", "Novak", "Okafor", "Ortega", "Pereira", "Quinn", "Ramos",
    "Rossi", "Santos", "Schmidt", "Silva", "Singh", "Sato", "Torres", "Vargas", "Weber",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];

/// Random name and email source with session-scoped email uniqueness.
pub struct FakeData {
    rng: StdRng,
    used_emails: HashSet<String>,
}

impl FakeData {
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(rand::random())
    }

    /// Deterministic generator for reproducible runs.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            used_emails: HashSet::new(),
        }
    }

    pub fn first_name(&mut self) -> String {
        Self::pick(&mut self.rng, FIRST_NAMES).to_string()
    }

    pub fn last_name(&mut self) -> String {
        Self::pick(&mut self.rng, LAST_NAMES).to_string()
    }

    /// ## Summary
    /// Produces an email address that has not been handed out by this
    /// generator before.
    ///
    /// The local part is derived from a fresh random name pair; on collision
    /// a numeric suffix is appended until the candidate is free.
    pub fn unique_email(&mut self) -> String {
        let mut attempt: u32 = 0;
        loop {
            let local = format!(
                "{}.{}",
                self.first_name().to_lowercase(),
                self.last_name().to_lowercase()
            );
            let domain = Self::pick(&mut self.rng, EMAIL_DOMAINS);
            let candidate = if attempt == 0 {
                format!("{local}@{domain}")
            } else {
                format!("{local}{attempt}@{domain}")
            };

            if self.used_emails.insert(candidate.clone()) {
                return candidate;
            }
            attempt += 1;
        }
    }

    fn pick<'a>(rng: &mut StdRng, values: &'a [&'a str]) -> &'a str {
        let idx = rng.gen_range(0..values.len());
        values[idx]
    }
}

impl Default for FakeData {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_well_formed_email(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    }

    #[test]
    fn test_names_are_non_empty() {
        let mut faker = FakeData::from_seed(1);

        for _ in 0..100 {
            assert!(!faker.first_name().is_empty());
            assert!(!faker.last_name().is_empty());
        }
    }

    #[test]
    fn test_emails_are_well_formed() {
        let mut faker = FakeData::from_seed(2);

        for _ in 0..100 {
            let email = faker.unique_email();
            assert!(is_well_formed_email(&email), "malformed email: {email}");
        }
    }

    #[test]
    fn test_emails_never_repeat_within_session() {
        let mut faker = FakeData::from_seed(3);
        let mut seen = HashSet::new();

        // Enough draws that candidate collisions occur and suffixing kicks in
        for _ in 0..500 {
            assert!(seen.insert(faker.unique_email()));
        }
    }

    #[test]
    fn test_seeded_generators_are_deterministic() {
        let mut a = FakeData::from_seed(42);
        let mut b = FakeData::from_seed(42);

        for _ in 0..20 {
            assert_eq!(a.first_name(), b.first_name());
            assert_eq!(a.unique_email(), b.unique_email());
        }
    }
}
