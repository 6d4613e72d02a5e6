//! User generation with Japanese-locale fake data.

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, PostCode, StreetName};
use fake::faker::internet::raw::FreeEmail;
use fake::faker::name::raw::Name;
use fake::locales::JA_JP;
use rand::Rng;

use roster::models::User;

/// Generates directory user records with fake Japanese-locale data.
///
/// Each record gets an independently generated name, email, and postal
/// address; ids and timestamps come from [`User::new`].
pub struct UserGenerator;

impl UserGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single user.
    pub fn generate(&self, rng: &mut impl Rng) -> User {
        let name: String = Name(JA_JP).fake_with_rng(rng);
        let email: String = FreeEmail(JA_JP).fake_with_rng(rng);
        let address = self.generate_address(rng);

        User::new(name, email, address)
    }

    /// Generates multiple users.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<User> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Composes a postal address in Japanese order: postcode first, then
    /// city, street, and building number without separators.
    fn generate_address(&self, rng: &mut impl Rng) -> String {
        let post_code: String = PostCode(JA_JP).fake_with_rng(rng);
        let city: String = CityName(JA_JP).fake_with_rng(rng);
        let street: String = StreetName(JA_JP).fake_with_rng(rng);
        let building: String = BuildingNumber(JA_JP).fake_with_rng(rng);

        format!("〒{post_code} {city}{street}{building}")
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}
