//! IBAN-shaped account identifiers and their generator.
//!
//! Layout: two-letter country code, two check digits, bank identifier,
//! account number. Parsing is syntactic; the ISO 7064 mod-97 checksum can be
//! verified separately and always holds for generated identifiers.

use core::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use thevault_core::{DomainError, DomainResult, ValueObject};

/// Shortest/longest identifier length accepted by the syntactic parser.
const MIN_LEN: usize = 15;
const MAX_LEN: usize = 34;

/// Digits in the randomized account-number suffix of generated identifiers.
const ACCOUNT_NUMBER_LEN: usize = 10;

/// An IBAN-shaped account identifier.
///
/// Immutable after construction; the only ways in are [`Iban::from_str`]
/// (syntactic validation) and [`Scheme::generate`]. Deserialization routes
/// through the same parser, so a decoded identifier is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-letter country prefix.
    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    /// Verify the ISO 7064 mod-97 checksum over the rearranged identifier.
    ///
    /// Parsing does not require this to hold (the port may carry legacy
    /// identifiers); generated identifiers always satisfy it.
    pub fn check_digits_valid(&self) -> bool {
        let rearranged = format!("{}{}", &self.0[4..], &self.0[..4]);
        mod97(&rearranged) == 1
    }
}

impl ValueObject for Iban {}

impl core::fmt::Display for Iban {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Iban {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < MIN_LEN || s.len() > MAX_LEN {
            return Err(DomainError::invalid_id(format!(
                "IBAN must be {MIN_LEN}..={MAX_LEN} characters, got {}",
                s.len()
            )));
        }
        let bytes = s.as_bytes();
        if !bytes[..2].iter().all(u8::is_ascii_uppercase) {
            return Err(DomainError::invalid_id(
                "IBAN must start with a two-letter uppercase country code",
            ));
        }
        if !bytes[2..4].iter().all(u8::is_ascii_digit) {
            return Err(DomainError::invalid_id(
                "IBAN country code must be followed by two check digits",
            ));
        }
        if !bytes[4..].iter().all(u8::is_ascii_alphanumeric) {
            return Err(DomainError::invalid_id(
                "IBAN bank/account segment must be alphanumeric",
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Iban {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Iban> for String {
    fn from(value: Iban) -> Self {
        value.0
    }
}

/// Country/bank scheme identifiers are generated under.
///
/// Validated once at construction so generation itself is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    country: String,
    bank: String,
}

impl Scheme {
    /// Build a scheme from a two-letter country code and a 1..=11 character
    /// alphanumeric bank code. Both are uppercased.
    pub fn new(country_code: &str, bank_code: &str) -> DomainResult<Self> {
        if country_code.len() != 2 || !country_code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(DomainError::validation(format!(
                "country code must be two ASCII letters, got `{country_code}`"
            )));
        }
        if bank_code.is_empty()
            || bank_code.len() > 11
            || !bank_code.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(DomainError::validation(format!(
                "bank code must be 1..=11 alphanumeric characters, got `{bank_code}`"
            )));
        }
        Ok(Self {
            country: country_code.to_ascii_uppercase(),
            bank: bank_code.to_ascii_uppercase(),
        })
    }

    /// Produce an identifier with a randomized account-number suffix and
    /// real check digits.
    ///
    /// No uniqueness guarantee beyond statistical collision avoidance;
    /// callers must verify uniqueness through the repository.
    pub fn generate(&self) -> Iban {
        let mut rng = rand::thread_rng();
        let suffix: u64 = rng.gen_range(0..10u64.pow(ACCOUNT_NUMBER_LEN as u32));
        let account_number = format!("{suffix:0ACCOUNT_NUMBER_LEN$}");

        // Check digits: move country + "00" to the end, then 98 - mod 97.
        let rearranged = format!("{}{}{}00", self.bank, account_number, self.country);
        let check = 98 - mod97(&rearranged);

        Iban(format!(
            "{}{check:02}{}{account_number}",
            self.country, self.bank
        ))
    }
}

impl Default for Scheme {
    /// The house scheme for newly created accounts.
    fn default() -> Self {
        Self {
            country: "NL".to_string(),
            bank: "TVLT".to_string(),
        }
    }
}

/// Generate a well-formed identifier under the given country/bank codes.
pub fn generate(country_code: &str, bank_code: &str) -> DomainResult<Iban> {
    Ok(Scheme::new(country_code, bank_code)?.generate())
}

/// Mod-97 remainder of an alphanumeric string, letters expanded A=10..Z=35.
fn mod97(s: &str) -> u32 {
    let mut rem: u32 = 0;
    for b in s.bytes() {
        if b.is_ascii_digit() {
            rem = (rem * 10 + u32::from(b - b'0')) % 97;
        } else {
            let v = u32::from(b.to_ascii_uppercase() - b'A') + 10;
            rem = (rem * 100 + v) % 97;
        }
    }
    rem
}
