//! Password hashing and account credential validation.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{validation::ValidationErrors, AppError};

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_USERNAME_LENGTH: usize = 150;
const MAX_PASSWORD_LENGTH: usize = 4096;
const MAX_SIMILARITY: f64 = 0.7;

const COMMON_PASSWORDS: &[&str] = &[
    "123456", "password", "12345678", "qwerty", "123456789", "12345", "1234", "111111",
    "1234567", "dragon", "123123", "baseball", "abc123", "football", "monkey", "letmein",
    "696969", "shadow", "master", "666666", "qwertyuiop", "123321", "mustang", "1234567890",
    "michael", "654321", "superman", "1qaz2wsx", "7777777", "121212", "000000", "qazwsx",
    "123qwe", "killer", "trustno1", "jordan", "jennifer", "zxcvbnm", "asdfgh", "hunter",
    "buster", "soccer", "harley", "batman", "andrew", "tigger", "sunshine", "iloveyou",
    "2000", "charlie", "robert", "thomas", "hockey", "ranger", "daniel", "starwars",
    "klaster", "112233", "george", "computer", "michelle", "jessica", "pepper", "1111",
    "zxcvbn", "555555", "11111111", "131313", "freedom", "777777", "pass", "maggie",
    "159753", "aaaaaa", "ginger", "princess", "joshua", "cheese", "amanda", "summer",
    "love", "ashley", "nicole", "chelsea", "biteme", "matthew", "access", "yankees",
    "987654321", "dallas", "austin", "thunder", "taylor", "matrix", "password1",
    "welcome", "passw0rd", "admin", "changeme", "qwerty123",
];

/// Hashes `password` into an argon2 PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC string.
///
/// Unparseable hashes, including the unusable marker given to accounts without a
/// password, never verify.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Collects every username rule violation under the `username` field.
pub fn validate_username(username: &str, errors: &mut ValidationErrors) {
    if username.is_empty() {
        errors.add("username", "This field may not be blank.");
        return;
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        errors.add(
            "username",
            format!(
                "Ensure this field has no more than {} characters.",
                MAX_USERNAME_LENGTH
            ),
        );
    }

    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));
    if !valid_chars {
        errors.add(
            "username",
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        );
    }
}

/// Collects every password policy violation under the `password` field.
///
/// Oversized passwords are rejected before any other rule runs, and the username
/// comparison is skipped for usernames that are themselves too long.
pub fn validate_password(password: &str, username: &str, errors: &mut ValidationErrors) {
    if password.is_empty() {
        errors.add("password", "This field may not be blank.");
        return;
    }

    let length = password.chars().count();
    if length > MAX_PASSWORD_LENGTH {
        errors.add(
            "password",
            format!(
                "Ensure this field has no more than {} characters.",
                MAX_PASSWORD_LENGTH
            ),
        );
        return;
    }

    if username.chars().count() <= MAX_USERNAME_LENGTH && is_too_similar(password, username) {
        errors.add("password", "The password is too similar to the username.");
    }

    if length < MIN_PASSWORD_LENGTH {
        errors.add(
            "password",
            format!(
                "This password is too short. It must contain at least {} characters.",
                MIN_PASSWORD_LENGTH
            ),
        );
    }

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.trim()) {
        errors.add("password", "This password is too common.");
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        errors.add("password", "This password is entirely numeric.");
    }
}

fn is_too_similar(password: &str, username: &str) -> bool {
    if username.is_empty() {
        return false;
    }

    let password = password.to_lowercase();
    let username = username.to_lowercase();

    if password.contains(&username) {
        return true;
    }

    similarity(&password, &username) >= MAX_SIMILARITY
}

/// Ratio of twice the longest common subsequence to the combined length.
fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let mut row = vec![0usize; b.len() + 1];
    for &ca in &a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    (2 * row[b.len()]) as f64 / (a.len() + b.len()) as f64
}
