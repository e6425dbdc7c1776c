//! Random username and password generation.
//!
//! Usernames are identifiers, not secrets: any uniform random source will do
//! and the HTTP layer uses the thread-local generator. Passwords are secrets
//! and the HTTP layer always draws them from the operating system's CSPRNG.
//!
//! Every character is drawn independently and uniformly from the pool built
//! out of the selected classes. Passwords carry no guarantee that each
//! selected class appears, so a short password may miss one by chance.

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::debug;

use crate::error::ServiceError;

pub mod pwgen;

use pwgen::{build_pool, sample, DIGITS, LOWERCASE, SPECIAL, UPPERCASE, USERNAME_SPECIAL};

pub const USERNAME_LENGTH: RangeInclusive<usize> = 3..=50;
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 4..=100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameOptions {
    pub length: usize,
    /// Literal text the username starts with, counted towards `length`
    pub prefix: String,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl Default for UsernameOptions {
    fn default() -> Self {
        Self {
            length: 8,
            prefix: String::new(),
            include_numbers: true,
            include_special: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special: true,
        }
    }
}

impl UsernameOptions {
    /// Lowercase letters always, then the opted-in classes
    pub fn pool(&self) -> Vec<u8> {
        let mut classes = vec![LOWERCASE];
        if self.include_numbers {
            classes.push(DIGITS);
        }
        if self.include_special {
            classes.push(USERNAME_SPECIAL);
        }
        build_pool(classes)
    }
}

impl PasswordOptions {
    pub fn pool(&self) -> Vec<u8> {
        let selected = [
            (self.include_uppercase, UPPERCASE),
            (self.include_lowercase, LOWERCASE),
            (self.include_numbers, DIGITS),
            (self.include_special, SPECIAL),
        ];
        build_pool(
            selected
                .into_iter()
                .filter_map(|(included, class)| included.then_some(class)),
        )
    }
}

fn check_length(
    kind: &str,
    length: usize,
    bounds: &RangeInclusive<usize>,
) -> Result<(), ServiceError> {
    if length < *bounds.start() {
        return Err(ServiceError::validation(format!(
            "{kind} length must be at least {} characters.",
            bounds.start()
        )));
    }
    if length > *bounds.end() {
        return Err(ServiceError::validation(format!(
            "{kind} length must be at most {} characters.",
            bounds.end()
        )));
    }
    Ok(())
}

pub fn generate_username<R: Rng + ?Sized>(
    options: &UsernameOptions,
    rng: &mut R,
) -> Result<String, ServiceError> {
    check_length("Username", options.length, &USERNAME_LENGTH)?;

    let remaining = options
        .length
        .checked_sub(options.prefix.chars().count())
        .ok_or_else(|| ServiceError::validation("Prefix is longer than desired length."))?;

    let pool = options.pool();
    debug!(pool_size = pool.len(), remaining, "Generating username");
    let suffix = sample(&pool, remaining, rng)
        .ok_or_else(|| ServiceError::validation("At least one character type must be selected."))?;

    Ok(format!("{}{}", options.prefix, suffix))
}

pub fn generate_password<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, ServiceError> {
    check_length("Password", options.length, &PASSWORD_LENGTH)?;

    let pool = options.pool();
    debug!(pool_size = pool.len(), length = options.length, "Generating password");
    sample(&pool, options.length, rng)
        .ok_or_else(|| ServiceError::validation("At least one character type must be selected."))
}
