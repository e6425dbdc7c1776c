use rand::{distributions::Uniform, prelude::Distribution, Rng};

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
/// ASCII punctuation, offered as the password "special" class
pub const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const USERNAME_SPECIAL: &[u8] = b"_-";

/// Builds a character pool out of the given classes, in order.
pub fn build_pool<'a>(classes: impl IntoIterator<Item = &'a [u8]>) -> Vec<u8> {
    classes.into_iter().flatten().copied().collect()
}

/// Draws `length` characters from `pool`, each picked independently and
/// uniformly at random.
///
/// # Arguments
///
/// * `pool` - The characters to draw from. Must not be empty.
/// * `length` - The number of characters to draw.
/// * `rng` - The random source. The quality of the output is only as good as
///   this source, so secrets should be drawn from `OsRng`.
///
/// # Returns
///
/// The drawn characters as a `String`, or `None` if the pool is empty.
pub fn sample<R: Rng + ?Sized>(pool: &[u8], length: usize, rng: &mut R) -> Option<String> {
    if pool.is_empty() {
        return None;
    }
    let between = Uniform::from(0..pool.len());

    let drawn: String = (0..length)
        .map(|_| pool[between.sample(rng)] as char)
        .collect();

    Some(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_sample_draws_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = build_pool([DIGITS, USERNAME_SPECIAL]);
        let drawn = sample(&pool, 64, &mut rng).unwrap();
        assert_eq!(drawn.len(), 64);
        assert!(drawn.bytes().all(|b| pool.contains(&b)));
    }

    #[test]
    fn test_sample_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample(&[], 8, &mut rng), None);
    }

    #[test]
    fn test_sample_zero_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample(LOWERCASE, 0, &mut rng).as_deref(), Some(""));
    }

    #[test]
    fn test_special_set_is_ascii_punctuation() {
        assert_eq!(SPECIAL.len(), 32);
        assert!(SPECIAL.iter().all(u8::is_ascii_punctuation));
    }
}
