//! Unique uniform number draws for the 6-of-45 game.

use rand::Rng;
use thiserror::Error;

/// Numbers per set.
pub const SET_SIZE: usize = 6;
/// Lowest drawable ball.
pub const BALL_MIN: u8 = 1;
/// Highest drawable ball.
pub const BALL_MAX: u8 = 45;
/// How many primary numbers a bonus draw inherits.
pub const BONUS_PREFIX_LEN: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("requested {count} distinct numbers from a range of {range}")]
    RangeExhausted { count: usize, range: usize },
    #[error("seed prefix longer than the requested draw ({prefix} > {count})")]
    PrefixTooLong { prefix: usize, count: usize },
    #[error("seed prefix value {0} outside the draw range")]
    PrefixOutOfRange(u8),
    #[error("duplicate seed prefix value {0}")]
    PrefixDuplicate(u8),
}

/// Draw `count` distinct integers in `[min, max]`, sorted ascending.
///
/// `prefix` pre-seeds the result with already-chosen values; the remaining
/// slots are filled by uniform rejection-on-duplicate sampling.
///
/// # Errors
///
/// Returns an error when the range cannot supply `count` distinct values or
/// the prefix itself violates the draw contract.
pub fn draw(
    rng: &mut impl Rng,
    count: usize,
    min: u8,
    max: u8,
    prefix: &[u8],
) -> Result<Vec<u8>, DrawError> {
    let range = if max >= min {
        usize::from(max - min) + 1
    } else {
        0
    };
    if count > range {
        return Err(DrawError::RangeExhausted { count, range });
    }
    if prefix.len() > count {
        return Err(DrawError::PrefixTooLong {
            prefix: prefix.len(),
            count,
        });
    }

    let mut numbers: Vec<u8> = Vec::with_capacity(count);
    for &value in prefix {
        if value < min || value > max {
            return Err(DrawError::PrefixOutOfRange(value));
        }
        if numbers.contains(&value) {
            return Err(DrawError::PrefixDuplicate(value));
        }
        numbers.push(value);
    }

    while numbers.len() < count {
        let candidate = rng.gen_range(min..=max);
        if !numbers.contains(&candidate) {
            numbers.push(candidate);
        }
    }
    numbers.sort_unstable();
    Ok(numbers)
}

/// Draw a fresh primary set.
pub fn draw_primary(rng: &mut impl Rng) -> Vec<u8> {
    draw(rng, SET_SIZE, BALL_MIN, BALL_MAX, &[]).expect("six of forty-five is always drawable")
}

/// Draw a bonus set built on the first numbers of `primary`.
pub fn draw_bonus(rng: &mut impl Rng, primary: &[u8]) -> Vec<u8> {
    let prefix = &primary[..BONUS_PREFIX_LEN.min(primary.len())];
    draw(rng, SET_SIZE, BALL_MIN, BALL_MAX, prefix)
        .expect("distinct primary numbers form a valid prefix")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn all_distinct(set: &[u8]) -> bool {
        set.iter()
            .enumerate()
            .all(|(i, n)| !set[..i].contains(n))
    }

    #[test]
    fn draws_are_distinct_sorted_and_in_range() {
        let mut rng = SmallRng::seed_from_u64(0xABCD);
        for _ in 0..10_000 {
            let set = draw_primary(&mut rng);
            assert_eq!(set.len(), SET_SIZE);
            assert!(set.windows(2).all(|w| w[0] < w[1]), "sorted and distinct");
            assert!(set.iter().all(|&n| (BALL_MIN..=BALL_MAX).contains(&n)));
            assert!(all_distinct(&set));
        }
    }

    #[test]
    fn bonus_draw_keeps_the_primary_prefix() {
        let mut rng = SmallRng::seed_from_u64(42);
        let primary = draw_primary(&mut rng);
        for _ in 0..100 {
            let bonus = draw_bonus(&mut rng, &primary);
            assert_eq!(bonus.len(), SET_SIZE);
            assert!(all_distinct(&bonus));
            for n in &primary[..BONUS_PREFIX_LEN] {
                assert!(bonus.contains(n), "prefix number {n} must survive");
            }
        }
    }

    #[test]
    fn exhausted_range_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let err = draw(&mut rng, 10, 1, 5, &[]).unwrap_err();
        assert_eq!(
            err,
            DrawError::RangeExhausted {
                count: 10,
                range: 5
            }
        );
        assert!(draw(&mut rng, 0, 5, 1, &[]).is_ok());
    }

    #[test]
    fn full_range_draw_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(9);
        let set = draw(&mut rng, 5, 1, 5, &[]).unwrap();
        assert_eq!(set, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn bad_prefixes_are_rejected() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(
            draw(&mut rng, 6, 1, 45, &[0]).unwrap_err(),
            DrawError::PrefixOutOfRange(0)
        );
        assert_eq!(
            draw(&mut rng, 6, 1, 45, &[7, 7]).unwrap_err(),
            DrawError::PrefixDuplicate(7)
        );
        assert_eq!(
            draw(&mut rng, 2, 1, 45, &[1, 2, 3]).unwrap_err(),
            DrawError::PrefixTooLong { prefix: 3, count: 2 }
        );
    }
}
