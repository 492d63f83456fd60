//! Deterministic bundle of RNG streams segregated by session concern.
//!
//! One attempt owns one bundle. Each stream is seeded from the single
//! user-visible seed through HMAC domain separation, so the primary draw,
//! the bonus draws and the advertised wait never perturb one another: the
//! same seed always reproduces the same attempt, bonus sets included.

use std::cell::{RefCell, RefMut};

use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sha2::Sha256;

const STREAM_PRIMARY: &[u8] = b"primary-set";
const STREAM_BONUS: &[u8] = b"bonus-sets";
const STREAM_WAIT: &[u8] = b"expected-wait";

/// Independent RNG streams for one analysis attempt.
#[derive(Debug, Clone)]
pub struct RngBundle {
    primary: RefCell<CountingRng<SmallRng>>,
    bonus: RefCell<CountingRng<SmallRng>>,
    wait: RefCell<CountingRng<SmallRng>>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        let primary = CountingRng::new(derive_stream_seed(seed, STREAM_PRIMARY));
        let bonus = CountingRng::new(derive_stream_seed(seed, STREAM_BONUS));
        let wait = CountingRng::new(derive_stream_seed(seed, STREAM_WAIT));
        Self {
            primary: RefCell::new(primary),
            bonus: RefCell::new(bonus),
            wait: RefCell::new(wait),
        }
    }

    /// Access the primary-set draw stream.
    #[must_use]
    pub fn primary(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.primary.borrow_mut()
    }

    /// Access the bonus-set draw stream.
    #[must_use]
    pub fn bonus(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.bonus.borrow_mut()
    }

    /// Access the expected-wait stream.
    #[must_use]
    pub fn wait(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.wait.borrow_mut()
    }

    /// Total draw calls across the whole attempt, for diagnostics.
    #[must_use]
    pub fn total_draws(&self) -> u64 {
        self.primary.borrow().draws() + self.bonus.borrow().draws() + self.wait.borrow().draws()
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: rand::RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn streams_are_deterministic_per_seed() {
        let a = RngBundle::from_user_seed(0xC0FFEE);
        let b = RngBundle::from_user_seed(0xC0FFEE);
        let xs: Vec<u32> = (0..8).map(|_| a.primary().gen_range(1..=45)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.primary().gen_range(1..=45)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn streams_are_independent() {
        let a = RngBundle::from_user_seed(7);
        let b = RngBundle::from_user_seed(7);
        // Burn the bonus stream on one bundle only.
        for _ in 0..32 {
            let _: u32 = a.bonus().r#gen();
        }
        let xa: u64 = a.primary().r#gen();
        let xb: u64 = b.primary().r#gen();
        assert_eq!(xa, xb);
    }

    #[test]
    fn stream_tags_separate_the_seeds() {
        assert_ne!(
            derive_stream_seed(42, STREAM_PRIMARY),
            derive_stream_seed(42, STREAM_BONUS)
        );
        assert_ne!(
            derive_stream_seed(42, STREAM_BONUS),
            derive_stream_seed(42, STREAM_WAIT)
        );
    }

    #[test]
    fn counting_rng_tracks_draws_per_stream_and_in_total() {
        let bundle = RngBundle::from_user_seed(1);
        assert_eq!(bundle.wait().draws(), 0);
        assert_eq!(bundle.total_draws(), 0);
        let _: u32 = bundle.wait().r#gen();
        let _: u32 = bundle.primary().r#gen();
        assert_eq!(bundle.wait().draws(), 1);
        assert_eq!(bundle.total_draws(), 2);
    }
}
