//! Seeded randomness for rule building and example synthesis.
//!
//! Every random decision in the crate goes through [`RuleRng`], so a seed
//! pins down the rule, its examples and the challenge deck. Separate
//! concerns take separate named streams via [`RuleRng::for_context`].
//!
//! ```
//! use rust_zendo::core::RuleRng;
//!
//! let base = RuleRng::new(42);
//! let mut rules = base.for_context("rules");
//! let mut again = base.for_context("rules");
//!
//! assert_eq!(rules.gen_range_usize(0..1000), again.gen_range_usize(0..1000));
//! ```

use std::hash::{Hash, Hasher};
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct RuleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RuleRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeded from system entropy; the seed is still recorded for replay.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream named `context`, derived from this seed only.
    ///
    /// Draws already taken from `self` do not affect the result.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = rustc_hash::FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform sample in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Weighted index in one pass over `weights`, without a pre-sum.
    ///
    /// Walking the candidates in order with `total` the weight seen so far,
    /// one sample `u` is drawn per candidate and the candidate replaces the
    /// current pick when `u * (total + w) > total`. Index `i` ends up picked
    /// with probability `w_i / sum(w)`; a zero weight never is.
    ///
    /// `None` if every weight is zero.
    pub fn choose_running_sum(&mut self, weights: &[u32]) -> Option<usize> {
        let mut total = 0.0f64;
        let mut pick = None;

        for (i, &weight) in weights.iter().enumerate() {
            let sample = self.unit();
            let next = total + f64::from(weight);

            // With nothing seen yet the odds are next/next.
            let replace = if total == 0.0 { weight > 0 } else { sample * next > total };
            if replace {
                pick = Some(i);
            }
            total = next;
        }

        pick
    }

    /// Snapshot for [`RuleRng::from_state`].
    #[must_use]
    pub fn state(&self) -> RuleRngState {
        RuleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume exactly where a snapshot was taken.
    #[must_use]
    pub fn from_state(state: &RuleRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Position in a seeded stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
}
