use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random decision the generator makes.
pub trait Dice {
  /// Uniform integer in `lo..=hi`.
  fn roll(&mut self, lo: i64, hi: i64) -> i64;

  /// Uniform index in `0..len`; `len` is never zero.
  fn choose_index(&mut self, len: usize) -> usize;
}

pub fn choose<'a, T>(dice: &mut dyn Dice, items: &'a [T]) -> &'a T {
  &items[dice.choose_index(items.len())]
}

pub struct RandDice {
  rng: StdRng,
}

impl RandDice {
  /// Seeded when `seed` is given, otherwise from OS entropy.
  pub fn new(seed: Option<u64>) -> Self {
    let rng = match seed {
      Some(s) => StdRng::seed_from_u64(s),
      None => StdRng::from_entropy(),
    };
    Self { rng }
  }
}

impl Dice for RandDice {
  fn roll(&mut self, lo: i64, hi: i64) -> i64 {
    self.rng.gen_range(lo..=hi)
  }

  fn choose_index(&mut self, len: usize) -> usize {
    self.rng.gen_range(0..len)
  }
}
