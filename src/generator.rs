use crate::{Error, WordList};
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest numeric suffix appended to a nickname.
pub const MAX_SUFFIX: usize = 9999;

/// Where the random streams of a generator come from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Seed {
    /// Seeded from the thread-local RNG, so every run differs.
    #[default]
    Entropy,
    /// Seeded from a fixed value, so runs are reproducible.
    Fixed(u64),
}

impl Seed {
    /// Creates the root RNG all per-producer streams are derived from.
    fn root(self) -> StdRng {
        match self {
            Self::Entropy => StdRng::from_rng(&mut rand::rng()),
            Self::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Draws uniformly distributed integers from a closed range `[start, end]`,
/// owning its own random stream.
///
/// # Examples
///
/// ```
/// use nickgen::{RangeGenerator, Seed};
///
/// let mut dice = RangeGenerator::new(1, 6, Seed::Fixed(1)).unwrap();
/// let roll = dice.draw();
/// assert!((1..=6).contains(&roll));
///
/// assert!(RangeGenerator::new(1, 0, Seed::Entropy).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct RangeGenerator {
    start: usize,
    end: usize,
    distr: Uniform<usize>,
    rng: StdRng,
}

impl RangeGenerator {
    /// Creates a generator over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end`.
    pub fn new(start: usize, end: usize, seed: Seed) -> Result<Self, Error> {
        Self::with_rng(start, end, seed.root())
    }

    fn with_rng(start: usize, end: usize, rng: StdRng) -> Result<Self, Error> {
        let distr =
            Uniform::new_inclusive(start, end).map_err(|_| Error::InvalidRange { start, end })?;
        Ok(Self {
            start,
            end,
            distr,
            rng,
        })
    }

    /// Draws the next value.
    #[inline]
    pub fn draw(&mut self) -> usize {
        self.distr.sample(&mut self.rng)
    }

    /// Lower bound (inclusive).
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Upper bound (inclusive).
    pub const fn end(&self) -> usize {
        self.end
    }
}

/// A nickname generator: beginning word + middle word + number.
///
/// Each of the three parts is drawn from an independent [`RangeGenerator`].
#[derive(Clone, Debug)]
pub struct Nickgen {
    beginning: WordList,
    middle: WordList,
    beginning_index: RangeGenerator,
    middle_index: RangeGenerator,
    suffix: RangeGenerator,
}

impl Nickgen {
    /// Creates a generator sampling from the given word lists.
    ///
    /// # Errors
    ///
    /// Only fails with [`Error::InvalidRange`], which cannot happen for
    /// lists built through [`WordList`].
    pub fn new(beginning: WordList, middle: WordList, seed: Seed) -> Result<Self, Error> {
        let mut root = seed.root();
        let beginning_index =
            RangeGenerator::with_rng(0, beginning.len() - 1, StdRng::from_rng(&mut root))?;
        let middle_index =
            RangeGenerator::with_rng(0, middle.len() - 1, StdRng::from_rng(&mut root))?;
        let suffix = RangeGenerator::with_rng(0, MAX_SUFFIX, StdRng::from_rng(&mut root))?;
        Ok(Self {
            beginning,
            middle,
            beginning_index,
            middle_index,
            suffix,
        })
    }

    /// The pool of beginning words.
    pub fn beginning(&self) -> &WordList {
        &self.beginning
    }

    /// The pool of middle words.
    pub fn middle(&self) -> &WordList {
        &self.middle
    }

    /// Generates one nickname from the internal random streams.
    pub fn generate(&mut self) -> String {
        let beginning = &self.beginning[self.beginning_index.draw()];
        let middle = &self.middle[self.middle_index.draw()];
        assemble(beginning, middle, self.suffix.draw())
    }

    /// Generates `size` nicknames in order.
    pub fn sample_batch(&mut self, size: usize) -> Vec<String> {
        let mut batch = Vec::new();
        self.fill_batch(&mut batch, size);
        batch
    }

    /// Replaces the contents of `batch` with `size` new nicknames, reusing its
    /// allocation.
    pub fn fill_batch(&mut self, batch: &mut Vec<String>, size: usize) {
        batch.clear();
        batch.extend((0..size).map(|_| self.generate()));
    }
}

impl Distribution<String> for Nickgen {
    /// Samples a nickname with an external RNG, leaving the internal streams
    /// untouched.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let beginning = &self.beginning[self.beginning_index.distr.sample(rng)];
        let middle = &self.middle[self.middle_index.distr.sample(rng)];
        assemble(beginning, middle, self.suffix.distr.sample(rng))
    }
}

fn assemble(beginning: &str, middle: &str, suffix: usize) -> String {
    format!("{beginning}{middle}{suffix}")
}
