#![warn(missing_docs, clippy::pedantic)]

//! Generates nicknames by gluing a random "beginning" word, a random "middle"
//! word and a random number in `0..=9999`.
//!
//! ```
//! use nickgen::{Nickgen, Seed, WordList};
//!
//! let beginning = WordList::from_words(["Foo"]).unwrap();
//! let middle = WordList::from_words(["Bar"]).unwrap();
//! let mut gen = Nickgen::new(beginning, middle, Seed::Fixed(42)).unwrap();
//!
//! let nick = gen.generate();
//! assert!(nick.starts_with("FooBar"));
//! assert!(nick["FooBar".len()..].parse::<u16>().unwrap() <= 9999);
//! ```
//!
//! [`Nickgen`] is also a [`rand::distr::Distribution`], so it can be sampled
//! with any RNG:
//!
//! ```
//! use nickgen::{Nickgen, Seed, WordList};
//! use rand::{Rng, SeedableRng};
//!
//! let words = WordList::from_words(["Neon", "Frost"]).unwrap();
//! let gen = Nickgen::new(words.clone(), words, Seed::Fixed(0)).unwrap();
//! let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(7);
//! let nicks = (&mut rng).sample_iter(&gen).take(3).collect::<Vec<String>>();
//! assert_eq!(nicks.len(), 3);
//! ```

#![allow(clippy::must_use_candidate)]

use std::io;
use std::path::PathBuf;

mod batch;
mod config;
mod generator;
mod wordlist;

pub use batch::{read_counts, run, write_batch, BatchReport};
pub use config::{Config, WordSource};
pub use generator::{Nickgen, RangeGenerator, Seed, MAX_SUFFIX};
pub use wordlist::WordList;

/// Error returned while loading word lists, reading counts or writing
/// nicknames.
///
/// # Examples
///
/// ```
/// let list = nickgen::WordList::from_words(Vec::<String>::new());
/// assert!(matches!(list, Err(nickgen::Error::EmptyWordList { .. })));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required word-list file does not exist.
    #[error("word list `{}` not found", path.display())]
    FileNotFound {
        /// The missing file.
        path: PathBuf,
    },

    /// A word list contained no usable entries after trimming.
    #[error("word list `{origin}` has no usable entries")]
    EmptyWordList {
        /// Where the list came from, usually a file path.
        origin: String,
    },

    /// A random generator was requested over a range with `start > end`.
    #[error("invalid random range [{start}, {end}]")]
    InvalidRange {
        /// Lower bound (inclusive).
        start: usize,
        /// Upper bound (inclusive).
        end: usize,
    },

    /// Batch count or batch size was missing, negative or not a number.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Reading input or writing the output file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
