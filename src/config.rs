use crate::{Error, Seed, WordList};
use std::path::{Path, PathBuf};

/// Where the beginning and middle word lists are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordSource {
    /// Two files, one per pool.
    Separate {
        /// File with beginning words.
        beginning: PathBuf,
        /// File with middle words.
        middle: PathBuf,
    },
    /// A single dictionary feeding both pools.
    Shared {
        /// File with all words.
        dictionary: PathBuf,
    },
}

impl WordSource {
    /// Loads the beginning and middle lists.
    ///
    /// A shared dictionary is read once and used for both pools.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`WordList::load()`].
    pub fn load(&self) -> Result<(WordList, WordList), Error> {
        match self {
            Self::Separate { beginning, middle } => {
                Ok((WordList::load(beginning)?, WordList::load(middle)?))
            }
            Self::Shared { dictionary } => {
                let words = WordList::load(dictionary)?;
                Ok((words.clone(), words))
            }
        }
    }

    fn in_dir(self, dir: &Path) -> Self {
        match self {
            Self::Separate { beginning, middle } => Self::Separate {
                beginning: dir.join(beginning),
                middle: dir.join(middle),
            },
            Self::Shared { dictionary } => Self::Shared {
                dictionary: dir.join(dictionary),
            },
        }
    }
}

/// Settings of a generation run.
///
/// # Examples
///
/// ```
/// use nickgen::{Config, WordSource};
/// use std::path::Path;
///
/// let config = Config::one_dict().in_dir("/tmp/words");
/// assert_eq!(config.output, Path::new("/tmp/words/result"));
/// assert_eq!(
///     config.source,
///     WordSource::Shared { dictionary: "/tmp/words/dictionary".into() },
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Word-list files.
    pub source: WordSource,
    /// File the nicknames are appended to.
    pub output: PathBuf,
    /// Seed of the random streams.
    pub seed: Seed,
}

impl Default for Config {
    /// Reads `beginning` and `middle`, appends to `result`, all relative to
    /// the working directory, with entropy seeding.
    fn default() -> Self {
        Self {
            source: WordSource::Separate {
                beginning: "beginning".into(),
                middle: "middle".into(),
            },
            output: "result".into(),
            seed: Seed::Entropy,
        }
    }
}

impl Config {
    /// Like [`Config::default()`] but reads both pools from `dictionary`.
    pub fn one_dict() -> Self {
        Self {
            source: WordSource::Shared {
                dictionary: "dictionary".into(),
            },
            ..Self::default()
        }
    }

    /// Resolves every relative file name against `dir`.
    #[must_use]
    pub fn in_dir(self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            source: self.source.in_dir(dir),
            output: dir.join(self.output),
            seed: self.seed,
        }
    }

    /// Replaces the seed.
    #[must_use]
    pub fn with_seed(self, seed: Seed) -> Self {
        Self { seed, ..self }
    }
}
