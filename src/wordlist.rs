use crate::Error;
use std::io::{self, BufRead, BufReader};
use std::ops::Index;
use std::path::Path;
use tracing::{debug, warn};

/// An ordered, non-empty list of trimmed words used as a sampling pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Loads a word list from a file, one entry per line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file does not exist,
    /// [`Error::EmptyWordList`] if it holds no usable entries, and
    /// [`Error::Io`] for any other read failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = fs_err::File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.to_owned(),
            },
            _ => Error::Io(e),
        })?;
        let list = Self::from_reader(BufReader::new(file), &path.display().to_string())?;
        debug!(path = %path.display(), entries = list.len(), "loaded word list");
        Ok(list)
    }

    /// Reads a word list from any buffered reader.
    ///
    /// Every line is trimmed and lines left empty are dropped. Lines which are
    /// not valid UTF-8 are skipped. `origin` names the source in errors and
    /// log events.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWordList`] if no line survives, or [`Error::Io`]
    /// if reading fails.
    ///
    /// # Examples
    ///
    /// ```
    /// let list = nickgen::WordList::from_reader(&b"  Foo \n\n\t\nBar\r\n"[..], "inline").unwrap();
    /// assert_eq!(list.as_slice(), ["Foo", "Bar"]);
    /// ```
    pub fn from_reader<R: BufRead>(mut reader: R, origin: &str) -> Result<Self, Error> {
        let mut words = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0_usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let word = line.trim();
                    if !word.is_empty() {
                        words.push(word.to_owned());
                    }
                }
                Err(e) => warn!(origin, line = line_no, error = %e, "skipping undecodable line"),
            }
        }
        Self::checked(words, origin)
    }

    /// Builds a word list from in-memory entries, applying the same trimming
    /// rules as [`from_reader()`](WordList::from_reader).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWordList`] if no entry survives trimming.
    pub fn from_words<I>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_owned())
            .filter(|w| !w.is_empty())
            .collect();
        Self::checked(words, "<memory>")
    }

    fn checked(words: Vec<String>, origin: &str) -> Result<Self, Error> {
        if words.is_empty() {
            return Err(Error::EmptyWordList {
                origin: origin.to_owned(),
            });
        }
        Ok(Self { words })
    }

    /// Number of entries. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; an empty list cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The entries in file order.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }
}

impl Index<usize> for WordList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
