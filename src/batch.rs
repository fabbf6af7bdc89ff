use crate::{Config, Error, Nickgen};
use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, BufWriter, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Summary of a finished run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of nicknames appended.
    pub total: u64,
    /// Time spent generating and writing.
    pub elapsed: Duration,
}

impl fmt::Display for BatchReport {
    /// Formats as `Generated <total> in <milliseconds>ms`.
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// let report = nickgen::BatchReport { total: 10, elapsed: Duration::from_micros(1500) };
    /// assert_eq!(report.to_string(), "Generated 10 in 1.5ms");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::cast_precision_loss)]
        let millis = self.elapsed.as_nanos() as f64 / 1_000_000.0;
        write!(f, "Generated {} in {}ms", self.total, millis)
    }
}

/// Pulls whitespace-separated integers out of a line-oriented reader.
struct Counts<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Counts<R> {
    fn next(&mut self, what: &str) -> Result<u64, Error> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InvalidInput(format!("missing {what}")));
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        let token = self.pending.pop_front().unwrap_or_default();
        token.parse().map_err(|_| {
            Error::InvalidInput(format!(
                "{what} must be a non-negative integer, got `{token}`"
            ))
        })
    }
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<(), Error> {
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

/// Prompts for and reads the batch count and the number of nicknames per
/// batch, in that order.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if a value is missing or is not a
/// non-negative integer.
///
/// # Examples
///
/// ```
/// let mut prompts = Vec::new();
/// let counts = nickgen::read_counts(&b"3\n 25\n"[..], &mut prompts).unwrap();
/// assert_eq!(counts, (3, 25));
/// assert_eq!(prompts, b"Generation batches\nNumber of nicks per batch\n");
/// ```
pub fn read_counts<R: BufRead, W: Write>(input: R, mut out: W) -> Result<(u64, u64), Error> {
    let mut counts = Counts {
        input,
        pending: VecDeque::new(),
    };
    prompt(&mut out, "Generation batches")?;
    let batches = counts.next("batch count")?;
    prompt(&mut out, "Number of nicks per batch")?;
    let nick_size = counts.next("batch size")?;
    Ok((batches, nick_size))
}

/// Writes a batch, one nickname per line.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn write_batch<W: Write>(out: &mut W, batch: &[String]) -> Result<(), Error> {
    for nick in batch {
        out.write_all(nick.as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Runs a whole generation session.
///
/// Loads the word lists, asks for the counts on `input`/`out`, appends
/// `batches * nick_size` nicknames to [`Config::output`] one batch at a time,
/// and finally prints the [`BatchReport`] to `out`.
///
/// # Errors
///
/// Fails before touching the output file if a word list is missing or empty,
/// or if the counts are invalid or a batch of `nick_size` nicknames cannot be
/// allocated. Batches flushed before an I/O error stay in the output file.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    mut out: W,
) -> Result<BatchReport, Error> {
    let (beginning, middle) = config.source.load()?;
    let mut gen = Nickgen::new(beginning, middle, config.seed)?;

    let (batches, nick_size) = read_counts(input, &mut out)?;
    let total = batches.checked_mul(nick_size).ok_or_else(|| {
        Error::InvalidInput(format!("{batches} batches of {nick_size} nicks is too many"))
    })?;
    let batch_len = usize::try_from(nick_size)
        .map_err(|_| Error::InvalidInput(format!("batch size {nick_size} is too large")))?;
    let mut nicks = Vec::new();
    if total > 0 {
        nicks
            .try_reserve_exact(batch_len)
            .map_err(|_| Error::InvalidInput(format!("batch size {nick_size} is too large")))?;
    }

    let start = Instant::now();
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.output)?;
    let mut writer = BufWriter::new(file);
    // Nothing to write when either count is zero; the file is still created.
    let batches = if total == 0 { 0 } else { batches };
    for batch in 0..batches {
        gen.fill_batch(&mut nicks, batch_len);
        write_batch(&mut writer, &nicks)?;
        writer.flush()?;
        debug!(batch, size = nicks.len(), "flushed batch");
    }

    let report = BatchReport {
        total,
        elapsed: start.elapsed(),
    };
    info!(
        total,
        elapsed = ?report.elapsed,
        output = %config.output.display(),
        "generation finished"
    );
    writeln!(out, "{report}")?;
    out.flush()?;
    Ok(report)
}
