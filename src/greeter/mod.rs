//! Greeter: prints a banner followed by numbered lines tagged even or odd.
//!
//! One greeting block is:
//! - the banner line (`Hello, World!`)
//! - for each index `i` in `0..line_count`, `This is line i` then the parity label
//!
//! The text is produced by [`Greeter::lines`]; every writer path goes through it.

mod parity;

pub use parity::Parity;

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::GreeterError;

/// Fixed parameters of a greeting block. Only the default is reachable
/// outside the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GreeterConfig {
    banner: &'static str,
    line_count: u32,
}

impl GreeterConfig {
    const DEFAULT_BANNER: &'static str = "Hello, World!";

    const DEFAULT_LINE_COUNT: u32 = 5;

    /// Lines in one block: the banner plus two per index.
    fn block_len(&self) -> usize {
        1 + 2 * self.line_count as usize
    }
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            banner: Self::DEFAULT_BANNER,
            line_count: Self::DEFAULT_LINE_COUNT,
        }
    }
}

/// Emits the greeting block. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct Greeter {
    config: GreeterConfig,
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(GreeterConfig::default())
    }
}

impl Greeter {
    pub(crate) fn new(config: GreeterConfig) -> Self {
        Self { config }
    }

    /// Lines in one block.
    pub fn block_len(&self) -> usize {
        self.config.block_len()
    }

    /// Lines of one block, in order, without trailing newlines.
    pub fn lines(&self) -> impl Iterator<Item = String> {
        let GreeterConfig { banner, line_count } = self.config;

        std::iter::once(banner.to_string()).chain((0..line_count).flat_map(|index| {
            [
                format!("This is line {}", index),
                Parity::of(index).label().to_string(),
            ]
        }))
    }

    /// Write one block to `writer`, one `\n`-terminated line at a time.
    pub fn write_greeting<W: Write>(&self, writer: &mut W) -> Result<(), GreeterError> {
        debug!(
            banner = self.config.banner,
            line_count = self.config.line_count,
            "writing greeting"
        );

        for line in self.lines() {
            trace!(%line, "line");
            writeln!(writer, "{}", line)?;
        }

        writer.flush()?;
        debug!("greeting written");
        Ok(())
    }

    /// Write one block to standard output.
    ///
    /// Stdout stays locked for the whole block so concurrent writers cannot
    /// interleave with it.
    pub fn emit_greeting(&self) -> Result<(), GreeterError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_greeting(&mut handle)
    }

    /// Render one block into a string (useful for tests and benchmarks).
    pub fn render_greeting(&self) -> String {
        self.lines().fold(String::new(), |mut text, line| {
            text.push_str(&line);
            text.push('\n');
            text
        })
    }
}

/// Print the default greeting block to standard output.
pub fn emit_greeting() -> Result<(), GreeterError> {
    Greeter::default().emit_greeting()
}
