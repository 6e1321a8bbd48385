//! Line-oriented console transport used for login and quiz presentation.

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

/// One input reader and one output writer, held for a whole quiz run.
///
/// The writer is flushed when the console is dropped, so buffered output is
/// released on every exit path, including errors and closed input.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

/// Console bound to the process's locked stdin and stdout.
pub type StdConsole = Console<StdinLock<'static>, StdoutLock<'static>>;

impl StdConsole {
    #[must_use]
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line, without its trailing `\n` or `\r\n`.
    ///
    /// Returns `Ok(None)` once the input is exhausted. An empty line is
    /// `Ok(Some(String::new()))`.
    ///
    /// # Errors
    ///
    /// Propagates read failures, including non UTF-8 input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    /// # Errors
    ///
    /// Propagates write failures.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// # Errors
    ///
    /// Propagates write failures.
    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Write `text` without a newline and flush, so it shows before the read.
    ///
    /// # Errors
    ///
    /// Propagates write or flush failures.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Write `prompt`, then read the reply.
    ///
    /// # Errors
    ///
    /// Propagates read and write failures.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompt(prompt)?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Drop for Console<R, W> {
    fn drop(&mut self) {
        let _ = self.output.flush();
    }
}
