//! Minimal line-oriented console abstraction.
//!
//! The interactive wrapper only ever reads one line (the article URL) and
//! writes lines of output. Putting that behind the [`Console`] trait keeps
//! the process's standard streams out of everything below `main`, so the
//! prompt/print flow can be exercised in tests with a scripted fake.

use std::io::{self, BufRead, Write};

/// One-line-in, lines-out interface to the user.
pub trait Console {
    /// Print `prompt` without a trailing newline and read one line of input,
    /// trailing newline stripped.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// [`Console`] over the process's stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}
