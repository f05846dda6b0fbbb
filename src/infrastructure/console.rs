use crate::domain::ports::Console;
use crate::error::{PosError, Result};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// A [`Console`] over any buffered reader and writer.
///
/// Production wires it to stdin/stdout via [`LineConsole::stdio`]; tests use
/// a byte slice of scripted answers and a `Vec<u8>` to capture the output.
pub struct LineConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl LineConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the writer, e.g. to inspect what a
    /// scripted session printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, field: &'static str, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(PosError::InputClosed(field));
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        // Bytes that are not UTF-8 become U+FFFD rather than failing the read.
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
