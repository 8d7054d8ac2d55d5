use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// Console backed by the process's stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut buffer = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut buffer)?;
        if bytes_read == 0 {
            // EOF, e.g. the user hit Ctrl-D or piped input ran out.
            return Ok(None);
        }
        Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}
