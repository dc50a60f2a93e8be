use std::io::{self, BufRead, Write};

/// Line-oriented reader for menu choices.
pub struct Prompt<R: BufRead> {
    reader: R,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Prints `label`, then reads one trimmed line. `None` means input is closed.
    pub fn ask(&mut self, label: &str) -> Option<String> {
        print!("{}", label);
        io::stdout().flush().ok();

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Waits for Enter.
    pub fn pause(&mut self) -> Option<()> {
        self.ask("Press Enter to continue...").map(|_| ())
    }
}
