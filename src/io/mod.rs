//! Input/output abstractions
//!
//! The console talks to the operator only through these traits, so tests
//! can script a session with the mocks in [`test_utils`].

use std::io::{self, BufRead, Write};

/// Trait for reading operator input
pub trait InputReader {
    /// Prompts and reads one line. Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, io::Error>;
}

/// Trait for writing output to the operator
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, io::Error> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Scripted I/O for tests. Integration tests reach it through the
/// `test-utils` feature.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils {
    use super::*;
    use std::collections::VecDeque;

    /// Mock input reader that replays canned lines
    pub struct MockInput {
        responses: VecDeque<String>,
    }

    impl MockInput {
        pub fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: responses.into_iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl InputReader for MockInput {
        fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, io::Error> {
            Ok(self.responses.pop_front())
        }
    }

    /// Mock output writer that records every line
    #[derive(Default)]
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        /// True if any recorded line contains `needle`.
        pub fn contains(&self, needle: &str) -> bool {
            self.messages.iter().any(|m| m.contains(needle))
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }
}
