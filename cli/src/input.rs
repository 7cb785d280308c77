use std::collections::VecDeque;
use std::io::{self, BufRead};

/// One integer read from the console.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntInput {
    Value(i64),
    /// The next token was not an integer, the rest of its line was dropped.
    Malformed,
    Eof,
}

/// Reads whitespace separated integers, a line at a time.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_int(&mut self) -> io::Result<IntInput> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(match token.parse() {
                    Ok(value) => IntInput::Value(value),
                    Err(_) => {
                        log::debug!("Discarding malformed input {:?}", token);
                        self.pending.clear();
                        IntInput::Malformed
                    }
                });
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(IntInput::Eof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
