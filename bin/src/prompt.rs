use log::debug;
use std::{
    io::{self, BufRead, Write},
    ops::RangeInclusive,
};

use crate::display::Pacer;

/// Line-based prompt/response over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    pacer: Pacer,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, pacer: Pacer) -> Self {
        Self {
            input,
            output,
            pacer,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Paced line of text.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        self.pacer.write_line(&mut self.output, text.as_ref())
    }

    /// Unpaced text, no newline added.
    pub fn print(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        write!(self.output, "{}", text.as_ref())?;
        self.output.flush()
    }

    fn next_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Shows `> ` and reads one line, without its line ending.
    pub fn read_line(&mut self) -> io::Result<String> {
        self.print("> ")?;
        self.next_line()
    }

    /// Asks until the answer is a plain decimal number inside `valid`.
    pub fn ask_number(
        &mut self,
        question: &[&str],
        valid: RangeInclusive<usize>,
        retry: &str,
    ) -> io::Result<usize> {
        loop {
            for line in question {
                self.say(line)?;
            }
            let answer = self.read_line()?;
            let answer = answer.trim();

            let number = answer
                .chars()
                .all(|c| c.is_ascii_digit())
                .then(|| answer.parse::<usize>().ok())
                .flatten()
                .filter(|n| valid.contains(n));

            match number {
                Some(n) => return Ok(n),
                None => {
                    debug!("rejected answer {answer:?}");
                    self.say(retry)?;
                }
            }
        }
    }

    /// True if the answer starts with `y`, in either case.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.say(question)?;
        Ok(self.read_line()?.trim().to_lowercase().starts_with('y'))
    }

    pub fn wait_for_enter(&mut self) -> io::Result<()> {
        self.print("Press Enter to continue...")?;
        self.next_line().map(drop)
    }
}
