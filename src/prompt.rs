//! Line-based prompts for the interactive session.
//!
//! Every prompt loops until it gets an acceptable answer. The only way out of
//! a prompt other than a valid answer is end of input, which is fatal.

use std::io::{BufRead, Write};

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::error::{Result, TaskError};
use crate::fields::{parse_choice, Priority};
use crate::task::time_from_hm;

/// Console wrapper over an input reader and an output writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print a full line.
    pub fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Write pre-rendered text as is.
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// Bytes that aren't valid UTF-8 are replaced, so the answer is simply
    /// rejected by whichever parser reads it.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(TaskError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Ask for a priority code until one of C/H/N/L is given.
    pub fn ask_priority(&mut self) -> Result<Priority> {
        loop {
            let answer = self.ask("Priority (C)ritical/(H)igh/(N)ormal/(L)ow: ")?;
            if let Some(priority) = parse_choice::<Priority>(&answer) {
                return Ok(priority);
            }
        }
    }

    /// Ask for a `yyyy-mm-dd` calendar date.
    pub fn ask_date(&mut self) -> Result<NaiveDate> {
        loop {
            let answer = self.ask("Date (yyyy-mm-dd): ")?;
            match parse_date(&answer) {
                Some(date) => return Ok(date),
                None => self.say("The input date is invalid")?,
            }
        }
    }

    /// Ask for an `hh:mm` time of day.
    pub fn ask_time(&mut self) -> Result<NaiveTime> {
        loop {
            let answer = self.ask("Time (hh:mm): ")?;
            match parse_time(&answer, Utc::now().date_naive()) {
                Some(time) => return Ok(time),
                None => self.say("The input time is invalid")?,
            }
        }
    }

    /// Read content lines until an empty one. Lines are trimmed, blank lines
    /// are dropped. The result is empty when the first line is blank.
    pub fn ask_content(&mut self) -> Result<String> {
        self.say("Task (finish with an empty line):")?;
        let mut lines: Vec<String> = Vec::new();
        loop {
            let line = self.ask("")?;
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            lines.push(line.to_string());
        }
        Ok(lines.join("\n"))
    }

    /// Ask repeatedly until `parse` accepts the answer, printing `invalid` after each rejection.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => self.say(invalid)?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse `yyyy-mm-dd` into a real calendar date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.trim().split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        return None;
    };
    NaiveDate::from_ymd_opt(y.trim().parse().ok()?, m.trim().parse().ok()?, d.trim().parse().ok()?)
}

/// Parse `hh:mm`, validating the clock values against `scaffold`'s date.
pub fn parse_time(input: &str, scaffold: NaiveDate) -> Option<NaiveTime> {
    let parts: Vec<&str> = input.trim().split(':').collect();
    let [h, m] = parts.as_slice() else {
        return None;
    };
    time_from_hm(h.trim().parse().ok()?, m.trim().parse().ok()?, scaffold)
}
