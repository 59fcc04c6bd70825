// src/core/transcript.rs
use std::fmt;

use chrono::{Local, NaiveTime};

/// One console line: local wall-clock stamp plus message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub stamp: String,
    pub text: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stamp, self.text)
    }
}

/// Append-only console transcript. Unbounded for the lifetime of the panel.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<LogLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, msg: impl Into<String>) {
        self.push_at(Local::now().time(), msg);
    }

    pub fn push_at(&mut self, at: NaiveTime, msg: impl Into<String>) {
        self.lines.push(LogLine {
            stamp: at.format("%H:%M:%S").to_string(),
            text: msg.into(),
        });
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Lines appended after the first `start`.
    pub fn since(&self, start: usize) -> &[LogLine] {
        &self.lines[start.min(self.lines.len())..]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.text == text)
    }

    /// Whole transcript as newline-separated text (copy to clipboard).
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.len() * 48);
        for line in &self.lines {
            out.push_str(&line.to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_is_hh_mm_ss() {
        let mut t = Transcript::new();
        t.push_at(NaiveTime::from_hms_opt(9, 5, 7).unwrap(), "hello");
        assert_eq!(t.lines()[0].to_string(), "[09:05:07] hello");
    }

    #[test]
    fn since_clamps() {
        let mut t = Transcript::new();
        t.push("a");
        t.push("b");
        assert_eq!(t.since(1).len(), 1);
        assert!(t.since(10).is_empty());
    }
}
