//! Choice logs and transcript comparison for deterministic replay.
//!
//! A choice log records the 1-based index picked at every menu, top-level and
//! nested, in the order they were resolved. Replaying a log against the same
//! initial universe must reproduce the same transcript byte for byte.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::FictionError;

/// The ordered sequence of menu selections made during a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceLog {
    choices: Vec<usize>,
}

impl ChoiceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a 1-based choice.
    pub fn record(&mut self, choice: usize) {
        self.choices.push(choice);
    }

    /// The recorded 1-based choices in order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.choices.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl From<Vec<usize>> for ChoiceLog {
    fn from(choices: Vec<usize>) -> Self {
        Self { choices }
    }
}

impl fmt::Display for ChoiceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.choices.iter().map(|c| c.to_string()).collect();
        writeln!(f, "{}", parts.join(" "))
    }
}

impl FromStr for ChoiceLog {
    type Err = FictionError;

    /// Parse whitespace- or comma-separated positive integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut log = ChoiceLog::new();
        for token in s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let choice: usize = token
                .parse()
                .map_err(|_| FictionError::InvalidChoiceLog(format!("not a number: {token:?}")))?;
            if choice == 0 {
                return Err(FictionError::InvalidChoiceLog(
                    "choices are 1-based; found 0".to_string(),
                ));
            }
            log.record(choice);
        }
        Ok(log)
    }
}

/// The first line where two transcripts disagree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "transcripts differ at line {line}:\n  expected: {}\n  actual:   {}",
    shown(.expected),
    shown(.actual)
)]
pub struct TranscriptMismatch {
    /// 1-based line number.
    pub line: usize,
    /// The saved line, or `None` past the end.
    pub expected: Option<String>,
    /// The freshly generated line, or `None` past the end.
    pub actual: Option<String>,
}

fn shown(line: &Option<String>) -> String {
    match line {
        Some(line) => format!("{line:?}"),
        None => "end of transcript".to_string(),
    }
}

/// Compare a saved transcript with a freshly generated one, byte for byte.
///
/// Lines are split on `\n` only, so a carriage return or a missing final
/// newline is reported as a difference.
pub fn compare_transcripts(expected: &str, actual: &str) -> Result<(), TranscriptMismatch> {
    if expected == actual {
        return Ok(());
    }
    let mut expected_lines = expected.split('\n');
    let mut actual_lines = actual.split('\n');
    let mut line = 0;
    loop {
        line += 1;
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return Ok(()),
            (e, a) if e == a => continue,
            (e, a) => {
                let mismatch = TranscriptMismatch {
                    line,
                    expected: e.map(str::to_string),
                    actual: a.map(str::to_string),
                };
                warn!(line, "transcript mismatch");
                return Err(mismatch);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_space_separated() {
        let log = ChoiceLog::from(vec![3, 1, 12]);
        insta::assert_snapshot!(log.to_string().trim_end(), @"3 1 12");
    }

    #[test]
    fn parse_accepts_mixed_separators() {
        let log: ChoiceLog = "3, 1\n12\t2".parse().unwrap();
        assert_eq!(log.iter().collect::<Vec<_>>(), vec![3, 1, 12, 2]);
        assert_eq!("".parse::<ChoiceLog>().unwrap().len(), 0);
    }

    #[test]
    fn parse_rejects_zero_and_words() {
        assert!("1 0 2".parse::<ChoiceLog>().is_err());
        assert!("1 two".parse::<ChoiceLog>().is_err());
    }

    #[test]
    fn display_parses_back() {
        let log = ChoiceLog::from(vec![5, 4, 1]);
        assert_eq!(log.to_string().parse::<ChoiceLog>().unwrap(), log);
    }

    #[test]
    fn identical_transcripts_match() {
        assert!(compare_transcripts("a\nb\n", "a\nb\n").is_ok());
    }

    #[test]
    fn mismatch_reports_first_line() {
        let err = compare_transcripts("a\nb\nc\n", "a\nx\nc\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.expected.as_deref(), Some("b"));
        assert_eq!(err.actual.as_deref(), Some("x"));
    }

    #[test]
    fn truncated_transcript_mismatches() {
        let err = compare_transcripts("a\nb\n", "a\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.actual.as_deref(), Some(""));
    }

    #[test]
    fn missing_final_newline_mismatches() {
        let err = compare_transcripts("Goodbye.\n", "Goodbye.").unwrap_err();
        assert_eq!(err.line, 2);
        insta::assert_snapshot!(err.to_string(), @r#"
        transcripts differ at line 2:
          expected: ""
          actual:   end of transcript
        "#);
    }

    #[test]
    fn carriage_returns_mismatch() {
        let err = compare_transcripts("Look\nGoodbye.\n", "Look\r\nGoodbye.\r\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.expected.as_deref(), Some("Look"));
        assert_eq!(err.actual.as_deref(), Some("Look\r"));
    }
}
