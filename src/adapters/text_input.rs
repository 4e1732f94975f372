//! Line-oriented input format:
//!
//! ```text
//! N
//! <N proposer names>
//! <N proposer preference lines, proposee indices 1..=N>
//! <N proposee names>
//! <N proposee preference lines, proposer indices 1..=N, most preferred first>
//! ```
//!
//! Only the structure is checked here. Whether each line is a permutation is
//! left to `core::validator`.

use crate::domain::model::PreferenceInput;
use crate::utils::error::ParseError;
use std::str::Lines;

struct LineReader<'a> {
    lines: Lines<'a>,
    line_no: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self, expected: impl FnOnce() -> String) -> Result<&'a str, ParseError> {
        self.line_no += 1;
        self.lines
            .next()
            .map(str::trim)
            .ok_or_else(|| ParseError::MissingLine {
                line: self.line_no,
                expected: expected(),
            })
    }

    fn read_names(&mut self, role: &str, size: usize) -> Result<Vec<String>, ParseError> {
        (1..=size)
            .map(|i| {
                self.next_line(|| format!("the name of {} {}", role, i))
                    .map(str::to_string)
            })
            .collect()
    }

    fn read_preferences(&mut self, role: &str, size: usize) -> Result<Vec<Vec<i64>>, ParseError> {
        (1..=size)
            .map(|i| {
                let line = self.next_line(|| format!("the preference list of {} {}", role, i))?;
                let line_no = self.line_no;
                let values = line
                    .split_whitespace()
                    .map(|token| {
                        token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                            line: line_no,
                            token: token.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                if values.len() != size {
                    return Err(ParseError::WrongTokenCount {
                        line: line_no,
                        expected: size,
                        found: values.len(),
                    });
                }
                Ok(values)
            })
            .collect()
    }
}

pub fn parse_preferences(text: &str) -> Result<PreferenceInput, ParseError> {
    let mut reader = LineReader::new(text);

    let count_line = reader.next_line(|| "the number of matches".to_string())?;
    let size: usize = count_line.parse().map_err(|_| ParseError::InvalidCount {
        line: 1,
        value: count_line.to_string(),
    })?;

    // N = 0 是合法輸入，後面的內容一律忽略
    if size == 0 {
        tracing::debug!("Input declares zero matches");
        return Ok(PreferenceInput::default());
    }

    let proposer_names = reader.read_names("proposer", size)?;
    let proposer_lists = reader.read_preferences("proposer", size)?;
    let proposee_names = reader.read_names("proposee", size)?;
    let proposee_lists = reader.read_preferences("proposee", size)?;

    let trailing = reader.lines.filter(|line| !line.trim().is_empty()).count();
    if trailing > 0 {
        tracing::debug!("Ignoring {} trailing lines after the proposee preferences", trailing);
    }

    tracing::debug!("Parsed {} proposers and {} proposees", size, size);
    Ok(PreferenceInput {
        size,
        proposer_names,
        proposer_lists,
        proposee_names,
        proposee_lists,
    })
}
