use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use numeric_utils::NumericError;

/// Pulls whitespace-separated tokens from a line-oriented reader.
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

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read from input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Write `prompt`, then read and parse one value.
pub fn prompt_value<T, R, W>(tokens: &mut TokenReader<R>, out: &mut W, prompt: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", prompt)?;
    out.flush()?;

    let token = tokens
        .next_token()?
        .ok_or_else(|| NumericError::parse("", "unexpected end of input"))
        .with_context(|| format!("No answer for prompt {:?}", prompt.trim()))?;
    let value = token
        .parse::<T>()
        .map_err(|e| NumericError::parse(token.as_str(), e))?;
    Ok(value)
}

/// `free` -> `Free`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let mut tokens = TokenReader::new("1 2\n\n 3\n".as_bytes());
        let mut seen = Vec::new();
        while let Some(t) = tokens.next_token().unwrap() {
            seen.push(t);
        }
        assert_eq!(seen, vec!["1", "2", "3"]);
    }

    #[test]
    fn prompt_parses_and_echoes() {
        let mut tokens = TokenReader::new("42\n".as_bytes());
        let mut out = Vec::new();
        let v: u64 = prompt_value(&mut tokens, &mut out, "Number: ").unwrap();
        assert_eq!(v, 42);
        assert_eq!(String::from_utf8(out).unwrap(), "Number: ");
    }

    #[test]
    fn prompt_rejects_garbage_and_eof() {
        let mut out = Vec::new();
        let mut tokens = TokenReader::new("abc\n".as_bytes());
        let err = prompt_value::<u64, _, _>(&mut tokens, &mut out, "N: ").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NumericError>(),
            Some(NumericError::ParseError { .. })
        ));
        assert!(prompt_value::<u64, _, _>(&mut tokens, &mut out, "N: ").is_err());
    }

    #[test]
    fn capitalizes_first_letter() {
        assert_eq!(capitalize("free"), "Free");
        assert_eq!(capitalize(""), "");
    }
}
