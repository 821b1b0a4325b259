//! Interactive Bayes' rule runner for a keyword spam filter.
use std::io::{BufRead, Write};

use anyhow::Result;
use numeric_utils::probability::{spam_given_keyword, BayesResult, SpamCounts};

use crate::util::{capitalize, prompt_value, TokenReader};

pub const DEFAULT_KEYWORD: &str = "free";

/// Counts supplied on the command line; missing ones are prompted for.
#[derive(Debug, Default, Clone, Copy)]
pub struct PartialCounts {
    pub total: Option<u64>,
    pub with_keyword: Option<u64>,
    pub spam: Option<u64>,
    pub spam_and_keyword: Option<u64>,
}

fn value_or_prompt<R: BufRead, W: Write>(
    given: Option<u64>,
    tokens: &mut TokenReader<R>,
    out: &mut W,
    prompt: &str,
) -> Result<u64> {
    match given {
        Some(v) => Ok(v),
        None => prompt_value(tokens, out, prompt),
    }
}

/// Fill in the four counts, prompting on `out` for any not already given.
pub fn read_spam_counts<R: BufRead, W: Write>(
    given: PartialCounts,
    keyword: &str,
    input: R,
    out: &mut W,
) -> Result<SpamCounts> {
    let mut tokens = TokenReader::new(input);
    let total = value_or_prompt(given.total, &mut tokens, out, "Enter total number of emails: ")?;
    let with_keyword = value_or_prompt(
        given.with_keyword,
        &mut tokens,
        out,
        &format!("Enter number of emails containing '{}': ", keyword),
    )?;
    let spam = value_or_prompt(given.spam, &mut tokens, out, "Enter number of spam emails: ")?;
    let spam_and_keyword = value_or_prompt(
        given.spam_and_keyword,
        &mut tokens,
        out,
        &format!(
            "Enter number of emails that are both spam and contain '{}': ",
            keyword
        ),
    )?;
    Ok(SpamCounts::new(total, with_keyword, spam, spam_and_keyword))
}

pub fn run_bayes<R: BufRead, W: Write>(
    given: PartialCounts,
    keyword: &str,
    input: R,
    out: &mut W,
) -> Result<BayesResult> {
    let counts = read_spam_counts(given, keyword, input, out)?;
    log::debug!("Spam counts: {:?}", counts);

    let result = spam_given_keyword(&counts)?;
    writeln!(
        out,
        "P(Spam | {}): {:.4}",
        capitalize(keyword),
        result.p_spam_given_keyword
    )?;
    Ok(result)
}
