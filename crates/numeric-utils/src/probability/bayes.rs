use serde::{Deserialize, Serialize};

use crate::error::{NumericError, Result};

/// Raw email counts for a keyword spam filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpamCounts {
    pub total: u64,
    pub with_keyword: u64,
    pub spam: u64,
    pub spam_and_keyword: u64,
}

/// Probabilities derived from [`SpamCounts`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BayesResult {
    pub p_spam: f64,
    pub p_keyword: f64,
    pub p_keyword_given_spam: f64,
    pub p_spam_given_keyword: f64,
}

impl SpamCounts {
    pub fn new(total: u64, with_keyword: u64, spam: u64, spam_and_keyword: u64) -> Self {
        Self {
            total,
            with_keyword,
            spam,
            spam_and_keyword,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.total == 0 {
            return Err(NumericError::DivisionByZero("total number of emails"));
        }
        if self.with_keyword == 0 {
            return Err(NumericError::DivisionByZero("number of emails containing the keyword"));
        }
        if self.spam == 0 {
            return Err(NumericError::DivisionByZero("number of spam emails"));
        }
        if self.with_keyword > self.total || self.spam > self.total {
            return Err(NumericError::invalid(format!(
                "subset counts ({} with keyword, {} spam) cannot exceed the total of {}",
                self.with_keyword, self.spam, self.total
            )));
        }
        if self.spam_and_keyword > self.spam.min(self.with_keyword) {
            return Err(NumericError::invalid(format!(
                "{} spam emails with the keyword exceeds spam ({}) or keyword ({}) counts",
                self.spam_and_keyword, self.spam, self.with_keyword
            )));
        }
        Ok(())
    }
}

/// P(spam | keyword) via Bayes' rule:
///
/// P(spam | keyword) = P(keyword | spam) * P(spam) / P(keyword)
pub fn spam_given_keyword(counts: &SpamCounts) -> Result<BayesResult> {
    counts.validate()?;

    let total = counts.total as f64;
    let p_spam = counts.spam as f64 / total;
    let p_keyword = counts.with_keyword as f64 / total;
    let p_keyword_given_spam = counts.spam_and_keyword as f64 / counts.spam as f64;
    let p_spam_given_keyword = bayes_rule(p_keyword_given_spam, p_spam, p_keyword)?;

    log::debug!(
        "P(spam)={:.4} P(keyword)={:.4} P(keyword|spam)={:.4}",
        p_spam,
        p_keyword,
        p_keyword_given_spam
    );

    Ok(BayesResult {
        p_spam,
        p_keyword,
        p_keyword_given_spam,
        p_spam_given_keyword,
    })
}

/// P(A|B) = P(B|A) * P(A) / P(B).
pub fn bayes_rule(p_b_given_a: f64, p_a: f64, p_b: f64) -> Result<f64> {
    if p_b == 0.0 {
        return Err(NumericError::DivisionByZero("P(B)"));
    }
    Ok(p_b_given_a * p_a / p_b)
}
