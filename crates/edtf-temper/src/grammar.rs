//! TEMPER grammar check applied to every converted candidate.
//!
//! A TEMPER string is one or more date runs. Each run is an optional `bce` or
//! `-` prefix, at least four digits, an optional `?` and an optional `~`.
//! Runs are joined by `-`, `, ` or nothing, and the string may end with a
//! single `-` to mark an open range. Two constraints apply between runs:
//!
//! - `, ` must be followed by another run.
//! - A run ending in a bare `?` needs an explicit separator before the next.
//!
//! Timezones are not supported.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, Unavailable};

/// Whole-string TEMPER pattern, matched case-insensitively.
static TEMPER: LazyLock<Regex> = LazyLock::new(|| {
    const RUN: &str = r"(?:bce|-)?[0-9]{4,}";
    let open = format!(r"{RUN}(?:\?~|~)?");
    let uncertain = format!(r"{RUN}\?");
    Regex::new(&format!(
        r"(?i)^(?:{open}(?:-|, )?|{uncertain}(?:-|, ))*(?:{open}|{uncertain})-?$"
    ))
    .expect("Invalid TEMPER regex")
});

/// Returns the part of `candidate` that is a TEMPER date.
///
/// The whole candidate must match, except that one trailing newline is
/// tolerated and dropped from the result. Downstream consumers rely on this
/// leniency, so it is kept.
///
/// # Errors
///
/// Returns [`Unavailable::GrammarMismatch`] when the candidate is not TEMPER.
pub fn validate(candidate: &str) -> Result<&str> {
    let body = candidate.strip_suffix('\n').unwrap_or(candidate);
    if TEMPER.is_match(body) {
        Ok(body)
    } else {
        Err(Unavailable::GrammarMismatch {
            candidate: candidate.to_string(),
        })
    }
}

/// Returns true when `candidate` is accepted by [`validate`].
pub fn is_temper(candidate: &str) -> bool {
    validate(candidate).is_ok()
}
