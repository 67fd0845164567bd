//! Reasons an EDTF string cannot be expressed as TEMPER.

use thiserror::Error;

/// Why a conversion resolved to the unavailable sentinel.
///
/// These never reach callers of [`crate::convert`]; they exist so the
/// pipeline can short-circuit with `?` and so the cause can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Unavailable {
    /// Range with an empty start, which cannot be told apart from a BCE year.
    #[error("range has no start date")]
    OpenStart,

    /// More than one `/` in a single range.
    #[error("range has {parts} parts, expected at most 2")]
    TooManyRangeParts { parts: usize },

    /// A list member could not be converted, so the whole list is dropped.
    #[error("list member '{member}' is unavailable")]
    ListMember {
        member: String,
        #[source]
        source: Box<Unavailable>,
    },

    /// A list with no digit runs to harmonize.
    #[error("list contains no digits")]
    NoDigits,

    /// The rewritten string is not a TEMPER date.
    #[error("'{candidate}' does not match the TEMPER grammar")]
    GrammarMismatch { candidate: String },
}

/// Result type for the conversion pipeline.
pub type Result<T> = std::result::Result<T, Unavailable>;
