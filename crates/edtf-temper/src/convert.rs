//! EDTF to TEMPER conversion.
//!
//! Dispatch happens on the trimmed input:
//!
//! - `unknown` (any case) becomes [`Temper::Unknown`]
//! - input starting with `[` or `{` is a list of dates and ranges
//! - anything else is a single date point or range
//!
//! The candidate string is then checked against the TEMPER grammar. Every
//! failure along the way resolves to [`Temper::Unavailable`]; nothing is
//! returned to the caller as an error.

use tracing::{debug, trace};

use crate::error::{Result, Unavailable};
use crate::grammar;
use crate::passes::{
    harmonize_precision, pad_missing_day, split_list, standardize_range_syntax,
    strip_component_dashes, strip_list_brackets, strip_season,
};
use crate::temper::Temper;

/// Markers for the open side of a range. Removing them leaves that side empty.
const OPEN_MARKERS: [&str; 2] = ["open", "unknown"];

/// A single EDTF input together with its TEMPER conversion.
///
/// The conversion runs once, in [`EdtfToTemper::new`]. Build a new value for
/// every input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdtfToTemper {
    edtf: String,
    temper: Temper,
}

impl EdtfToTemper {
    /// Trims and converts `edtf`.
    pub fn new(edtf: &str) -> Self {
        let edtf = edtf.trim().to_string();
        let temper = make_temper(&edtf);
        Self { edtf, temper }
    }

    /// The trimmed input.
    pub fn edtf(&self) -> &str {
        &self.edtf
    }

    /// The converted value.
    pub fn temper(&self) -> &Temper {
        &self.temper
    }

    /// Consumes the holder, returning the converted value.
    pub fn into_temper(self) -> Temper {
        self.temper
    }
}

/// Converts an EDTF string to TEMPER.
///
/// ```
/// use edtf_temper::{Temper, convert};
///
/// assert_eq!(convert("2004-06-01/unknown").as_str(), "20040601-");
/// assert_eq!(convert("unknown/2006"), Temper::Unavailable);
/// ```
pub fn convert(edtf: &str) -> Temper {
    EdtfToTemper::new(edtf).into_temper()
}

fn make_temper(edtf: &str) -> Temper {
    if edtf.to_lowercase() == "unknown" {
        return Temper::Unknown;
    }

    let candidate = if is_list(edtf) {
        convert_list(edtf)
    } else {
        convert_date_point(edtf)
    };

    match candidate.and_then(|candidate| {
        trace!(edtf, %candidate, "validating TEMPER candidate");
        grammar::validate(&candidate).map(str::to_string)
    }) {
        Ok(date) => Temper::Date(date),
        Err(reason) => {
            debug!(edtf, %reason, "EDTF date is unavailable as TEMPER");
            Temper::Unavailable
        }
    }
}

fn is_list(edtf: &str) -> bool {
    edtf.starts_with(['[', '{'])
}

/// Converts a bracketed list of dates and ranges.
///
/// Members are converted independently and joined with `, `, then reduced to
/// the coarsest precision present in the list.
///
/// # Errors
///
/// Fails if any member is unavailable, or if the list holds no digits.
pub fn convert_list(edtf: &str) -> Result<String> {
    let members = split_list(strip_list_brackets(edtf))
        .into_iter()
        .map(|member| {
            convert_date_point(member).map_err(|source| Unavailable::ListMember {
                member: member.to_string(),
                source: Box::new(source),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    harmonize_precision(&members.join(", "))
}

/// Converts one date point or range.
///
/// The input is lowercased and alternate interval notations are rewritten to
/// `/` before deciding whether it is a range.
///
/// # Errors
///
/// Fails only for malformed ranges; see [`convert_range`].
pub fn convert_date_point(date_point: &str) -> Result<String> {
    let date_point = standardize_range_syntax(&date_point.to_lowercase());
    if date_point.contains('/') {
        return convert_range(&date_point);
    }
    Ok(normalize_point(&date_point))
}

/// Converts a `/` separated range, joining the two sides with `-`.
///
/// `open` and `unknown` are removed first. An empty end gives an open range
/// (`20040601-`).
///
/// # Errors
///
/// An empty start is rejected because it would read as a negative year, and
/// more than two parts is a malformed range.
pub fn convert_range(edtf_range: &str) -> Result<String> {
    let edtf_range = OPEN_MARKERS
        .iter()
        .fold(edtf_range.to_string(), |acc, marker| acc.replace(*marker, ""));
    let parts: Vec<&str> = edtf_range.split('/').collect();

    match parts.as_slice() {
        [start, ..] if start.is_empty() => Err(Unavailable::OpenStart),
        [start, end] => Ok(format!(
            "{}-{}",
            normalize_point(start),
            normalize_point(end)
        )),
        [point] => Ok(normalize_point(point)),
        _ => Err(Unavailable::TooManyRangeParts { parts: parts.len() }),
    }
}

/// Season strip, then dash removal, then day padding.
fn normalize_point(date_point: &str) -> String {
    let date_point = strip_season(date_point);
    let date_point = strip_component_dashes(&date_point);
    pad_missing_day(&date_point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_input() {
        let converted = EdtfToTemper::new("  2008 \n");
        assert_eq!(converted.edtf(), "2008");
        assert_eq!(converted.temper().as_str(), "2008");
    }

    #[test]
    fn unknown_is_case_insensitive() {
        assert_eq!(convert("UnKnOwN"), Temper::Unknown);
        assert_eq!(convert("  unknown  "), Temper::Unknown);
    }

    #[test]
    fn range_open_end_keeps_trailing_dash() {
        assert_eq!(convert_range("2004-06-01/").as_deref(), Ok("20040601-"));
        assert_eq!(convert_range("1936/open").as_deref(), Ok("1936-"));
    }

    #[test]
    fn range_open_start_rejected() {
        assert_eq!(convert_range("unknown/2006"), Err(Unavailable::OpenStart));
        assert_eq!(convert_range("/1760-12-03"), Err(Unavailable::OpenStart));
    }

    #[test]
    fn range_with_three_parts_rejected() {
        assert_eq!(
            convert_range("2001/2002/2003"),
            Err(Unavailable::TooManyRangeParts { parts: 3 })
        );
    }

    #[test]
    fn date_point_lowercases_and_standardizes() {
        assert_eq!(
            convert_date_point("1936/OPEN").as_deref(),
            Ok("1936-")
        );
        assert_eq!(
            convert_date_point("1670..1672").as_deref(),
            Ok("1670-1672")
        );
        assert_eq!(
            convert_date_point("1670 - 1672").as_deref(),
            Ok("1670-1672")
        );
    }

    #[test]
    fn list_member_failure_poisons_list() {
        let err = convert_list("[1667, ..1760]").unwrap_err();
        assert_eq!(
            err,
            Unavailable::ListMember {
                member: "..1760".to_string(),
                source: Box::new(Unavailable::OpenStart),
            }
        );
    }

    #[test]
    fn list_without_digits_is_unavailable() {
        assert_eq!(convert_list("[abc]"), Err(Unavailable::NoDigits));
        assert_eq!(convert("[abc]"), Temper::Unavailable);
    }
}
