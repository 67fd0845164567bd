//! Individual rewrite steps of the EDTF to TEMPER pipeline.
//!
//! Each pass is a pure `&str -> String` transformation. The converter applies
//! them in a fixed order:
//!
//! 1. [`standardize_range_syntax`] turns `..` and ` - ` intervals into `/`
//! 2. [`strip_season`] reduces `YYYY-2D` season dates to the year
//! 3. [`strip_component_dashes`] joins year, month and day
//! 4. [`pad_missing_day`] appends `00` to bare `YYYYMM` runs
//!
//! Lists additionally go through [`strip_list_brackets`], [`split_list`] and,
//! once every member is converted, [`harmonize_precision`].

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{Result, Unavailable};

/// Comma with any number of spaces on either side.
static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *, *").expect("Invalid list separator regex"));

/// A run of digits. Leftmost-first matching makes every match maximal.
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit run regex"));

/// Year followed by an EDTF season code (20 to 29).
static SEASON_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})-2[0-9]").expect("Invalid season regex"));

/// Dash after a digit or an uncertainty mark. A leading negative sign never
/// follows either, so it survives.
static COMPONENT_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9?])-").expect("Invalid component dash regex"));

/// Year and month with no day.
static SIX_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{6}").expect("Invalid six digit regex"));

/// Interval spellings that mean the same as `/`.
const RANGE_SYNTAX: [&str; 2] = ["..", " - "];

/// Characters that open or close an EDTF list.
const LIST_BRACKETS: [char; 4] = ['[', ']', '{', '}'];

/// Rewrites `..` and ` - ` intervals to the canonical `/` form.
pub fn standardize_range_syntax(date_point: &str) -> String {
    RANGE_SYNTAX
        .iter()
        .fold(date_point.to_string(), |acc, syntax| acc.replace(*syntax, "/"))
}

/// Removes list brackets from both ends.
///
/// Brackets are not matched against each other. Each of `[`, `]`, `{`, `}` is
/// trimmed from both ends in that order, so `[{1}]` becomes `1` while
/// `{[1]}` keeps its inner square brackets.
pub fn strip_list_brackets(edtf: &str) -> &str {
    LIST_BRACKETS
        .iter()
        .fold(edtf, |acc, bracket| acc.trim_matches(*bracket))
}

/// Splits list contents on commas, ignoring spaces around each comma.
pub fn split_list(contents: &str) -> Vec<&str> {
    LIST_SEPARATOR.split(contents).collect()
}

/// Replaces a `YYYY-2D` season date with its year.
///
/// The year must not be preceded by a digit and the season code must not be
/// followed by one, so `12001-21` and `2001-211` are left alone.
pub fn strip_season(date_point: &str) -> String {
    replace_bounded(
        &SEASON_DATE,
        date_point,
        |haystack, start, end| {
            !digit_before(haystack, start) && !haystack[end..].starts_with(is_digit)
        },
        |caps| caps[1].to_string(),
    )
}

/// Drops every `-` that directly follows a digit or `?`.
///
/// This removes the separators between year, month and day while keeping a
/// leading negative sign. A dash in front of a digit and a closing bracket
/// (`1999-1]`) is treated like any other component dash.
pub fn strip_component_dashes(date_point: &str) -> String {
    COMPONENT_DASH.replace_all(date_point, "$1").into_owned()
}

/// Pads a bare six digit `YYYYMM` run with a `00` day.
///
/// Runs that are part of a longer number, or that are followed by `?` and
/// another digit, are not padded.
pub fn pad_missing_day(date_point: &str) -> String {
    replace_bounded(
        &SIX_DIGITS,
        date_point,
        |haystack, start, end| {
            let rest = &haystack[end..];
            let rest = rest.strip_prefix('?').unwrap_or(rest);
            !digit_before(haystack, start) && !rest.starts_with(is_digit)
        },
        |caps| format!("{}00", &caps[0]),
    )
}

/// Truncates every digit run to the length of the shortest one.
///
/// A list mixing `1923` with `19240901` is reduced to year precision. Only
/// digits are affected; separators and markers stay where they are.
///
/// # Errors
///
/// Returns [`Unavailable::NoDigits`] when the string has no digit runs.
pub fn harmonize_precision(date_list: &str) -> Result<String> {
    let shortest = DIGIT_RUN
        .find_iter(date_list)
        .map(|run| run.as_str().len())
        .min()
        .ok_or(Unavailable::NoDigits)?;

    Ok(DIGIT_RUN
        .replace_all(date_list, |caps: &Captures<'_>| caps[0][..shortest].to_string())
        .into_owned())
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn digit_before(haystack: &str, index: usize) -> bool {
    haystack[..index].chars().next_back().is_some_and(is_digit)
}

/// Replaces matches of `pattern` for which `accept` holds.
///
/// When a match is rejected the search resumes one character after its
/// start, so a valid match overlapping a rejected one is still found. This
/// gives the fixed-width patterns above the behavior of lookaround
/// assertions, which `regex` does not support.
fn replace_bounded<A, R>(pattern: &Regex, haystack: &str, accept: A, replace: R) -> String
where
    A: Fn(&str, usize, usize) -> bool,
    R: Fn(&Captures<'_>) -> String,
{
    let mut rewritten = String::with_capacity(haystack.len() + 2);
    let mut copied = 0;
    let mut search_from = 0;

    while let Some(caps) = pattern.captures_at(haystack, search_from) {
        let Some(found) = caps.get(0) else {
            break;
        };
        if accept(haystack, found.start(), found.end()) {
            rewritten.push_str(&haystack[copied..found.start()]);
            rewritten.push_str(&replace(&caps));
            copied = found.end();
            search_from = found.end();
        } else {
            let step = haystack[found.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            search_from = found.start() + step;
        }
        if search_from > haystack.len() {
            break;
        }
    }

    rewritten.push_str(&haystack[copied..]);
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_syntax_becomes_slash() {
        assert_eq!(standardize_range_syntax("1670..1672"), "1670/1672");
        assert_eq!(standardize_range_syntax("1670 - 1672"), "1670/1672");
        assert_eq!(standardize_range_syntax("..1760-12-03"), "/1760-12-03");
        assert_eq!(standardize_range_syntax("1670-1672"), "1670-1672");
    }

    #[test]
    fn brackets_are_stripped_in_fixed_order() {
        assert_eq!(strip_list_brackets("[1667,1668]"), "1667,1668");
        assert_eq!(strip_list_brackets("{1902..1906}"), "1902..1906");
        assert_eq!(strip_list_brackets("[[1667]"), "1667");
        assert_eq!(strip_list_brackets("[{1}]"), "1");
        assert_eq!(strip_list_brackets("{[1]}"), "[1]");
    }

    #[test]
    fn list_splits_on_spaced_commas() {
        assert_eq!(
            split_list("1923, 1924-09-01 ,1925"),
            vec!["1923", "1924-09-01", "1925"]
        );
        assert_eq!(split_list("1667,"), vec!["1667", ""]);
    }

    #[test]
    fn season_collapses_to_year() {
        assert_eq!(strip_season("2001-21"), "2001");
        assert_eq!(strip_season("2001-29~"), "2001~");
        assert_eq!(strip_season("2001-21/2002-22"), "2001/2002");
    }

    #[test]
    fn season_requires_digit_boundaries() {
        assert_eq!(strip_season("12001-21"), "12001-21");
        assert_eq!(strip_season("2001-211"), "2001-211");
        assert_eq!(strip_season("2001-11"), "2001-11");
        assert_eq!(strip_season("2001-2123-21"), "2001-2123");
    }

    #[test]
    fn component_dashes_removed() {
        assert_eq!(strip_component_dashes("2016-01-11"), "20160111");
        assert_eq!(strip_component_dashes("2012-04-12~"), "20120412~");
        assert_eq!(strip_component_dashes("1984?-2004"), "1984?2004");
    }

    #[test]
    fn negative_sign_survives_dash_removal() {
        assert_eq!(strip_component_dashes("-0174"), "-0174");
        assert_eq!(strip_component_dashes("(2011)-06-04~"), "(2011)-0604~");
        assert_eq!(strip_component_dashes("1--2"), "1-2");
    }

    #[test]
    fn dash_before_digit_and_bracket_is_a_component_dash() {
        assert_eq!(strip_component_dashes("1999-1]"), "19991]");
        assert_eq!(strip_component_dashes("[-1]"), "[-1]");
    }

    #[test]
    fn six_digits_padded_with_day() {
        assert_eq!(pad_missing_day("200411"), "20041100");
        assert_eq!(pad_missing_day("200406~"), "20040600~");
        assert_eq!(pad_missing_day("200406?"), "20040600?");
    }

    #[test]
    fn six_digit_padding_needs_exact_run() {
        assert_eq!(pad_missing_day("2004"), "2004");
        assert_eq!(pad_missing_day("20041101"), "20041101");
        assert_eq!(pad_missing_day("1234567"), "1234567");
        assert_eq!(pad_missing_day("200406?1"), "200406?1");
    }

    #[test]
    fn precision_harmonized_to_shortest_run() {
        assert_eq!(
            harmonize_precision("1923, 19240901, 1925").as_deref(),
            Ok("1923, 1924, 1925")
        );
        assert_eq!(
            harmonize_precision("19020116-19061001").as_deref(),
            Ok("19020116-19061001")
        );
        assert_eq!(
            harmonize_precision("20040600~, 1999?").as_deref(),
            Ok("2004~, 1999?")
        );
    }

    #[test]
    fn precision_without_digits_is_unavailable() {
        assert_eq!(harmonize_precision("abc"), Err(Unavailable::NoDigits));
    }
}
