//! Conversion of Extended Date/Time Format (EDTF) strings to TEMPER.
//!
//! This crate turns EDTF date points, uncertain or approximate dates, ranges
//! and bracketed lists into the compact TEMPER notation used in library and
//! archival metadata:
//!
//! - **convert**: dispatch, list and range handling
//! - **passes**: the individual rewrite steps, each callable on its own
//! - **grammar**: the final TEMPER check
//! - **temper**: the output type and its sentinels
//!
//! Conversion never fails. Input that cannot be expressed as TEMPER becomes
//! `(:unav) unavailable`, and the literal `unknown` becomes `(:unkn) unknown`.

pub mod convert;
pub mod error;
pub mod grammar;
pub mod passes;
pub mod temper;

pub use convert::{EdtfToTemper, convert};
pub use error::Unavailable;
pub use temper::{Temper, UNAVAILABLE, UNKNOWN};
