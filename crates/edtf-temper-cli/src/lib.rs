//! CLI library components for the EDTF to TEMPER converter.

pub mod cli;
pub mod logging;
pub mod run;
