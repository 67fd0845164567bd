//! The value produced by a conversion.

use std::fmt;

use serde::{Serialize, Serializer};

/// Sentinel for input that cannot be expressed as TEMPER.
pub const UNAVAILABLE: &str = "(:unav) unavailable";

/// Sentinel for the literal input `unknown`.
pub const UNKNOWN: &str = "(:unkn) unknown";

/// A converted date: real TEMPER text or one of the two sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Temper {
    /// A string accepted by the TEMPER grammar, e.g. `20040601-`.
    Date(String),
    /// Renders as [`UNAVAILABLE`].
    Unavailable,
    /// Renders as [`UNKNOWN`].
    Unknown,
}

impl Temper {
    /// Returns the TEMPER text, or the sentinel string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Date(date) => date,
            Self::Unavailable => UNAVAILABLE,
            Self::Unknown => UNKNOWN,
        }
    }

    /// Returns true when this is a real date rather than a sentinel.
    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }
}

impl fmt::Display for Temper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Temper {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for Temper {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_render_fixed_text() {
        assert_eq!(Temper::Unavailable.to_string(), "(:unav) unavailable");
        assert_eq!(Temper::Unknown.to_string(), "(:unkn) unknown");
        assert!(!Temper::Unknown.is_date());
    }

    #[test]
    fn date_renders_verbatim() {
        let temper = Temper::Date("1984?-2004?~".to_string());
        assert_eq!(temper.as_str(), "1984?-2004?~");
        assert!(temper.is_date());
    }
}
