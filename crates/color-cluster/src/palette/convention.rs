//! Naming conventions a caller can select by name.

use std::fmt;
use std::str::FromStr;

use super::error::PaletteError;

/// Which palette names the extracted colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingConvention {
    /// The 16 CSS2 basic colors, built in.
    Css2,
    /// The xkcd color survey list (~950 names), fetched from a remote list.
    Xkcd,
}

impl NamingConvention {
    /// All conventions, in the order they are advertised.
    pub const ALL: [NamingConvention; 2] = [NamingConvention::Css2, NamingConvention::Xkcd];

    /// Canonical lowercase selector.
    pub fn as_str(self) -> &'static str {
        match self {
            NamingConvention::Css2 => "css2",
            NamingConvention::Xkcd => "xkcd",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingConvention {
    type Err = PaletteError;

    /// Resolve a selector such as `"css2"` or `" XKCD "`.
    ///
    /// ```
    /// use color_cluster::{NamingConvention, PaletteError};
    ///
    /// assert_eq!("xkcd".parse::<NamingConvention>().unwrap(), NamingConvention::Xkcd);
    /// assert!(matches!(
    ///     "foo".parse::<NamingConvention>(),
    ///     Err(PaletteError::UnknownConvention(_))
    /// ));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css2" => Ok(NamingConvention::Css2),
            "xkcd" => Ok(NamingConvention::Xkcd),
            _ => Err(PaletteError::UnknownConvention(s.to_string())),
        }
    }
}
