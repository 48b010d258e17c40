//! Cell natures
//!
//! A nature distinguishes header, body and footer cells. It is inherited from
//! a table to its rows/columns, and from a row/column to the cells inserted
//! through it. Formats with their own groups keep them in [`Nature::Other`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Classification of a cell, row, column or table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Nature {
    Header,
    #[default]
    Body,
    Footer,
    /// Any other free-form group
    Other(String),
}

impl Nature {
    pub fn as_str(&self) -> &str {
        match self {
            Nature::Header => "header",
            Nature::Body => "body",
            Nature::Footer => "footer",
            Nature::Other(name) => name,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Nature::Header)
    }

    pub fn is_footer(&self) -> bool {
        matches!(self, Nature::Footer)
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Nature {
    fn from(name: &str) -> Self {
        match name {
            "header" => Nature::Header,
            "body" => Nature::Body,
            "footer" => Nature::Footer,
            other => Nature::Other(other.to_string()),
        }
    }
}

impl From<String> for Nature {
    fn from(name: String) -> Self {
        match name.as_str() {
            "header" | "body" | "footer" => Nature::from(name.as_str()),
            _ => Nature::Other(name),
        }
    }
}

impl From<Nature> for String {
    fn from(nature: Nature) -> Self {
        match nature {
            Nature::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Nature {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Nature::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_body() {
        assert_eq!(Nature::default(), Nature::Body);
    }

    #[test]
    fn test_names() {
        assert_eq!(Nature::from("header"), Nature::Header);
        assert_eq!(Nature::from("footer"), Nature::Footer);
        assert_eq!(
            Nature::from("legend".to_string()),
            Nature::Other("legend".to_string())
        );
        assert_eq!(Nature::Other("legend".into()).to_string(), "legend");
        assert_eq!(String::from(Nature::Header), "header");
        assert!("header".parse::<Nature>().unwrap().is_header());
    }
}
