//! Nominal name matchers.

use regex::Regex;
use std::fmt;

/// A matcher over the declared name of a class or interface.
///
/// `Name` compares for equality; `Regex` searches anywhere in the name, so
/// `Subject` matches `AsyncSubject` unless the pattern is anchored.
#[derive(Clone, Debug)]
pub enum TypePattern {
    Name(String),
    Regex(Regex),
}

impl TypePattern {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Compile a regular expression pattern.
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self::Regex)
    }

    pub fn matches_name(&self, name: &str) -> bool {
        match self {
            Self::Name(expected) => expected == name,
            Self::Regex(regex) => regex.is_match(name),
        }
    }

    /// Source text of the pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Regex(regex) => regex.as_str(),
        }
    }
}

impl fmt::Display for TypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl From<&str> for TypePattern {
    fn from(name: &str) -> Self {
        Self::name(name)
    }
}

impl From<Regex> for TypePattern {
    fn from(regex: Regex) -> Self {
        Self::Regex(regex)
    }
}
