//! Section names
//!
//! A section name is used verbatim in file globs and in generated javascript
//! and stylesheet lines, so it is validated once up front.

use std::fmt;
use std::str::FromStr;

use crate::common::string_utils;
use crate::error::{ImportError, Result, request};

/// A validated section identifier (e.g. `hero`, `hero_banner`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionName(String);

impl SectionName {
    /// Validate and wrap a raw section name
    ///
    /// Names must start with an ASCII letter and contain only ASCII letters,
    /// digits, `_` and `-`.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut chars = raw.chars();
        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        let rest_valid = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if starts_with_letter && rest_valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(request::invalid_name(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Javascript class symbol derived from the name (`hero_banner` -> `HeroBanner`,
    /// `testimonials` -> `Testimonial`)
    pub fn symbol(&self) -> String {
        string_utils::section_symbol(&self.0)
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SectionName {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for SectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
