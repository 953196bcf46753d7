//! File name convention: `<family>/<identifier>.<version>.<ext>`.
//!
//! The file name is split on `.`; the last token is the extension. Trailing
//! tokens accepted by the [`VersionMatcher`] form the version, as long as at
//! least one token is left for the identifier. The parent directory name is
//! the family.

use crate::config::VersionRule;
use crate::error::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub identifier: String,
    pub version: Option<String>,
    pub family: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("no file name in {0:?}")]
    NoFileName(PathBuf),
    #[error("file name is not valid UTF-8: {0:?}")]
    NonUtf8(PathBuf),
    #[error("empty identifier in {0:?}")]
    EmptyIdentifier(PathBuf),
}

/// Compiled form of a [`VersionRule`]
#[derive(Debug, Clone, Default)]
pub enum VersionMatcher {
    #[default]
    Numeric,
    Disabled,
    Pattern(Regex),
}

impl VersionMatcher {
    pub fn from_rule(rule: &VersionRule) -> Result<Self> {
        Ok(match rule {
            VersionRule::Numeric => Self::Numeric,
            VersionRule::Disabled => Self::Disabled,
            VersionRule::Pattern(pattern) => Self::Pattern(Regex::new(&format!("^(?:{pattern})$"))?),
        })
    }

    pub fn matches(&self, token: &str) -> bool {
        match self {
            Self::Numeric => !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()),
            Self::Disabled => false,
            Self::Pattern(re) => !token.is_empty() && re.is_match(token),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NameParser {
    version: VersionMatcher,
}

impl NameParser {
    pub fn new(version: VersionMatcher) -> Self {
        Self { version }
    }

    pub fn parse(&self, path: &Path) -> std::result::Result<ParsedName, NameError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| NameError::NoFileName(path.to_path_buf()))?
            .to_str()
            .ok_or_else(|| NameError::NonUtf8(path.to_path_buf()))?;

        let tokens: Vec<&str> = file_name.split('.').collect();
        let stem = match tokens.split_last() {
            Some((_extension, rest)) if !rest.is_empty() => rest,
            _ => &tokens[..],
        };

        let mut split = stem.len();
        while split > 1 && self.version.matches(stem[split - 1]) {
            split -= 1;
        }

        let identifier = stem[..split].join(".");
        if identifier.is_empty() {
            return Err(NameError::EmptyIdentifier(path.to_path_buf()));
        }
        let version = (split < stem.len()).then(|| stem[split..].join("."));

        let family = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(ParsedName {
            identifier,
            version,
            family,
        })
    }
}
