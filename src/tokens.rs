//! Token classification for package lists.
//!
//! The command accepts a flat token list mixing package names and optional
//! version qualifiers (`numpy "1.2.3" pandas`). This module separates the
//! two and pairs them up, defaulting unspecified versions to the wildcard.

use anyhow::{Result, bail};
use regex::Regex;
use std::sync::LazyLock;

/// "Latest available version."
pub const WILDCARD: &str = "*";

/// A version-like token starts with a run of digits, dots, stars, or
/// comparison angles. Anchored at the start; only the matched prefix is
/// taken as the version.
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.*<>]+").expect("version pattern is valid"));

/// A package name paired with its version qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: String,
    pub version: String,
}

impl PackageSpec {
    /// True when no specific version was requested.
    pub fn is_wildcard(&self) -> bool {
        self.version == WILDCARD
    }

    /// The pip constraint suffix: `==1.2.3`, or empty for the wildcard.
    pub fn pip_constraint(&self) -> String {
        if self.is_wildcard() {
            String::new()
        } else {
            format!("=={}", self.version)
        }
    }
}

/// Split a token list into package names and version qualifiers.
///
/// Versions are right-padded with [`WILDCARD`] until the two lists have the
/// same length. Pairing is positional: the Nth version-like token goes with
/// the Nth name, regardless of where it appeared in the list. Callers that
/// interleave names and versions out of order get positional assignment,
/// not proximity assignment.
pub fn split_versions(tokens: &[String]) -> Result<(Vec<String>, Vec<String>)> {
    let mut names = Vec::new();
    let mut versions = Vec::new();

    for token in tokens {
        match VERSION_PATTERN.find(token) {
            Some(m) => versions.push(m.as_str().to_string()),
            None => names.push(token.clone()),
        }
    }

    if versions.len() > names.len() {
        bail!("Too many version numbers specified");
    }
    versions.resize(names.len(), WILDCARD.to_string());
    Ok((names, versions))
}

/// Classify a token list into [`PackageSpec`]s.
///
/// Empty tokens (an artifact of some host parsers) are dropped before
/// classification, so they neither become names nor consume a paired
/// version.
pub fn pair(tokens: &[String]) -> Result<Vec<PackageSpec>> {
    let tokens: Vec<String> = tokens.iter().filter(|t| !t.is_empty()).cloned().collect();
    let (names, versions) = split_versions(&tokens)?;
    Ok(names
        .into_iter()
        .zip(versions)
        .map(|(name, version)| PackageSpec { name, version })
        .collect())
}
