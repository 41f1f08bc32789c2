//! Compiled pattern kinds derived from an `Options` value.
//!
//! Each kind is built once per canonical key (see `cache`) and is immutable
//! afterwards. Literal strings are escaped with `regex::escape` before being
//! spliced into a pattern.

use crate::error::Result;
use ahash::AHashMap as HashMap;
use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};
use std::borrow::Cow;

/// Matches any run of characters outside `[a-zA-Z0-9]`.
pub(crate) static DEFAULT_PRESERVE: Lazy<PreservePattern> = Lazy::new(|| PreservePattern {
    regex: Regex::new(r"[^a-zA-Z0-9]+").expect("default preserve pattern is valid"),
});

/// Lowercase letter or digit followed by an uppercase letter: `fooBar`.
static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("camel boundary pattern is valid"));

/// Acronym followed by a capitalized word: `XMLHttp`.
static ACRONYM_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z]+)([A-Z][a-z0-9]+)").expect("acronym boundary pattern is valid")
});

/// Inserts spaces at camel-case word boundaries.
pub(crate) fn decamelize(text: &str) -> String {
    let split = CAMEL_BOUNDARY.replace_all(text, "$1 $2");
    ACRONYM_BOUNDARY.replace_all(&split, "$1 $2").into_owned()
}

/// Allow-list pattern: matches maximal runs of characters that are neither
/// ASCII alphanumeric nor preserved.
#[derive(Debug)]
pub(crate) struct PreservePattern {
    regex: Regex,
}

impl PreservePattern {
    pub(crate) fn cache_key(preserve: &[char]) -> String {
        preserve.iter().collect()
    }

    pub(crate) fn new(preserve: &[char]) -> Result<Self> {
        let escaped: String = preserve
            .iter()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();
        let regex = Regex::new(&format!("[^a-zA-Z0-9{}]+", escaped))?;
        Ok(Self { regex })
    }

    /// Replaces every disallowed run with exactly one `separator`.
    pub(crate) fn collapse<'t>(&self, text: &'t str, separator: &str) -> Cow<'t, str> {
        self.regex.replace_all(text, NoExpand(separator))
    }
}

/// Edge-trim pattern for one separator and pair of keep flags.
#[derive(Debug)]
pub(crate) struct TrimPattern {
    separator: String,
    leading: Regex,
    trailing: Regex,
    keep_leading: bool,
    keep_trailing: bool,
}

impl TrimPattern {
    pub(crate) fn cache_key(separator: &str, lead: bool, trail: bool) -> String {
        format!("{}|{}|{}", separator, lead, trail)
    }

    /// Builds the trimmer for a non-empty `separator`.
    ///
    /// The keep flags only take effect when the separator is the character
    /// they protect: `_` for the leading edge, `-` for the trailing edge.
    pub(crate) fn new(
        separator: &str,
        preserve_leading_underscore: bool,
        preserve_trailing_dash: bool,
    ) -> Result<Self> {
        debug_assert!(!separator.is_empty(), "trim needs a separator");
        let escaped = regex::escape(separator);
        Ok(Self {
            separator: separator.to_string(),
            leading: Regex::new(&format!("^(?:{})+", escaped))?,
            trailing: Regex::new(&format!("(?:{})+$", escaped))?,
            keep_leading: preserve_leading_underscore && separator == "_",
            keep_trailing: preserve_trailing_dash && separator == "-",
        })
    }

    /// Strips leading and trailing separator runs. A kept edge is reduced to
    /// a single separator instead of removed.
    pub(crate) fn trim(&self, text: &str) -> String {
        let (rest, head) = match self.leading.find(text) {
            Some(m) => (&text[m.end()..], self.keep_leading),
            None => (text, false),
        };
        let (body, tail) = match self.trailing.find(rest) {
            Some(m) => (&rest[..m.start()], self.keep_trailing),
            None => (rest, false),
        };

        let mut out = String::with_capacity(text.len());
        if head {
            out.push_str(&self.separator);
        }
        out.push_str(body);
        if tail {
            out.push_str(&self.separator);
        }
        out
    }
}

/// Single-pass substitution for a table of literal replacements.
#[derive(Debug)]
pub(crate) struct Replacer {
    regex: Regex,
    lookup: HashMap<String, String>,
}

impl Replacer {
    /// Every match string and replacement, each prefixed with its byte
    /// length, so no two distinct tables share a key.
    pub(crate) fn cache_key(table: &[(String, String)]) -> String {
        let mut key = String::new();
        for (from, to) in table {
            key.push_str(&format!("{}:{}{}:{}", from.len(), from, to.len(), to));
        }
        key
    }

    /// Compiles one alternation over the escaped match strings, in table
    /// order. When a match string repeats, its last replacement wins.
    pub(crate) fn new(table: &[(String, String)]) -> Result<Self> {
        let alternation = table
            .iter()
            .map(|(from, _)| regex::escape(from))
            .collect::<Vec<_>>()
            .join("|");
        let lookup = table
            .iter()
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect();

        Ok(Self {
            regex: Regex::new(&alternation)?,
            lookup,
        })
    }

    pub(crate) fn replace<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, |caps: &Captures<'_>| {
            self.lookup.get(&caps[0]).cloned().unwrap_or_default()
        })
    }
}
