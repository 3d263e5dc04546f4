//! Natural ("human") ordering for file and directory names
//!
//! `chapter2` sorts before `chapter10`: runs of ASCII digits compare by
//! numeric value, everything else compares case-insensitively.

use std::cmp::Ordering;
use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").expect("digit pattern is valid");
}

/// One piece of a natural sort key
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyPart {
    Text(String),
    /// Digit run with leading zeros stripped
    Number(String),
}

impl Ord for KeyPart {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (KeyPart::Text(a), KeyPart::Text(b)) => a.cmp(b),
            (KeyPart::Number(a), KeyPart::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            // Keys always alternate text, number, text, ... so mixed pairs
            // only show up past the end of a shorter key
            (KeyPart::Number(_), KeyPart::Text(_)) => Ordering::Less,
            (KeyPart::Text(_), KeyPart::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for KeyPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key comparing digit runs numerically
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<KeyPart>);

/// Build the natural sort key of a string
pub fn natural_sort_key(s: &str) -> NaturalKey {
    let mut parts = Vec::new();
    let mut last = 0;

    for m in DIGIT_RUN.find_iter(s) {
        parts.push(KeyPart::Text(s[last..m.start()].to_lowercase()));
        let digits = m.as_str().trim_start_matches('0');
        parts.push(KeyPart::Number(if digits.is_empty() { "0".to_string() } else { digits.to_string() }));
        last = m.end();
    }
    parts.push(KeyPart::Text(s[last..].to_lowercase()));

    NaturalKey(parts)
}

/// Sort paths in place by the natural key of their full path
pub fn sort_paths<P: AsRef<Path>>(paths: &mut [P]) {
    paths.sort_by_cached_key(|p| natural_sort_key(&p.as_ref().to_string_lossy()));
}
