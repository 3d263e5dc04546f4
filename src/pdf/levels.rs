//! Bookmark level classification
//!
//! Chapter and section bookmarks are recognised from their titles: keyword
//! tables come from `bookmark_levels.toml` (embedded at build time, and
//! replaceable with a user file), with a fallback on leading numbering such
//! as `3.` (chapter) or `3.2` (section).

use std::fs;
use std::path::Path;
use lazy_static::lazy_static;

use crate::errors::{ToolkitError, ToolkitResult};

lazy_static! {
    // Parse the embedded keyword tables once
    static ref DEFAULT_RULES: LevelRules = {
        let content = include_str!("../../bookmark_levels.toml");
        LevelRules::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse bookmark level definitions: {}", e);
            LevelRules::builtin()
        })
    };
}

/// Inferred level of a bookmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkLevel {
    /// Top level division (chapter, part)
    Chapter,
    /// Second level division (section)
    Section,
    /// Not recognised; ignored when splitting by chapters
    Other,
}

/// Keyword tables used to classify bookmark titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRules {
    /// Lowercase keywords marking a chapter
    pub chapter_indicators: Vec<String>,
    /// Lowercase keywords marking a section
    pub section_indicators: Vec<String>,
}

impl Default for LevelRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

impl LevelRules {
    /// Keyword tables compiled into the binary, used if the embedded TOML is broken
    fn builtin() -> Self {
        LevelRules {
            chapter_indicators: vec!["章".to_string(), "chapter".to_string(), "part".to_string()],
            section_indicators: vec!["节".to_string(), "section".to_string(), "小节".to_string()],
        }
    }

    /// Parse keyword tables from a TOML string
    ///
    /// Expected layout: `[chapter] indicators = [...]` and
    /// `[section] indicators = [...]`. A missing table leaves that level
    /// without keywords.
    pub fn from_str(content: &str) -> ToolkitResult<Self> {
        let toml_value: toml::Value = content.parse()?;

        Ok(LevelRules {
            chapter_indicators: Self::parse_indicators(&toml_value, "chapter")?,
            section_indicators: Self::parse_indicators(&toml_value, "section")?,
        })
    }

    /// Load keyword tables from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ToolkitResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    fn parse_indicators(toml_value: &toml::Value, table_name: &str) -> ToolkitResult<Vec<String>> {
        let list = match toml_value.get(table_name).and_then(|t| t.get("indicators")) {
            Some(list) => list,
            None => return Ok(Vec::new()),
        };
        let items = list.as_array().ok_or_else(|| ToolkitError::ConfigError(format!(
            "[{}].indicators must be an array of strings", table_name
        )))?;

        items.iter()
            .map(|item| item.as_str()
                .map(|s| s.to_lowercase())
                .ok_or_else(|| ToolkitError::ConfigError(format!(
                    "[{}].indicators contains a non-string value", table_name
                ))))
            .filter(|item| item.as_ref().map(|s| !s.is_empty()).unwrap_or(true))
            .collect()
    }

    /// Classify a bookmark title
    pub fn classify(&self, title: &str) -> BookmarkLevel {
        let lower = title.to_lowercase();

        if self.chapter_indicators.iter().any(|k| lower.contains(k.as_str())) {
            return BookmarkLevel::Chapter;
        }
        if self.section_indicators.iter().any(|k| lower.contains(k.as_str())) {
            return BookmarkLevel::Section;
        }

        numbering_level(title)
    }
}

/// Level implied by a leading `N.` / `N.M` numbering
fn numbering_level(title: &str) -> BookmarkLevel {
    let trimmed = title.trim_start();
    if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return BookmarkLevel::Other;
    }

    let numbering: String = trimmed.chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if !numbering.contains('.') {
        return BookmarkLevel::Other;
    }

    match numbering.split('.').filter(|part| !part.is_empty()).count() {
        1 => BookmarkLevel::Chapter,
        _ => BookmarkLevel::Section,
    }
}
