//! Subtitle (SRT / WebVTT) to Markdown conversion
//!
//! Timing information is stripped and the cue text is reflowed into plain
//! prose, one paragraph per subtitle file.

mod srt;
mod vtt;
mod batch;

pub use self::srt::srt_to_text;
pub use self::vtt::vtt_to_text;
pub use self::batch::{convert_chapters, render_chapter, ChapterReport};

use crate::errors::{ToolkitError, ToolkitResult};

/// Supported subtitle formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// SubRip
    Srt,
    /// WebVTT
    Vtt,
}

impl SubtitleFormat {
    /// Parse a format name ("srt" or "vtt")
    pub fn from_name(name: &str) -> ToolkitResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "srt" => Ok(SubtitleFormat::Srt),
            "vtt" | "webvtt" => Ok(SubtitleFormat::Vtt),
            other => Err(ToolkitError::InvalidInput(format!("Unknown subtitle format: {}", other))),
        }
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
        }
    }

    /// Extract the cue text of a file in this format
    pub fn extract_text(&self, content: &str) -> String {
        match self {
            SubtitleFormat::Srt => srt_to_text(content),
            SubtitleFormat::Vtt => vtt_to_text(content),
        }
    }
}
