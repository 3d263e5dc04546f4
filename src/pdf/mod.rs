//! PDF splitting by outline
//!
//! The outline (bookmarks) of a document is read with `lopdf`, turned into
//! page ranges, and every range is written out as a standalone PDF.

mod outline;
mod levels;
mod ranges;
mod writer;
mod split;

#[cfg(test)]
mod test_support;

pub use self::outline::{decode_text_string, encode_text_string, flatten, read_outline, OutlineItem};
pub use self::levels::{BookmarkLevel, LevelRules};
pub use self::ranges::{bookmark_ranges, build_chapters, nested_outline, Chapter, PageRange};
pub use self::writer::{save_document, PdfSource};
pub use self::split::{
    output_dir_for, plan_bookmark_parts, plan_chapter_parts, split_by_bookmarks, split_by_chapters,
    valid_filename, write_parts, SplitLevel, SplitPart, SplitReport,
};
