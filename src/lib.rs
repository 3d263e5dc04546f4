pub mod errors;
pub mod coordinate;
pub mod markdown;
pub mod subtitle;
pub mod pdf;
pub mod utils;
pub mod commands;
pub mod cli;

pub use errors::{ToolkitError, ToolkitResult};
pub use coordinate::{convert, BoundingBox, Coordinate, CoordinateSystem};
pub use markdown::{merge_markdown_files, MergeOptions};
pub use subtitle::{convert_chapters, SubtitleFormat};
pub use pdf::{split_by_bookmarks, split_by_chapters, LevelRules, PdfSource, SplitLevel};
