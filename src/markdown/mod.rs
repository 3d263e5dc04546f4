//! Markdown document merging

mod merge;

pub use self::merge::{
    merge_contents, merge_markdown_files, normalize_output_name, MergeOptions, MergeReport,
    DEFAULT_OUTPUT,
};
