//! Chapter-by-chapter subtitle conversion
//!
//! Every immediate subdirectory of the root is one chapter. Its subtitle
//! files become one Markdown document `{root}/{chapter}.md`, with a `##`
//! section per file.

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};

use super::SubtitleFormat;
use crate::errors::ToolkitResult;
use crate::utils::natural_sort::sort_paths;
use crate::utils::path_utils::{file_stem, files_with_extension, require_dir};
use crate::utils::progress::ProgressTracker;

/// What happened to one chapter directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterReport {
    /// Chapter (directory) name
    pub chapter: String,
    /// Markdown file written, or None if the chapter had no subtitle files
    pub markdown_path: Option<PathBuf>,
    /// Number of subtitle files converted
    pub files: usize,
}

/// Render one chapter's Markdown from its ordered subtitle files
pub fn render_chapter(chapter: &str, files: &[PathBuf], format: SubtitleFormat) -> ToolkitResult<String> {
    let mut markdown = format!("# {}\n\n", chapter);

    for file in files {
        let name = file_stem(file);
        debug!("  Processing {}", name);

        let content = fs::read_to_string(file)?;
        let text = format.extract_text(&content);
        markdown.push_str(&format!("## {}\n\n{}\n\n", name, text));
    }

    Ok(markdown)
}

/// Chapter directories under `root`, in natural order
fn chapter_dirs(root: &Path) -> ToolkitResult<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    sort_paths(&mut dirs);
    Ok(dirs)
}

/// Convert every chapter directory under `root`
pub fn convert_chapters(root: &Path, format: SubtitleFormat) -> ToolkitResult<Vec<ChapterReport>> {
    require_dir(root)?;

    let dirs = chapter_dirs(root)?;
    let progress = ProgressTracker::new(dirs.len() as u64, "Converting subtitles");
    let mut reports = Vec::with_capacity(dirs.len());

    for dir in dirs {
        let chapter = dir.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Processing chapter: {}", chapter);
        progress.set_message(&chapter);
        progress.increment(1);

        let mut files = files_with_extension(&dir, format.extension())?;
        sort_paths(&mut files);

        if files.is_empty() {
            warn!("Chapter {} has no .{} files", chapter, format.extension());
            reports.push(ChapterReport { chapter, markdown_path: None, files: 0 });
            continue;
        }

        let markdown = render_chapter(&chapter, &files, format)?;
        let markdown_path = root.join(format!("{}.md", chapter));
        fs::write(&markdown_path, markdown)?;
        info!("Wrote {}", markdown_path.display());

        reports.push(ChapterReport {
            chapter,
            markdown_path: Some(markdown_path),
            files: files.len(),
        });
    }

    progress.finish();
    Ok(reports)
}
