//! Merge a directory of Markdown files into one document

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};

use crate::errors::{ToolkitError, ToolkitResult};
use crate::utils::natural_sort::sort_paths;
use crate::utils::path_utils::{file_stem, files_with_extension, files_with_extension_recursive, require_dir};
use crate::utils::progress::ProgressTracker;

/// Default name of the merged document
pub const DEFAULT_OUTPUT: &str = "merged.md";

const SEPARATOR: &str = "\n\n---\n\n";

/// Options controlling a merge
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Directory holding the Markdown files
    pub input_dir: PathBuf,
    /// Output file name, created inside `input_dir`
    pub output_file: String,
    /// Insert a horizontal rule between files
    pub add_separator: bool,
    /// Prefix each file with a `##` heading naming it
    pub add_filename_header: bool,
    /// Include Markdown files in subdirectories
    pub recursive: bool,
}

impl MergeOptions {
    /// Options with the default settings for `input_dir`
    pub fn new<P: Into<PathBuf>>(input_dir: P) -> Self {
        MergeOptions {
            input_dir: input_dir.into(),
            output_file: DEFAULT_OUTPUT.to_string(),
            add_separator: true,
            add_filename_header: true,
            recursive: false,
        }
    }

    /// Full path of the merged document
    pub fn output_path(&self) -> PathBuf {
        self.input_dir.join(&self.output_file)
    }
}

/// Result of a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Where the merged document was written
    pub output_path: PathBuf,
    /// Files whose content went into the output
    pub merged: usize,
    /// Files that were empty or unreadable
    pub skipped: usize,
}

/// Append `.md` to an output name that lacks it
pub fn normalize_output_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        DEFAULT_OUTPUT.to_string()
    } else if name.ends_with(".md") {
        name.to_string()
    } else {
        format!("{}.md", name)
    }
}

/// Collect the Markdown inputs in natural order, minus the output file itself
fn collect_inputs(options: &MergeOptions) -> ToolkitResult<Vec<PathBuf>> {
    let mut files = if options.recursive {
        files_with_extension_recursive(&options.input_dir, "md")?
    } else {
        files_with_extension(&options.input_dir, "md")?
    };
    sort_paths(&mut files);

    let output_path = options.output_path();
    let output_resolved = fs::canonicalize(&output_path).ok();
    files.retain(|f| {
        match (&output_resolved, fs::canonicalize(f).ok()) {
            (Some(out), Some(resolved)) => &resolved != out,
            _ => f != &output_path,
        }
    });

    Ok(files)
}

/// Heading placed above a file's content
fn header_for(file: &Path, options: &MergeOptions) -> String {
    if options.recursive {
        let relative = file.strip_prefix(&options.input_dir).unwrap_or(file);
        format!("## {}\n\n", relative.display())
    } else {
        format!("## {}\n\n", file_stem(file))
    }
}

/// Read a file, treating unreadable files as empty
fn read_or_empty(file: &Path) -> String {
    match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}: {}", file.display(), e);
            String::new()
        }
    }
}

/// Build the merged document from the ordered input files
///
/// Returns the document text and the number of files skipped.
pub fn merge_contents(files: &[PathBuf], options: &MergeOptions) -> (String, usize) {
    let total = files.len();
    let mut pieces: Vec<String> = Vec::new();
    let mut skipped = 0;
    let progress = ProgressTracker::new(total as u64, "Merging Markdown");

    for (index, file) in files.iter().enumerate() {
        let position = index + 1;
        progress.increment(1);
        debug!("[{}/{}] Processing {}", position, total, file.display());

        let content = read_or_empty(file);
        if content.trim().is_empty() {
            warn!("{} is empty, skipped", file.display());
            skipped += 1;
            continue;
        }

        if options.add_filename_header {
            pieces.push(header_for(file, options));
        }
        pieces.push(content.trim().to_string());

        // The separator is decided on the position among all inputs, so a
        // trailing empty file still leaves a rule after the last real one
        if options.add_separator && position < total {
            pieces.push(SEPARATOR.to_string());
        } else {
            pieces.push("\n\n".to_string());
        }
    }

    progress.finish();
    (pieces.join("\n"), skipped)
}

/// Merge all Markdown files of `options.input_dir` into `options.output_file`
pub fn merge_markdown_files(options: &MergeOptions) -> ToolkitResult<MergeReport> {
    require_dir(&options.input_dir)?;

    let files = collect_inputs(options)?;
    if files.is_empty() {
        return Err(ToolkitError::NothingToProcess(format!(
            "no Markdown files found in '{}'", options.input_dir.display()
        )));
    }
    info!("Found {} Markdown files", files.len());

    let (document, skipped) = merge_contents(&files, options);
    let output_path = options.output_path();
    fs::write(&output_path, document)?;

    let report = MergeReport {
        output_path,
        merged: files.len() - skipped,
        skipped,
    };
    info!("Merged {} files into {}", report.merged, report.output_path.display());
    Ok(report)
}
