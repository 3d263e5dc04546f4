//! Splitting a PDF into parts by bookmarks or by chapters

use std::fs;
use std::path::{Path, PathBuf};
use log::{info, warn};

use super::levels::LevelRules;
use super::outline::OutlineItem;
use super::ranges::{bookmark_ranges, build_chapters, nested_outline, Chapter, PageRange};
use super::writer::{save_document, PdfSource};
use crate::errors::{ToolkitError, ToolkitResult};
use crate::utils::path_utils::file_stem;
use crate::utils::progress::ProgressTracker;

/// Granularity of a chapter split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitLevel {
    /// One file per chapter
    Chapter,
    /// One file per section; chapters without sections stay whole
    Section,
}

impl SplitLevel {
    /// Parse "1"/"chapter" or "2"/"section"
    pub fn from_name(name: &str) -> ToolkitResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "1" | "chapter" => Ok(SplitLevel::Chapter),
            "2" | "section" => Ok(SplitLevel::Section),
            other => Err(ToolkitError::InvalidInput(format!(
                "Unknown split level '{}', expected chapter or section", other
            ))),
        }
    }
}

/// One output file of a split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPart {
    pub file_name: String,
    pub range: PageRange,
    /// Outline of the part, pages relative to the part
    pub outline: Vec<OutlineItem>,
}

/// Result of a split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub output_dir: PathBuf,
    /// Files written, in part order
    pub files: Vec<PathBuf>,
    /// Parts that could not be written
    pub failed: usize,
    /// Parts without pages
    pub skipped: usize,
}

/// Make a title usable as a file name
///
/// Replaces `< > : " / \ | ? *` with `_` and trims surrounding whitespace.
pub fn valid_filename(title: &str) -> String {
    title.chars()
        .map(|c| if "<>:\"/\\|?*".contains(c) { '_' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// `{dir}/{stem}{suffix}` next to the input file
pub fn output_dir_for(path: &Path, suffix: &str) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{}{}", file_stem(path), suffix))
}

/// One part per top-level bookmark
pub fn plan_bookmark_parts(outline: &[OutlineItem], page_count: u32, prefix: &str) -> Vec<SplitPart> {
    let prefix = prefix.trim();

    bookmark_ranges(outline, page_count)
        .into_iter()
        .enumerate()
        .map(|(i, range)| {
            let title = valid_filename(&range.title);
            let file_name = if prefix.is_empty() {
                format!("{:02}-{}.pdf", i + 1, title)
            } else {
                format!("{}_{:02}-{}.pdf", prefix, i + 1, title)
            };

            let mut part_outline = nested_outline(outline, &range);
            if part_outline.is_empty() {
                part_outline.push(OutlineItem::new(range.title.clone(), Some(0)));
            }

            SplitPart { file_name, range, outline: part_outline }
        })
        .collect()
}

/// One part per chapter, or per section at the section level
pub fn plan_chapter_parts(chapters: &[Chapter], level: SplitLevel) -> Vec<SplitPart> {
    let mut parts = Vec::new();

    for (i, chapter) in chapters.iter().enumerate() {
        let number = i + 1;
        if level == SplitLevel::Chapter || chapter.sections.is_empty() {
            parts.push(SplitPart {
                file_name: format!("{:02}-{}.pdf", number, valid_filename(&chapter.range.title)),
                range: chapter.range.clone(),
                outline: Vec::new(),
            });
            continue;
        }

        for (j, section) in chapter.sections.iter().enumerate() {
            parts.push(SplitPart {
                file_name: format!("{:02}-{:02}-{}.pdf", number, j + 1, valid_filename(&section.title)),
                range: section.clone(),
                outline: Vec::new(),
            });
        }
    }

    parts
}

fn write_part(source: &PdfSource, part: &SplitPart, path: &Path) -> ToolkitResult<()> {
    let mut doc = source.extract(&part.range, &part.outline)?;
    save_document(&mut doc, path)
}

/// Write every part into `output_dir`; a failing part is logged and counted
pub fn write_parts(source: &PdfSource, parts: &[SplitPart], output_dir: &Path) -> ToolkitResult<SplitReport> {
    fs::create_dir_all(output_dir)?;

    let mut report = SplitReport {
        output_dir: output_dir.to_path_buf(),
        files: Vec::new(),
        failed: 0,
        skipped: 0,
    };
    let progress = ProgressTracker::new(parts.len() as u64, "Splitting PDF");

    for part in parts {
        progress.set_message(&part.file_name);
        progress.increment(1);

        if part.range.is_empty() {
            warn!("Skipping '{}': it shares its first page with the next part", part.range.title);
            report.skipped += 1;
            continue;
        }

        let path = output_dir.join(&part.file_name);
        match write_part(source, part, &path) {
            Ok(()) => {
                info!("Created {} (pages {}-{})", part.file_name, part.range.start + 1, part.range.end);
                report.files.push(path);
            },
            Err(e) => {
                warn!("Failed to write {}: {}", part.file_name, e);
                report.failed += 1;
            },
        }
    }

    progress.finish();
    Ok(report)
}

/// Split a PDF at its top-level bookmarks into `{stem}_split/`
pub fn split_by_bookmarks(path: &Path, prefix: &str) -> ToolkitResult<SplitReport> {
    info!("Processing PDF: {}", path.display());
    let source = PdfSource::open(path)?;
    let outline = source.outline()?;

    let parts = plan_bookmark_parts(&outline, source.page_count(), prefix);
    if parts.is_empty() {
        return Err(ToolkitError::NothingToProcess(format!(
            "No usable bookmarks in {}", path.display()
        )));
    }
    info!("Found {} bookmarks", parts.len());

    write_parts(&source, &parts, &output_dir_for(path, "_split"))
}

/// Split a PDF by chapter or section bookmarks into `{stem}_chapters/`
pub fn split_by_chapters(path: &Path, level: SplitLevel, rules: &LevelRules) -> ToolkitResult<SplitReport> {
    info!("Processing PDF: {}", path.display());
    let source = PdfSource::open(path)?;
    let outline = source.outline()?;

    let chapters = build_chapters(&outline, source.page_count(), rules);
    if chapters.is_empty() {
        return Err(ToolkitError::NothingToProcess(format!(
            "No chapter bookmarks in {}", path.display()
        )));
    }
    info!("Found {} chapters", chapters.len());

    let parts = plan_chapter_parts(&chapters, level);
    write_parts(&source, &parts, &output_dir_for(path, "_chapters"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::test_support::{build_pdf, page_labels};

    fn item(title: &str, page: u32) -> OutlineItem {
        OutlineItem::new(title, Some(page))
    }

    fn names(parts: &[SplitPart]) -> Vec<&str> {
        parts.iter().map(|p| p.file_name.as_str()).collect()
    }

    #[test]
    fn test_valid_filename() {
        assert_eq!(valid_filename("  A/B: C?*  "), "A_B_ C__");
        assert_eq!(valid_filename("第1章 <intro>"), "第1章 _intro_");
        assert_eq!(valid_filename("plain"), "plain");
    }

    #[test]
    fn test_output_dir_for() {
        assert_eq!(output_dir_for(Path::new("/books/rust.pdf"), "_split"), PathBuf::from("/books/rust_split"));
        assert_eq!(output_dir_for(Path::new("rust.pdf"), "_chapters"), PathBuf::from("rust_chapters"));
    }

    #[test]
    fn test_split_level_from_name() {
        assert_eq!(SplitLevel::from_name("1").unwrap(), SplitLevel::Chapter);
        assert_eq!(SplitLevel::from_name("Section").unwrap(), SplitLevel::Section);
        assert!(SplitLevel::from_name("3").is_err());
    }

    #[test]
    fn test_plan_bookmark_parts() {
        let outline = vec![
            item("Intro", 0),
            item("Part 1", 1).with_children(vec![item("Detail", 2)]),
            item("Part 1 again", 1),
        ];
        let parts = plan_bookmark_parts(&outline, 4, "book");
        assert_eq!(names(&parts), vec!["book_01-Intro.pdf", "book_02-Part 1.pdf", "book_03-Part 1 again.pdf"]);
        assert_eq!(parts[0].outline, vec![item("Intro", 0)]);
        assert!(parts[1].range.is_empty());
        assert_eq!(parts[2].range, PageRange::new("Part 1 again", 1, 4));
        assert_eq!(parts[2].outline, vec![
            item("Part 1", 0).with_children(vec![item("Detail", 1)]),
            item("Part 1 again", 0),
        ]);
    }

    #[test]
    fn test_plan_bookmark_parts_without_prefix() {
        let parts = plan_bookmark_parts(&[item("A/B", 0)], 2, "  ");
        assert_eq!(names(&parts), vec!["01-A_B.pdf"]);
    }

    #[test]
    fn test_plan_chapter_parts() {
        let chapters = vec![
            Chapter {
                range: PageRange::new("Chapter 1", 0, 4),
                sections: vec![PageRange::new("1.1 A", 0, 2), PageRange::new("1.2 B", 2, 4)],
            },
            Chapter { range: PageRange::new("Chapter 2", 4, 6), sections: Vec::new() },
        ];
        assert_eq!(
            names(&plan_chapter_parts(&chapters, SplitLevel::Chapter)),
            vec!["01-Chapter 1.pdf", "02-Chapter 2.pdf"]
        );
        assert_eq!(
            names(&plan_chapter_parts(&chapters, SplitLevel::Section)),
            vec!["01-01-1.1 A.pdf", "01-02-1.2 B.pdf", "02-Chapter 2.pdf"]
        );
    }

    #[test]
    fn test_split_by_bookmarks_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("book.pdf");
        let mut doc = build_pdf(5, &[item("First", 0), item("Second", 2), item("Same page", 2)]);
        doc.save(&input).unwrap();

        let report = split_by_bookmarks(&input, "").unwrap();
        assert_eq!(report.output_dir, dir.path().join("book_split"));
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.failed, 0);

        let second = PdfSource::open(report.output_dir.join("03-Same page.pdf")).unwrap();
        assert_eq!(page_labels(second.document()), vec!["Page 3", "Page 4", "Page 5"]);
    }

    #[test]
    fn test_split_without_bookmarks() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("plain.pdf");
        build_pdf(2, &[]).save(&input).unwrap();

        assert!(matches!(split_by_bookmarks(&input, ""), Err(ToolkitError::NothingToProcess(_))));
        assert!(matches!(
            split_by_chapters(&input, SplitLevel::Chapter, &LevelRules::default()),
            Err(ToolkitError::NothingToProcess(_))
        ));
        assert!(!dir.path().join("plain_split").exists());
    }
}
