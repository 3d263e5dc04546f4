//! Page ranges derived from the outline

use log::debug;

use super::levels::{BookmarkLevel, LevelRules};
use super::outline::{flatten, OutlineItem};

/// A titled run of pages, 0-based, `start` inclusive and `end` exclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRange {
    pub title: String,
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    pub fn new<S: Into<String>>(title: S, start: u32, end: u32) -> Self {
        PageRange { title: title.into(), start, end }
    }

    /// True if the range holds no page (two bookmarks on the same page)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of pages
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, page: u32) -> bool {
        page >= self.start && page < self.end
    }
}

/// A chapter and the sections it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub range: PageRange,
    pub sections: Vec<PageRange>,
}

/// Turn start pages into ranges, each ending where the next one starts
fn close_ranges(mut starts: Vec<(String, u32)>, end: u32) -> Vec<PageRange> {
    starts.sort_by_key(|(_, page)| *page);

    let mut ranges = Vec::with_capacity(starts.len());
    let mut iter = starts.into_iter().peekable();
    while let Some((title, start)) = iter.next() {
        let next = iter.peek().map(|(_, page)| *page).unwrap_or(end);
        ranges.push(PageRange::new(title, start, next.min(end)));
    }
    ranges
}

/// Page ranges of the top-level bookmarks
///
/// Bookmarks without a usable page are ignored. The remaining ones are
/// ordered by page (keeping outline order for ties); the last range runs
/// to the end of the document.
pub fn bookmark_ranges(outline: &[OutlineItem], page_count: u32) -> Vec<PageRange> {
    let starts = outline.iter()
        .filter_map(|item| match item.page {
            Some(page) if page < page_count => Some((item.title.clone(), page)),
            _ => {
                debug!("Ignoring bookmark '{}' without a valid page", item.title);
                None
            },
        })
        .collect();

    close_ranges(starts, page_count)
}

/// Group classified bookmarks into chapters and sections
///
/// The whole outline is walked in document order. Sections belong to the
/// chapter most recently seen; sections before the first chapter are
/// dropped. The last section of a chapter ends with the chapter.
pub fn build_chapters(outline: &[OutlineItem], page_count: u32, rules: &LevelRules) -> Vec<Chapter> {
    let mut found: Vec<((String, u32), Vec<(String, u32)>)> = Vec::new();

    for item in flatten(outline) {
        let page = match item.page {
            Some(page) if page < page_count => page,
            _ => continue,
        };

        match rules.classify(&item.title) {
            BookmarkLevel::Chapter => found.push(((item.title.clone(), page), Vec::new())),
            BookmarkLevel::Section => match found.last_mut() {
                Some((_, sections)) => sections.push((item.title.clone(), page)),
                None => debug!("Dropping section '{}' before the first chapter", item.title),
            },
            BookmarkLevel::Other => {},
        }
    }

    let (starts, sections): (Vec<_>, Vec<_>) = found.into_iter().unzip();
    let mut section_lists: Vec<(u32, Vec<(String, u32)>)> = starts.iter()
        .map(|(_, page)| *page)
        .zip(sections)
        .collect();
    section_lists.sort_by_key(|(page, _)| *page);

    close_ranges(starts, page_count)
        .into_iter()
        .zip(section_lists)
        .map(|(range, (_, sections))| {
            let sections = close_ranges(sections, range.end);
            Chapter { range, sections }
        })
        .collect()
}

/// The part of the outline that falls inside `range`
///
/// Pages are rebased so that `range.start` becomes page 0. Bookmarks
/// outside the range are dropped and their in-range children take their
/// place.
pub fn nested_outline(outline: &[OutlineItem], range: &PageRange) -> Vec<OutlineItem> {
    let mut result = Vec::new();

    for item in outline {
        let children = nested_outline(&item.children, range);
        match item.page {
            Some(page) if range.contains(page) => result.push(OutlineItem {
                title: item.title.clone(),
                page: Some(page - range.start),
                children,
            }),
            _ => result.extend(children),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, page: u32) -> OutlineItem {
        OutlineItem::new(title, Some(page))
    }

    #[test]
    fn test_page_range_basics() {
        let range = PageRange::new("a", 2, 5);
        assert_eq!(range.len(), 3);
        assert!(range.contains(2) && range.contains(4));
        assert!(!range.contains(5));
        assert!(!range.is_empty());
        assert!(PageRange::new("b", 3, 3).is_empty());
        assert_eq!(PageRange::new("c", 4, 3).len(), 0);
    }

    #[test]
    fn test_bookmark_ranges() {
        let outline = vec![
            item("Intro", 0),
            item("Body", 4).with_children(vec![item("Nested", 6)]),
            OutlineItem::new("Broken", None),
            item("Appendix", 9),
            item("Out of range", 40),
        ];
        let ranges = bookmark_ranges(&outline, 12);
        assert_eq!(ranges, vec![
            PageRange::new("Intro", 0, 4),
            PageRange::new("Body", 4, 9),
            PageRange::new("Appendix", 9, 12),
        ]);
    }

    #[test]
    fn test_bookmark_ranges_sorted_and_stable() {
        let outline = vec![item("B", 5), item("A", 1), item("A2", 1)];
        let ranges = bookmark_ranges(&outline, 8);
        assert_eq!(ranges, vec![
            PageRange::new("A", 1, 1),
            PageRange::new("A2", 1, 5),
            PageRange::new("B", 5, 8),
        ]);
        assert!(ranges[0].is_empty());
    }

    #[test]
    fn test_build_chapters() {
        let outline = vec![
            item("Preface", 0),
            item("1.1 Stray section", 1),
            item("Chapter 1", 2).with_children(vec![
                item("1.1 First", 2),
                item("1.2 Second", 4),
            ]),
            item("Chapter 2", 7).with_children(vec![item("Notes", 8)]),
            item("Index", 10),
        ];
        let chapters = build_chapters(&outline, 12, &LevelRules::default());

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].range, PageRange::new("Chapter 1", 2, 7));
        assert_eq!(chapters[0].sections, vec![
            PageRange::new("1.1 First", 2, 4),
            PageRange::new("1.2 Second", 4, 7),
        ]);
        assert_eq!(chapters[1].range, PageRange::new("Chapter 2", 7, 12));
        assert!(chapters[1].sections.is_empty());
    }

    #[test]
    fn test_numbered_chapters_at_top_level() {
        let outline = vec![
            item("1. Basics", 0),
            item("1.1 Setup", 1),
            item("2. Advanced", 3),
            item("2.1 Macros", 5),
        ];
        let chapters = build_chapters(&outline, 6, &LevelRules::default());
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].sections, vec![PageRange::new("1.1 Setup", 1, 3)]);
        assert_eq!(chapters[1].sections, vec![PageRange::new("2.1 Macros", 5, 6)]);
    }

    #[test]
    fn test_nested_outline_rebases_and_promotes() {
        let outline = vec![
            item("Part A", 0).with_children(vec![
                item("A.1", 1),
                item("A.2", 3).with_children(vec![item("A.2.a", 4)]),
            ]),
            item("Part B", 6),
        ];
        let range = PageRange::new("slice", 3, 6);
        assert_eq!(nested_outline(&outline, &range), vec![
            item("A.2", 0).with_children(vec![item("A.2.a", 1)]),
        ]);

        let range = PageRange::new("slice", 1, 5);
        assert_eq!(nested_outline(&outline, &range), vec![
            item("A.1", 0),
            item("A.2", 2).with_children(vec![item("A.2.a", 3)]),
        ]);
    }
}
