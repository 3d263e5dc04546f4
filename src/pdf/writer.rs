//! Extracting page ranges into standalone documents

use std::path::Path;
use log::debug;
use lopdf::{Dictionary, Document, Object, ObjectId};

use super::outline::{encode_text_string, read_outline, OutlineItem};
use super::ranges::PageRange;
use crate::errors::{ToolkitError, ToolkitResult};

/// A loaded PDF that parts are cut from
pub struct PdfSource {
    doc: Document,
    page_count: u32,
}

impl PdfSource {
    /// Load a PDF file
    pub fn open<P: AsRef<Path>>(path: P) -> ToolkitResult<Self> {
        let doc = Document::load(path)?;
        Ok(Self::from_document(doc))
    }

    /// Load a PDF held in memory
    pub fn from_bytes(bytes: &[u8]) -> ToolkitResult<Self> {
        let doc = Document::load_mem(bytes)?;
        Ok(Self::from_document(doc))
    }

    pub fn from_document(doc: Document) -> Self {
        let page_count = doc.get_pages().len() as u32;
        PdfSource { doc, page_count }
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// The document outline
    pub fn outline(&self) -> ToolkitResult<Vec<OutlineItem>> {
        read_outline(&self.doc)
    }

    /// Build a document holding only the pages of `range`
    ///
    /// The source outline and page labels are dropped; `outline` (with
    /// pages relative to the start of the range) becomes the new outline.
    pub fn extract(&self, range: &PageRange, outline: &[OutlineItem]) -> ToolkitResult<Document> {
        if range.is_empty() || range.end > self.page_count {
            return Err(ToolkitError::InvalidInput(format!(
                "Page range {}..{} is not within a document of {} pages",
                range.start, range.end, self.page_count
            )));
        }

        let mut doc = self.doc.clone();

        // One call: page numbers are resolved against the page tree once
        let to_delete: Vec<u32> = (1..=self.page_count)
            .filter(|number| !range.contains(number - 1))
            .collect();
        doc.delete_pages(&to_delete);

        {
            let catalog = catalog_mut(&mut doc)?;
            catalog.remove(b"Outlines");
            catalog.remove(b"PageLabels");
        }
        let pruned = doc.prune_objects();
        debug!("Pruned {} unreachable objects for '{}'", pruned.len(), range.title);

        attach_outline(&mut doc, outline)?;
        doc.compress();

        Ok(doc)
    }
}

fn catalog_mut(doc: &mut Document) -> ToolkitResult<&mut Dictionary> {
    let root_id = doc.trailer.get(b"Root")?.as_reference()?;
    Ok(doc.get_object_mut(root_id)?.as_dict_mut()?)
}

/// Write `items` as the outline of `doc`, replacing any existing one
///
/// Destinations point at the page with the same 0-based index and use a
/// `/Fit` view; items without a page (or past the last page) get no
/// destination.
pub(crate) fn attach_outline(doc: &mut Document, items: &[OutlineItem]) -> ToolkitResult<()> {
    if items.is_empty() {
        catalog_mut(doc)?.remove(b"Outlines");
        return Ok(());
    }

    let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
    let outlines_id = doc.new_object_id();
    let (first, last, count) = write_items(doc, &pages, items, outlines_id);

    let outlines = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Outlines".to_vec())),
        ("First", Object::Reference(first)),
        ("Last", Object::Reference(last)),
        ("Count", Object::Integer(count)),
    ]);
    doc.objects.insert(outlines_id, Object::Dictionary(outlines));

    let catalog = catalog_mut(doc)?;
    catalog.set("Outlines", Object::Reference(outlines_id));
    catalog.set("PageMode", Object::Name(b"UseOutlines".to_vec()));
    Ok(())
}

/// Write one level of siblings; returns first id, last id and the number
/// of visible descendants (every level is left open)
fn write_items(doc: &mut Document, pages: &[ObjectId], items: &[OutlineItem], parent: ObjectId) -> (ObjectId, ObjectId, i64) {
    let ids: Vec<ObjectId> = items.iter().map(|_| doc.new_object_id()).collect();
    let mut visible = 0;

    for (i, item) in items.iter().enumerate() {
        let mut dict = Dictionary::from_iter(vec![
            ("Title", encode_text_string(&item.title)),
            ("Parent", Object::Reference(parent)),
        ]);
        if i > 0 {
            dict.set("Prev", Object::Reference(ids[i - 1]));
        }
        if i + 1 < ids.len() {
            dict.set("Next", Object::Reference(ids[i + 1]));
        }
        if let Some(page_id) = item.page.and_then(|page| pages.get(page as usize)) {
            dict.set("Dest", Object::Array(vec![
                Object::Reference(*page_id),
                Object::Name(b"Fit".to_vec()),
            ]));
        }
        if !item.children.is_empty() {
            let (first, last, count) = write_items(doc, pages, &item.children, ids[i]);
            dict.set("First", Object::Reference(first));
            dict.set("Last", Object::Reference(last));
            dict.set("Count", Object::Integer(count));
            visible += count;
        }

        visible += 1;
        doc.objects.insert(ids[i], Object::Dictionary(dict));
    }

    (ids[0], ids[ids.len() - 1], visible)
}

/// Save a document to `path`
pub fn save_document<P: AsRef<Path>>(doc: &mut Document, path: P) -> ToolkitResult<()> {
    doc.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::test_support::{build_pdf, page_labels};

    fn source(pages: u32, outline: &[OutlineItem]) -> PdfSource {
        PdfSource::from_document(build_pdf(pages, outline))
    }

    #[test]
    fn test_extract_keeps_range_pages() {
        let src = source(6, &[]);
        let part = src.extract(&PageRange::new("mid", 2, 5), &[]).unwrap();
        assert_eq!(page_labels(&part), vec!["Page 3", "Page 4", "Page 5"]);
        assert!(read_outline(&part).unwrap().is_empty());
    }

    #[test]
    fn test_extract_replaces_outline() {
        let original = vec![
            OutlineItem::new("Old 1", Some(0)),
            OutlineItem::new("Old 2", Some(3)),
        ];
        let src = source(5, &original);
        let outline = vec![
            OutlineItem::new("第二部分", Some(0)).with_children(vec![
                OutlineItem::new("Detail", Some(1)),
            ]),
        ];
        let part = src.extract(&PageRange::new("Old 2", 3, 5), &outline).unwrap();

        assert_eq!(part.get_pages().len(), 2);
        assert_eq!(read_outline(&part).unwrap(), outline);
    }

    #[test]
    fn test_extract_round_trips_through_bytes() {
        let src = source(4, &[]);
        let mut part = src.extract(&PageRange::new("tail", 3, 4), &[OutlineItem::new("tail", Some(0))]).unwrap();

        let mut bytes = Vec::new();
        part.save_to(&mut bytes).unwrap();
        let reloaded = PdfSource::from_bytes(&bytes).unwrap();
        assert_eq!(reloaded.page_count(), 1);
        assert_eq!(reloaded.outline().unwrap(), vec![OutlineItem::new("tail", Some(0))]);
        assert_eq!(page_labels(reloaded.document()), vec!["Page 4"]);
    }

    #[test]
    fn test_extract_scattered_parts_of_a_long_document() {
        let src = source(40, &[]);
        for (start, end) in [(0, 1), (17, 23), (39, 40)] {
            let part = src.extract(&PageRange::new("part", start, end), &[]).unwrap();
            let expected: Vec<String> = (start..end).map(|i| format!("Page {}", i + 1)).collect();
            assert_eq!(page_labels(&part), expected);
        }
        assert_eq!(src.page_count(), 40);
    }

    #[test]
    fn test_extract_rejects_bad_ranges() {
        let src = source(3, &[]);
        assert!(src.extract(&PageRange::new("empty", 1, 1), &[]).is_err());
        assert!(src.extract(&PageRange::new("past end", 2, 4), &[]).is_err());
    }

    #[test]
    fn test_outline_count_includes_descendants() {
        let mut doc = build_pdf(3, &[]);
        let outline = vec![
            OutlineItem::new("A", Some(0)).with_children(vec![
                OutlineItem::new("A.1", Some(1)),
                OutlineItem::new("A.2", None),
            ]),
            OutlineItem::new("B", Some(2)),
        ];
        attach_outline(&mut doc, &outline).unwrap();

        let root_id = doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
        let catalog = doc.get_object(root_id).unwrap().as_dict().unwrap();
        let outlines_id = catalog.get(b"Outlines").unwrap().as_reference().unwrap();
        let outlines = doc.get_object(outlines_id).unwrap().as_dict().unwrap();
        assert_eq!(outlines.get(b"Count").unwrap().as_i64().unwrap(), 4);
        assert_eq!(read_outline(&doc).unwrap(), outline);
    }
}
