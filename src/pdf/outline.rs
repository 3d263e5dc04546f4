//! Reading the document outline (bookmarks)
//!
//! Destinations may be explicit arrays, `/GoTo` actions, or named
//! destinations looked up in the catalog's `/Dests` dictionary or the
//! `/Names` name tree.

use std::collections::{HashMap, HashSet};
use log::{debug, warn};
use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};

use crate::errors::ToolkitResult;

/// Nesting limit when chasing destination and name tree indirections
const MAX_DEPTH: usize = 32;

/// Nesting limit of the bookmark tree itself; loops are caught separately
const MAX_OUTLINE_DEPTH: usize = 1024;

/// One bookmark of the outline tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineItem {
    /// Bookmark title
    pub title: String,
    /// 0-based target page, None if the destination could not be resolved
    pub page: Option<u32>,
    /// Nested bookmarks
    pub children: Vec<OutlineItem>,
}

impl OutlineItem {
    /// Create a bookmark without children
    pub fn new<S: Into<String>>(title: S, page: Option<u32>) -> Self {
        OutlineItem { title: title.into(), page, children: Vec::new() }
    }

    /// Builder-style helper to attach children
    pub fn with_children(mut self, children: Vec<OutlineItem>) -> Self {
        self.children = children;
        self
    }
}

/// Visit every bookmark in document order (parents before children)
pub fn flatten(items: &[OutlineItem]) -> Vec<&OutlineItem> {
    let mut flat = Vec::new();
    for item in items {
        flat.push(item);
        flat.extend(flatten(&item.children));
    }
    flat
}

/// Decode a PDF text string (UTF-16BE with BOM, UTF-8 or PDFDocEncoding)
pub fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    if let Some(utf8) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(utf8).into_owned();
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        // PDFDocEncoding agrees with Latin-1 for the printable range
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Encode a title as a PDF text string
pub fn encode_text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Follow a reference to the object it points at
fn resolve<'a>(doc: &'a Document, object: &'a Object) -> ToolkitResult<&'a Object> {
    match object {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        other => Ok(other),
    }
}

/// The document catalog
fn catalog(doc: &Document) -> ToolkitResult<&Dictionary> {
    let root_id = doc.trailer.get(b"Root")?.as_reference()?;
    Ok(doc.get_object(root_id)?.as_dict()?)
}

struct OutlineReader<'a> {
    doc: &'a Document,
    catalog: &'a Dictionary,
    /// Page object id to 0-based page index
    pages: HashMap<ObjectId, u32>,
    page_count: u32,
    visited: HashSet<ObjectId>,
}

impl<'a> OutlineReader<'a> {
    fn new(doc: &'a Document, catalog: &'a Dictionary) -> Self {
        let page_map = doc.get_pages();
        let page_count = page_map.len() as u32;
        let pages = page_map.into_iter().map(|(number, id)| (id, number - 1)).collect();
        OutlineReader { doc, catalog, pages, page_count, visited: HashSet::new() }
    }

    /// Read an item and all of its following siblings
    fn read_siblings(&mut self, first: ObjectId, depth: usize) -> Vec<OutlineItem> {
        let doc = self.doc;
        let mut items = Vec::new();
        if depth > MAX_OUTLINE_DEPTH {
            warn!("Outline nested deeper than {} levels, ignoring the rest", MAX_OUTLINE_DEPTH);
            return items;
        }
        let mut next = Some(first);

        while let Some(id) = next {
            if !self.visited.insert(id) {
                warn!("Outline loop detected at object {:?}, stopping", id);
                break;
            }
            let dict = match doc.get_object(id).and_then(|o| o.as_dict()) {
                Ok(dict) => dict,
                Err(e) => {
                    warn!("Skipping invalid outline item {:?}: {}", id, e);
                    break;
                }
            };

            let title = dict.get(b"Title").ok()
                .and_then(|t| resolve(doc, t).ok())
                .and_then(|t| t.as_str().ok())
                .map(decode_text_string)
                .unwrap_or_else(|| format!("Bookmark {}", items.len() + 1));
            let page = self.item_page(dict);
            if page.is_none() {
                debug!("Bookmark '{}' has no resolvable destination", title);
            }

            let children = match dict.get(b"First").and_then(|f| f.as_reference()) {
                Ok(child) => self.read_siblings(child, depth + 1),
                Err(_) => Vec::new(),
            };

            items.push(OutlineItem { title, page, children });
            next = dict.get(b"Next").and_then(|n| n.as_reference()).ok();
        }

        items
    }

    /// Target page of an outline item via `/Dest` or a `/GoTo` action
    fn item_page(&self, item: &Dictionary) -> Option<u32> {
        if let Ok(dest) = item.get(b"Dest") {
            return self.destination_page(dest, 0);
        }
        let action = resolve(self.doc, item.get(b"A").ok()?).ok()?.as_dict().ok()?;
        if action.get(b"S").and_then(|s| s.as_name()).ok()? != b"GoTo" {
            return None;
        }
        self.destination_page(action.get(b"D").ok()?, 0)
    }

    fn destination_page(&self, dest: &Object, depth: usize) -> Option<u32> {
        if depth > MAX_DEPTH {
            return None;
        }
        match resolve(self.doc, dest).ok()? {
            Object::Array(items) => match items.first()? {
                Object::Reference(id) => self.pages.get(id).copied(),
                // Remote-style destinations address pages by index
                Object::Integer(n) if *n >= 0 && (*n as u64) < self.page_count as u64 => Some(*n as u32),
                _ => None,
            },
            Object::Dictionary(dict) => self.destination_page(dict.get(b"D").ok()?, depth + 1),
            Object::Name(name) => {
                let dests = resolve(self.doc, self.catalog.get(b"Dests").ok()?).ok()?.as_dict().ok()?;
                self.destination_page(dests.get(name).ok()?, depth + 1)
            },
            Object::String(name, _) => {
                let names = resolve(self.doc, self.catalog.get(b"Names").ok()?).ok()?.as_dict().ok()?;
                let tree = resolve(self.doc, names.get(b"Dests").ok()?).ok()?.as_dict().ok()?;
                let target = self.lookup_name(tree, name, 0)?;
                self.destination_page(target, depth + 1)
            },
            _ => None,
        }
    }

    /// Look a key up in a name tree
    fn lookup_name(&self, node: &'a Dictionary, key: &[u8], depth: usize) -> Option<&'a Object> {
        if depth > MAX_DEPTH {
            return None;
        }
        if let Ok(names) = node.get(b"Names").and_then(|n| n.as_array()) {
            for pair in names.chunks(2) {
                if let [name, value] = pair {
                    let name = resolve(self.doc, name).ok()?;
                    if name.as_str().ok() == Some(key) {
                        return Some(value);
                    }
                }
            }
        }
        if let Ok(kids) = node.get(b"Kids").and_then(|k| k.as_array()) {
            for kid in kids {
                let kid = match resolve(self.doc, kid).ok().and_then(|k| k.as_dict().ok()) {
                    Some(kid) => kid,
                    None => continue,
                };
                if let Some(found) = self.lookup_name(kid, key, depth + 1) {
                    return Some(found);
                }
            }
        }
        None
    }
}

/// Read the outline tree of a document; an absent outline yields an empty list
pub fn read_outline(doc: &Document) -> ToolkitResult<Vec<OutlineItem>> {
    let catalog = catalog(doc)?;

    let outlines = match catalog.get(b"Outlines") {
        Ok(obj) => resolve(doc, obj)?.as_dict()?,
        Err(_) => return Ok(Vec::new()),
    };
    let first = match outlines.get(b"First").and_then(|f| f.as_reference()) {
        Ok(first) => first,
        Err(_) => return Ok(Vec::new()),
    };

    let mut reader = OutlineReader::new(doc, catalog);
    Ok(reader.read_siblings(first, 0))
}
