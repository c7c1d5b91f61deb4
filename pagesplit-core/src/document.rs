//! Source documents
//!
//! [`PagedDocument`] is the seam between the chunker and a concrete
//! container format. [`PdfDocument`] implements it on top of `lopdf`.

use crate::error::{Result, SplitError};
use lopdf::{dictionary, Dictionary, Object, ObjectId};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Page attributes a page may inherit from its ancestors in the page tree
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// A read-only document made of an ordered sequence of pages
pub trait PagedDocument {
    /// Path the document was read from
    fn path(&self) -> &Path;

    /// Total number of pages
    fn page_count(&self) -> usize;

    /// Write a new document holding the pages in `pages` (0-based) to `dest`
    ///
    /// The output uses the same container format as the source and keeps the
    /// original page order. The file is flushed before this returns.
    fn write_pages(&self, pages: Range<usize>, dest: &Path) -> Result<()>;
}

/// A parsed PDF file
#[derive(Debug, Clone)]
pub struct PdfDocument {
    path: PathBuf,
    inner: lopdf::Document,
    /// Page objects in document order
    page_ids: Vec<ObjectId>,
    /// Every page object, for skipping references to pages outside a chunk
    page_set: HashSet<ObjectId>,
    /// Intermediate and root nodes of the page tree
    tree_nodes: HashSet<ObjectId>,
}

impl PdfDocument {
    /// Open and parse the PDF at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let inner = lopdf::Document::load(path).map_err(|e| SplitError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self::from_document(path, inner))
    }

    /// Wrap an already parsed document
    pub fn from_document(path: impl Into<PathBuf>, inner: lopdf::Document) -> Self {
        let page_ids: Vec<ObjectId> = inner.get_pages().into_values().collect();
        let page_set: HashSet<ObjectId> = page_ids.iter().copied().collect();

        let mut tree_nodes = HashSet::new();
        for page_id in &page_ids {
            let mut parent = parent_of(&inner, *page_id);
            while let Some(node_id) = parent {
                if !tree_nodes.insert(node_id) {
                    break;
                }
                parent = parent_of(&inner, node_id);
            }
        }

        Self {
            path: path.into(),
            inner,
            page_ids,
            page_set,
            tree_nodes,
        }
    }

    /// PDF version declared in the header
    pub fn version(&self) -> &str {
        &self.inner.version
    }

    /// Build a standalone document holding only the pages in `pages`
    ///
    /// Only objects reachable from the kept pages are copied, so the cost is
    /// proportional to the chunk, not to the whole source. Kept pages hang
    /// directly off a fresh root `Pages` node.
    fn extract(&self, pages: &Range<usize>) -> lopdf::Document {
        let kept_set: HashSet<ObjectId> = self.page_ids[pages.clone()].iter().copied().collect();
        let mut copied: BTreeMap<ObjectId, Object> = BTreeMap::new();
        let mut pending = Vec::new();
        let mut kids = Vec::new();

        for &page_id in &self.page_ids[pages.clone()] {
            let Ok(source) = self.inner.get_dictionary(page_id) else {
                continue;
            };
            let mut page = source.clone();
            self.inherit_attributes(&mut page);
            page.remove(b"Parent");

            let page = Object::Dictionary(page);
            collect_references(&page, &mut pending);
            copied.insert(page_id, page);
            kids.push(page_id);
        }

        let info = self.inner.trailer.get(b"Info").and_then(Object::as_reference).ok();
        pending.extend(info);

        while let Some(id) = pending.pop() {
            let outside_chunk = self.page_set.contains(&id) && !kept_set.contains(&id);
            if copied.contains_key(&id) || outside_chunk || self.tree_nodes.contains(&id) {
                continue;
            }
            if let Ok(object) = self.inner.get_object(id) {
                collect_references(object, &mut pending);
                copied.insert(id, object.clone());
            }
        }

        let mut doc = lopdf::Document::with_version(self.inner.version.clone());
        doc.max_id = copied.keys().map(|(number, _)| *number).max().unwrap_or(0);
        doc.objects = copied;

        let pages_id = doc.new_object_id();
        for page_id in &kids {
            if let Some(Object::Dictionary(page)) = doc.objects.get_mut(page_id) {
                page.set("Parent", pages_id);
            }
        }
        let count = kids.len() as i64;
        let kids: Vec<Object> = kids.into_iter().map(Object::Reference).collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        if let Some(info_id) = info.filter(|id| doc.objects.contains_key(id)) {
            doc.trailer.set("Info", info_id);
        }

        doc
    }

    /// Copy inheritable attributes from page-tree ancestors onto `page`
    fn inherit_attributes(&self, page: &mut Dictionary) {
        let mut visited = HashSet::new();
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

        while let Some(node_id) = parent {
            if !visited.insert(node_id) {
                break;
            }
            let Ok(node) = self.inner.get_dictionary(node_id) else {
                break;
            };
            for key in INHERITABLE {
                if !page.has(key) {
                    if let Ok(value) = node.get(key) {
                        page.set(key.to_vec(), value.clone());
                    }
                }
            }
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        }
    }
}

fn parent_of(doc: &lopdf::Document, id: ObjectId) -> Option<ObjectId> {
    doc.get_dictionary(id)
        .and_then(|dict| dict.get(b"Parent"))
        .and_then(Object::as_reference)
        .ok()
}

/// Push every object id referenced from `object` onto `out`
fn collect_references(object: &Object, out: &mut Vec<ObjectId>) {
    match object {
        Object::Reference(id) => out.push(*id),
        Object::Array(items) => {
            for item in items {
                collect_references(item, out);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                collect_references(value, out);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter() {
                collect_references(value, out);
            }
        }
        _ => {}
    }
}

impl PagedDocument for PdfDocument {
    fn path(&self) -> &Path {
        &self.path
    }

    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn write_pages(&self, pages: Range<usize>, dest: &Path) -> Result<()> {
        let io_error = |source: io::Error| SplitError::Io {
            path: dest.to_path_buf(),
            source,
        };

        let mut doc = self.extract(&pages);

        let file = File::create(dest).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        doc.save_to(&mut writer)
            .map_err(|e| io_error(io::Error::other(e.to_string())))?;
        writer.flush().map_err(io_error)?;
        writer.get_ref().sync_all().map_err(io_error)?;

        Ok(())
    }
}
