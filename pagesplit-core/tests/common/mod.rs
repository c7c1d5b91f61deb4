//! PDF fixtures generated at test time

#![allow(dead_code)]

use lopdf::{dictionary, Dictionary, Document, Object};
use std::path::Path;

/// Key stored in every page dictionary holding the page's original index
pub const PAGE_TAG: &str = "PageTag";

/// Build a PDF with `page_count` blank pages, each tagged with its index
pub fn build_pdf(page_count: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = (0..page_count)
        .map(|index| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                PAGE_TAG => Object::Integer(index as i64),
            })
            .into()
        })
        .collect();

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_count as i64),
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(595),
            Object::Integer(842),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Build a PDF whose page tree has one intermediate node per entry of
/// `groups`, each holding that many tagged pages
///
/// `MediaBox` and `Resources` live on the root node and `Rotate` on the
/// intermediate nodes, so every page inherits all three.
pub fn build_nested_pdf(groups: &[usize]) -> Document {
    let mut doc = Document::with_version("1.5");
    let root_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut index = 0i64;
    let mut group_ids: Vec<Object> = Vec::new();
    for &size in groups {
        let group_id = doc.new_object_id();
        let kids: Vec<Object> = (0..size)
            .map(|_| {
                let page = doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => group_id,
                    PAGE_TAG => Object::Integer(index),
                });
                index += 1;
                page.into()
            })
            .collect();
        doc.objects.insert(
            group_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Parent" => root_id,
                "Kids" => kids,
                "Count" => Object::Integer(size as i64),
                "Rotate" => Object::Integer(90),
            }),
        );
        group_ids.push(group_id.into());
    }

    let total: usize = groups.iter().sum();
    doc.objects.insert(
        root_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => group_ids,
            "Count" => Object::Integer(total as i64),
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => root_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// The root `Pages` dictionary of `doc`
pub fn root_pages(doc: &Document) -> &Dictionary {
    let catalog_id = doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
    let pages_id = doc
        .get_dictionary(catalog_id)
        .unwrap()
        .get(b"Pages")
        .unwrap()
        .as_reference()
        .unwrap();
    doc.get_dictionary(pages_id).unwrap()
}

/// Write a fixture PDF with `page_count` pages to `path`
pub fn write_pdf(path: &Path, page_count: usize) {
    build_pdf(page_count).save(path).unwrap();
}

/// Original page indices of the pages in the PDF at `path`, in order
pub fn page_tags(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .values()
        .map(|id| {
            doc.get_dictionary(*id)
                .unwrap()
                .get(PAGE_TAG.as_bytes())
                .unwrap()
                .as_i64()
                .unwrap()
        })
        .collect()
}
