//! PDF serialization of an assembled [`Document`].
//!
//! Fonts are the standard Helvetica faces (never embedded) with WinAnsi
//! encoding; raster images become DeviceRGB image XObjects. Fonts and
//! images are declared once on the page tree root and inherited by every
//! page.

use std::path::Path;

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document as PdfDocument, Object, ObjectId, Stream, StringFormat};

use super::layout::{Document, DrawOp, Page};
use super::metrics::Face;
use super::sanitize::to_win_ansi;
use super::{Rgb, MM_TO_PT, PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::Result;

const PRODUCER: &str = "cellar_report";

fn pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

/// PDF y axis points up from the bottom edge.
fn pt_y(mm_from_top: f32) -> f32 {
    pt(PAGE_HEIGHT - mm_from_top)
}

fn name(s: &str) -> Object {
    Object::Name(s.as_bytes().to_vec())
}

fn reals(values: &[f32]) -> Vec<Object> {
    values.iter().map(|v| Object::Real(*v)).collect()
}

fn image_name(index: usize) -> String {
    format!("Im{}", index)
}

// ============================================================================
// CONTENT STREAMS
// ============================================================================

fn fill_color(ops: &mut Vec<Operation>, color: Rgb) {
    ops.push(Operation::new("rg", reals(&color.unit())));
}

fn page_operations(page: &Page) -> Vec<Operation> {
    let mut ops = Vec::new();
    for op in &page.ops {
        match op {
            DrawOp::Image { image, x, y, width, height } => {
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new(
                    "cm",
                    reals(&[pt(*width), 0.0, 0.0, pt(*height), pt(*x), pt_y(y + height)]),
                ));
                ops.push(Operation::new("Do", vec![name(&image_name(*image))]));
                ops.push(Operation::new("Q", vec![]));
            }
            DrawOp::Text { x, y, text, face, size, color } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new("Tf", vec![name(face.resource_name()), Object::Real(*size)]));
                fill_color(&mut ops, *color);
                ops.push(Operation::new("Tm", reals(&[1.0, 0.0, 0.0, 1.0, pt(*x), pt_y(*y)])));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            DrawOp::Line { x1, y1, x2, y2, width, color, dash } => {
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new("RG", reals(&color.unit())));
                ops.push(Operation::new("w", vec![Object::Real(pt(*width))]));
                if let Some(dash) = dash {
                    let on = pt(*dash);
                    ops.push(Operation::new("d", vec![Object::Array(reals(&[on, on])), Object::Integer(0)]));
                }
                ops.push(Operation::new("m", reals(&[pt(*x1), pt_y(*y1)])));
                ops.push(Operation::new("l", reals(&[pt(*x2), pt_y(*y2)])));
                ops.push(Operation::new("S", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
            DrawOp::Rect { x, y, width, height, fill } => {
                ops.push(Operation::new("q", vec![]));
                fill_color(&mut ops, *fill);
                ops.push(Operation::new("re", reals(&[pt(*x), pt_y(y + height), pt(*width), pt(*height)])));
                ops.push(Operation::new("f", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
        }
    }
    ops
}

// ============================================================================
// RESOURCES
// ============================================================================

fn font_resources(pdf: &mut PdfDocument) -> Dictionary {
    let mut fonts = Dictionary::new();
    for face in Face::ALL {
        let mut font = Dictionary::new();
        font.set("Type", name("Font"));
        font.set("Subtype", name("Type1"));
        font.set("BaseFont", name(face.base_font()));
        font.set("Encoding", name("WinAnsiEncoding"));
        let id = pdf.add_object(Object::Dictionary(font));
        fonts.set(face.resource_name(), Object::Reference(id));
    }
    fonts
}

fn image_resources(pdf: &mut PdfDocument, doc: &Document) -> Dictionary {
    let mut xobjects = Dictionary::new();
    for (index, image) in doc.images.iter().enumerate() {
        let mut dict = Dictionary::new();
        dict.set("Type", name("XObject"));
        dict.set("Subtype", name("Image"));
        dict.set("Width", Object::Integer(i64::from(image.width)));
        dict.set("Height", Object::Integer(i64::from(image.height)));
        dict.set("ColorSpace", name("DeviceRGB"));
        dict.set("BitsPerComponent", Object::Integer(8));
        let id = pdf.add_object(Stream::new(dict, image.rgb.clone()));
        xobjects.set(image_name(index), Object::Reference(id));
    }
    xobjects
}

fn info_dictionary(doc: &Document) -> Dictionary {
    let mut info = Dictionary::new();
    info.set("Title", Object::String(to_win_ansi(&doc.title), StringFormat::Literal));
    info.set("Producer", Object::string_literal(PRODUCER));
    let stamp = Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
    info.set("CreationDate", Object::string_literal(stamp));
    info
}

// ============================================================================
// DOCUMENT
// ============================================================================

/// Build the in-memory PDF object graph.
pub fn to_pdf(doc: &Document) -> Result<PdfDocument> {
    let mut pdf = PdfDocument::with_version("1.5");
    let pages_id = pdf.new_object_id();

    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(font_resources(&mut pdf)));
    if !doc.images.is_empty() {
        resources.set("XObject", Object::Dictionary(image_resources(&mut pdf, doc)));
    }

    let mut kids: Vec<Object> = Vec::with_capacity(doc.pages.len());
    for page in &doc.pages {
        let content = Content { operations: page_operations(page) };
        let content_id = pdf.add_object(Stream::new(Dictionary::new(), content.encode()?));
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", name("Page"));
        page_dict.set("Parent", Object::Reference(pages_id));
        page_dict.set("Contents", Object::Reference(content_id));
        let page_id: ObjectId = pdf.add_object(Object::Dictionary(page_dict));
        kids.push(Object::Reference(page_id));
    }

    let mut pages = Dictionary::new();
    pages.set("Type", name("Pages"));
    pages.set("Count", Object::Integer(kids.len() as i64));
    pages.set("Kids", Object::Array(kids));
    pages.set("Resources", Object::Dictionary(resources));
    pages.set("MediaBox", Object::Array(reals(&[0.0, 0.0, pt(PAGE_WIDTH), pt(PAGE_HEIGHT)])));
    pdf.objects.insert(pages_id, Object::Dictionary(pages));

    let mut catalog = Dictionary::new();
    catalog.set("Type", name("Catalog"));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = pdf.add_object(Object::Dictionary(catalog));
    let info_id = pdf.add_object(Object::Dictionary(info_dictionary(doc)));

    pdf.trailer.set("Root", Object::Reference(catalog_id));
    pdf.trailer.set("Info", Object::Reference(info_id));
    Ok(pdf)
}

/// Serialize `doc` to `path`, creating parent directories as needed.
pub fn write_pdf(doc: &Document, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut pdf = to_pdf(doc)?;
    pdf.compress();
    pdf.save(path)?;
    tracing::info!("wrote {} pages to {:?}", doc.pages.len(), path);
    Ok(())
}

/// Every string shown with `Tj` on each page, in drawing order.
///
/// Used to read back generated reports.
pub fn page_texts(pdf: &PdfDocument) -> Result<Vec<Vec<String>>> {
    let mut out = Vec::new();
    for (_, page_id) in pdf.get_pages() {
        let content = Content::decode(&pdf.get_page_content(page_id)?)?;
        let texts = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(bytes.iter().map(|b| char::from(*b)).collect()),
                _ => None,
            })
            .collect();
        out.push(texts);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::images::RasterImage;

    fn sample() -> Document {
        let text = |s: &str, y: f32| DrawOp::Text {
            x: 20.0,
            y,
            text: s.to_string(),
            face: Face::Regular,
            size: 12.0,
            color: Rgb::BLACK,
        };
        Document {
            title: "Rapport été".into(),
            pages: vec![
                Page {
                    ops: vec![
                        DrawOp::Image { image: 0, x: 0.0, y: 0.0, width: 210.0, height: 297.0 },
                        text("Première page", 40.0),
                    ],
                },
                Page {
                    ops: vec![
                        text("Seconde page", 40.0),
                        DrawOp::Line { x1: 20.0, y1: 50.0, x2: 190.0, y2: 50.0, width: 0.4, color: Rgb::BOX_GREY, dash: Some(1.0) },
                        DrawOp::Rect { x: 10.0, y: 60.0, width: 3.0, height: 3.0, fill: Rgb::WINE },
                    ],
                },
            ],
            images: vec![RasterImage { width: 2, height: 2, rgb: vec![200; 12] }],
        }
    }

    #[test]
    fn test_coordinates_flip_to_pdf_space() {
        assert!((pt_y(PAGE_HEIGHT) - 0.0).abs() < 1e-4);
        assert!((pt(25.4) - 72.0).abs() < 1e-4);
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.pdf");
        write_pdf(&sample(), &path).unwrap();

        let pdf = PdfDocument::load(&path).unwrap();
        assert_eq!(pdf.get_pages().len(), 2);
        let texts = page_texts(&pdf).unwrap();
        assert_eq!(texts[0], vec!["Première page".to_string()]);
        assert_eq!(texts[1], vec!["Seconde page".to_string()]);
    }

    #[test]
    fn test_image_is_drawn_through_xobject() {
        let ops = page_operations(&sample().pages[0]);
        let operators: Vec<_> = ops.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(&operators[..4], &["q", "cm", "Do", "Q"]);
        assert_eq!(ops[2].operands, vec![name("Im0")]);
    }
}
