//! Print-options sheet
//!
//! One fixed page listing the printing and delivery packages with their
//! prices. Only the language varies.

use crate::render::{Align, Block, Cell, ImageSource, Placement, Rgb, TextStyle};
use crate::report::content::{ContentTable, Locale, Topic};

/// Package keys in display order.
pub const PACKAGES: [&str; 4] = ["handover", "post", "delivery", "bespoke"];

const LOGO: &str = "grandcrux.png";
const DESCRIPTION_WIDTH: f32 = 120.0;
const PRICE_WIDTH: f32 = 70.0;

/// `<stem>_print_version_<lang>.pdf`, or `print_version_<lang>.pdf` for an
/// anonymous sheet.
pub fn file_name(stem: Option<&str>, locale: Locale) -> String {
    match stem {
        Some(stem) => format!("{}_print_version_{}.pdf", stem, locale),
        None => format!("print_version_{}.pdf", locale),
    }
}

pub fn compose(content: &ContentTable, locale: Locale) -> Vec<Block> {
    let sheet = |key: &str| content.lookup(Topic::PrintSheet, locale, key).to_string();
    let centered = |text: String, style: TextStyle| Block::Paragraph { text, style, align: Align::Center };

    let mut blocks = vec![
        Block::NewPage { background: false },
        Block::Image {
            source: ImageSource::Asset(LOGO),
            width: 100.0,
            placement: Placement::Fixed { x: 55.0, y: 10.0 },
            gap_after: 0.0,
        },
        Block::Gap(60.0),
        centered(sheet("title"), TextStyle { color: Rgb::WINE, ..TextStyle::MINOR_TITLE }),
        centered(sheet("subtitle"), TextStyle::BODY),
        Block::Gap(10.0),
    ];
    for key in PACKAGES {
        blocks.push(Block::Row {
            cells: vec![
                Cell {
                    text: content.lookup(Topic::PrintOption, locale, key).to_string(),
                    style: TextStyle::BODY,
                    width: DESCRIPTION_WIDTH,
                },
                Cell {
                    text: content.lookup(Topic::PrintPrice, locale, key).to_string(),
                    style: TextStyle::BODY_BOLD,
                    width: PRICE_WIDTH,
                },
            ],
            height: 10.0,
        });
    }
    blocks.extend([
        Block::Gap(8.0),
        centered(sheet("footer"), TextStyle::BODY),
        Block::Gap(10.0),
        centered(sheet("team"), TextStyle::BODY_BOLD),
        Block::Gap(5.0),
        centered(sheet("contact"), TextStyle { size: 11.0, ..TextStyle::BODY }),
    ]);
    blocks
}
