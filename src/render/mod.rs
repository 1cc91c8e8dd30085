//! Rendering pipeline
//!
//! - `sanitize`: mandatory character rewriting before anything is laid out
//! - `metrics`: Helvetica advance widths and word wrap
//! - `images`: raster asset loading
//! - `layout`: Document Assembler (blocks → pages of draw operations)
//! - `pdf`: serialization of an assembled document

pub mod images;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod sanitize;

pub use layout::{
    Align, Assembler, Block, Cell, Document, DrawOp, IconColumn, ImageSource, Page, Placement, TextStyle,
};
pub use metrics::Face;
pub use sanitize::sanitize;

use serde::{Deserialize, Serialize};

/// A4 portrait, millimetres.
pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

pub const PT_TO_MM: f32 = 25.4 / 72.0;
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Titles and decorative rules.
    pub const WINE: Rgb = Rgb(128, 0, 32);
    /// Section sub-titles.
    pub const BURGUNDY: Rgb = Rgb(106, 27, 27);
    /// Contact line and client remark.
    pub const DEEP_WINE: Rgb = Rgb(90, 0, 20);
    pub const SOFT_GREY: Rgb = Rgb(80, 80, 80);
    pub const BOX_GREY: Rgb = Rgb(150, 150, 150);

    /// Components scaled to 0.0..=1.0 for PDF color operators.
    pub fn unit(self) -> [f32; 3] {
        [self.0, self.1, self.2].map(|c| f32::from(c) / 255.0)
    }
}
