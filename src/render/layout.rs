//! Document Assembler
//!
//! Turns the ordered blocks produced by the section composer into pages of
//! absolute draw operations. One [`Assembler`] serves exactly one document:
//! it owns the page cursor and must not be shared between requests.
//!
//! Coordinates are millimetres from the top-left corner of an A4 page.
//! Text positions are baselines.
//!
//! Pagination rules:
//! - `Block::NewPage` always starts a page (section boundaries)
//! - any line, image or box that would cross `PAGE_HEIGHT - BREAK_MARGIN`
//!   starts a new page first, with the same chrome as the current one
//! - pages with chrome get the full-bleed background before any content

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::chart::{self, ChartSpec};
use crate::error::Result;
use crate::render::images::{ImageStore, RasterImage};
use crate::render::metrics::{self, Face};
use crate::render::sanitize::sanitize;
use crate::render::{Rgb, PAGE_HEIGHT, PAGE_WIDTH, PT_TO_MM};

// ============================================================================
// PAGE GEOMETRY
// ============================================================================

pub const MARGIN_LEFT: f32 = 10.0;
pub const MARGIN_RIGHT: f32 = 10.0;
pub const MARGIN_TOP: f32 = 10.0;
/// Safety margin at the bottom of every page; content never crosses it.
pub const BREAK_MARGIN: f32 = 20.0;
/// Horizontal padding inside a text column.
pub const CELL_PADDING: f32 = 1.0;

/// Decorative rule under major titles spans x = 60..150.
const RULE_INSET: f32 = 60.0;
/// Minor titles sit at this height on a fresh page.
const MINOR_TITLE_TOP: f32 = 30.0;
const ICON_WIDTH: f32 = 8.0;

pub const BACKGROUND_ASSET: &str = "canevas.jpg";
pub const ICON_ASSET: &str = "bouteille.jpg";

fn body_width() -> f32 {
    PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn break_line() -> f32 {
    PAGE_HEIGHT - BREAK_MARGIN
}

// ============================================================================
// STYLES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub face: Face,
    pub size: f32,
    pub color: Rgb,
    pub line_height: f32,
}

impl TextStyle {
    pub const BODY: TextStyle = TextStyle { face: Face::Regular, size: 12.0, color: Rgb::BLACK, line_height: 8.0 };
    pub const BODY_ITALIC: TextStyle = TextStyle { face: Face::Oblique, size: 12.0, color: Rgb::BLACK, line_height: 8.0 };
    pub const BODY_BOLD: TextStyle = TextStyle { face: Face::Bold, size: 12.0, color: Rgb::BLACK, line_height: 8.0 };
    pub const NOTICE: TextStyle = TextStyle { face: Face::Oblique, size: 11.0, color: Rgb::SOFT_GREY, line_height: 8.0 };
    pub const CONTACT: TextStyle = TextStyle { face: Face::Oblique, size: 11.0, color: Rgb::DEEP_WINE, line_height: 10.0 };
    pub const COVER_TITLE: TextStyle = TextStyle { face: Face::Bold, size: 20.0, color: Rgb::WINE, line_height: 12.0 };
    pub const MAJOR_TITLE: TextStyle = TextStyle { face: Face::Bold, size: 22.0, color: Rgb::WINE, line_height: 20.0 };
    pub const ANNEX_TITLE: TextStyle = TextStyle { face: Face::Bold, size: 28.0, color: Rgb::WINE, line_height: 20.0 };
    pub const MINOR_TITLE: TextStyle = TextStyle { face: Face::Bold, size: 16.0, color: Rgb::BURGUNDY, line_height: 10.0 };
    pub const REMARK: TextStyle = TextStyle { face: Face::Regular, size: 12.0, color: Rgb::DEEP_WINE, line_height: 8.0 };
    pub const LEGEND: TextStyle = TextStyle { face: Face::Regular, size: 9.0, color: Rgb::BLACK, line_height: 5.0 };

    pub fn with_line_height(self, line_height: f32) -> Self {
        Self { line_height, ..self }
    }

    fn font_mm(&self) -> f32 {
        self.size * PT_TO_MM
    }

    /// Baseline of a line whose box starts at `top`.
    fn baseline(&self, top: f32) -> f32 {
        top + self.line_height / 2.0 + 0.3 * self.font_mm()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Center,
}

/// Where the bottle icon and the title text of a minor title go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IconColumn {
    /// Icon at x=35, text at x=48 (x=43 without icon).
    Narrow,
    /// Icon at x=55, text at x=67 (x=60 without icon).
    Wide,
}

impl IconColumn {
    fn icon_x(self) -> f32 {
        match self {
            IconColumn::Narrow => 35.0,
            IconColumn::Wide => 55.0,
        }
    }

    fn text_x(self, has_icon: bool) -> f32 {
        match (self, has_icon) {
            (IconColumn::Narrow, true) => 48.0,
            (IconColumn::Narrow, false) => 43.0,
            (IconColumn::Wide, true) => 67.0,
            (IconColumn::Wide, false) => 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ImageSource {
    /// File name inside the asset directory.
    Asset(&'static str),
    /// Arbitrary file on disk.
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Placement {
    /// At the cursor, horizontally centered; advances the cursor.
    Centered,
    /// At the cursor with a fixed left edge; advances the cursor.
    Flow { x: f32 },
    /// Absolute position; the cursor does not move.
    Fixed { x: f32, y: f32 },
}

/// A fixed-width cell inside a table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub text: String,
    pub style: TextStyle,
    pub width: f32,
}

// ============================================================================
// BLOCKS (assembler input)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    /// Start a new page; `background` selects the full-bleed chrome.
    NewPage { background: bool },
    /// Move the cursor to an absolute height.
    MoveTo(f32),
    /// Vertical space.
    Gap(f32),
    /// Wrapped text across the body column.
    Paragraph { text: String, style: TextStyle, align: Align },
    /// Wrapped text in an explicit column.
    Column { text: String, style: TextStyle, align: Align, x: f32, width: f32 },
    /// Centered major title with the decorative rule beneath it.
    MajorTitle(String),
    /// Larger variant used for the annex page.
    AnnexTitle(String),
    /// Sub-title with the bottle icon to its left.
    MinorTitle { text: String, icon: IconColumn },
    /// Decorative rule `offset` mm below the cursor; the cursor does not move.
    Rule { offset: f32, width: f32 },
    Image { source: ImageSource, width: f32, placement: Placement, gap_after: f32 },
    /// Allocation chart: title, raster and legend.
    Chart(ChartSpec),
    /// Dashed answer box spanning the page between x=20 and x=190.
    AnswerBox { height: f32 },
    /// Client remark quoted next to the question-mark illustration.
    Remark { text: String, icon: ImageSource },
    /// One row of fixed-width cells.
    Row { cells: Vec<Cell>, height: f32 },
}

// ============================================================================
// OUTPUT (assembler output)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Image { image: usize, x: f32, y: f32, width: f32, height: f32 },
    Text { x: f32, y: f32, text: String, face: Face, size: f32, color: Rgb },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Rgb, dash: Option<f32> },
    Rect { x: f32, y: f32, width: f32, height: f32, fill: Rgb },
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// All text drawn on the page, one entry per line.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// A fully laid-out document, ready for serialization.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub title: String,
    pub pages: Vec<Page>,
    pub images: Vec<RasterImage>,
}

impl Document {
    /// Text of the whole document, lines joined with `\n`.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .flat_map(|p| p.text_lines())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether the document shows `needle` (sanitized), ignoring how it was
    /// wrapped into lines.
    pub fn contains_text(&self, needle: &str) -> bool {
        squash(&self.plain_text()).contains(&squash(&sanitize(needle)))
    }
}

fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// ASSEMBLER
// ============================================================================

pub struct Assembler {
    images: ImageStore,
    work_dir: PathBuf,
    tag: String,
    pages: Vec<Page>,
    y: f32,
    background: bool,
    /// Set after `NewPage` until the first block consumes the page top.
    fresh: bool,
}

impl Assembler {
    /// `tag` names transient files (the chart) created during assembly.
    pub fn new(asset_dir: impl Into<PathBuf>, work_dir: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            images: ImageStore::new(asset_dir),
            work_dir: work_dir.into(),
            tag: tag.into(),
            pages: Vec::new(),
            y: MARGIN_TOP,
            background: false,
            fresh: true,
        }
    }

    /// Lay out every block in order and return the finished document.
    pub fn assemble(mut self, title: &str, blocks: &[Block]) -> Result<Document> {
        for block in blocks {
            self.place(block)?;
        }
        if self.pages.is_empty() {
            self.new_page(false);
        }
        tracing::debug!("assembled {} pages", self.pages.len());
        Ok(Document {
            title: sanitize(title),
            pages: self.pages,
            images: self.images.into_images(),
        })
    }

    fn place(&mut self, block: &Block) -> Result<()> {
        if self.pages.is_empty() && !matches!(block, Block::NewPage { .. }) {
            self.new_page(false);
        }
        match block {
            Block::NewPage { background } => self.new_page(*background),
            Block::MoveTo(y) => self.y = *y,
            Block::Gap(h) => self.y += h,
            Block::Paragraph { text, style, align } => {
                self.text_column(text, *style, *align, MARGIN_LEFT, body_width());
            }
            Block::Column { text, style, align, x, width } => {
                self.text_column(text, *style, *align, *x, *width);
            }
            Block::MajorTitle(text) => self.major_title(text, TextStyle::MAJOR_TITLE, 17.0, 0.8, 15.0),
            Block::AnnexTitle(text) => self.major_title(text, TextStyle::ANNEX_TITLE, 20.0, 1.0, 20.0),
            Block::MinorTitle { text, icon } => self.minor_title(text, *icon),
            Block::Rule { offset, width } => {
                let y = self.y + offset;
                self.rule(y, *width);
            }
            Block::Image { source, width, placement, gap_after } => {
                self.image(source, *width, *placement, *gap_after)?;
            }
            Block::Chart(spec) => self.chart(spec)?,
            Block::AnswerBox { height } => self.answer_box(*height),
            Block::Remark { text, icon } => self.remark(text, icon)?,
            Block::Row { cells, height } => self.row(cells, *height),
        }
        if !matches!(block, Block::NewPage { .. }) {
            self.fresh = false;
        }
        Ok(())
    }

    fn current(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn new_page(&mut self, background: bool) {
        self.pages.push(Page::default());
        self.y = MARGIN_TOP;
        self.background = background;
        self.fresh = true;
        if background {
            if let Some(idx) = self.images.asset(BACKGROUND_ASSET) {
                self.current().ops.push(DrawOp::Image {
                    image: idx,
                    x: 0.0,
                    y: 0.0,
                    width: PAGE_WIDTH,
                    height: PAGE_HEIGHT,
                });
            }
        }
    }

    /// Break to a new page (same chrome) when `height` does not fit.
    fn ensure_room(&mut self, height: f32) {
        if self.y + height > break_line() && self.y > MARGIN_TOP {
            let background = self.background;
            self.new_page(background);
        }
    }

    fn push_text(&mut self, x: f32, top: f32, text: &str, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        let y = style.baseline(top);
        self.current().ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            face: style.face,
            size: style.size,
            color: style.color,
        });
    }

    fn text_column(&mut self, text: &str, style: TextStyle, align: Align, x: f32, width: f32) {
        let text = sanitize(text);
        let inner = width - 2.0 * CELL_PADDING;
        for line in metrics::wrap(&text, style.face, style.size, inner) {
            self.ensure_room(style.line_height);
            let line_x = match align {
                Align::Left => x + CELL_PADDING,
                Align::Center => {
                    let w = metrics::text_width_mm(&line, style.face, style.size);
                    x + (width - w) / 2.0
                }
            };
            let top = self.y;
            self.push_text(line_x, top, &line, style);
            self.y += style.line_height;
        }
    }

    fn rule(&mut self, y: f32, width: f32) {
        self.current().ops.push(DrawOp::Line {
            x1: RULE_INSET,
            y1: y,
            x2: PAGE_WIDTH - RULE_INSET,
            y2: y,
            width,
            color: Rgb::WINE,
            dash: None,
        });
    }

    fn major_title(&mut self, text: &str, style: TextStyle, drop: f32, rule_width: f32, gap: f32) {
        self.y += drop;
        self.ensure_room(style.line_height + gap);
        let text = sanitize(text);
        let w = metrics::text_width_mm(&text, style.face, style.size);
        let top = self.y;
        self.push_text((PAGE_WIDTH - w) / 2.0, top, &text, style);
        self.y += style.line_height;
        let y = self.y;
        self.rule(y, rule_width);
        self.y += gap;
    }

    fn minor_title(&mut self, text: &str, column: IconColumn) {
        if self.fresh {
            self.y = MINOR_TITLE_TOP;
        }
        let style = TextStyle::MINOR_TITLE;
        self.ensure_room(style.line_height + 6.0);
        let top = self.y;
        let icon = self.images.asset(ICON_ASSET);
        if let Some(idx) = icon {
            let height = self.images.get(idx).map_or(0.0, |img| img.height_for(ICON_WIDTH));
            self.current().ops.push(DrawOp::Image {
                image: idx,
                x: column.icon_x(),
                y: top + 1.0,
                width: ICON_WIDTH,
                height,
            });
        }
        let text = sanitize(text);
        self.push_text(column.text_x(icon.is_some()), top, &text, style);
        self.y += style.line_height + 6.0;
    }

    fn resolve(&mut self, source: &ImageSource) -> Result<Option<usize>> {
        Ok(match source {
            ImageSource::Asset(name) => self.images.asset(name),
            ImageSource::File(path) => Some(self.images.load_file(path)?),
        })
    }

    fn draw_image(&mut self, idx: usize, width: f32, placement: Placement) -> f32 {
        let height = self.images.get(idx).map_or(0.0, |img| img.height_for(width));
        let (x, y) = match placement {
            Placement::Fixed { x, y } => (x, y),
            Placement::Centered | Placement::Flow { .. } => {
                self.ensure_room(height);
                let x = match placement {
                    Placement::Flow { x } => x,
                    _ => (PAGE_WIDTH - width) / 2.0,
                };
                (x, self.y)
            }
        };
        self.current().ops.push(DrawOp::Image { image: idx, x, y, width, height });
        if !matches!(placement, Placement::Fixed { .. }) {
            self.y += height;
        }
        height
    }

    fn image(&mut self, source: &ImageSource, width: f32, placement: Placement, gap_after: f32) -> Result<()> {
        if let Some(idx) = self.resolve(source)? {
            self.draw_image(idx, width, placement);
            if !matches!(placement, Placement::Fixed { .. }) {
                self.y += gap_after;
            }
        }
        Ok(())
    }

    fn chart(&mut self, spec: &ChartSpec) -> Result<()> {
        const WIDTH: f32 = 100.0;
        let title_style = TextStyle::BODY_BOLD;
        let legend = TextStyle::LEGEND;

        let transient = chart::write_transient(spec, &self.work_dir, &self.tag)?;
        let idx = self.images.load_file(transient.path())?;
        // Embedded; the temporary file goes away here.
        drop(transient);

        let image_h = self.images.get(idx).map_or(0.0, |img| img.height_for(WIDTH));
        let legend_h = spec.wedges.len() as f32 * legend.line_height;
        let full_page = break_line() - MARGIN_TOP;
        self.ensure_room(title_style.line_height + image_h.max(legend_h).min(full_page));

        let title = sanitize(&spec.title);
        let w = metrics::text_width_mm(&title, title_style.face, title_style.size);
        let top = self.y;
        self.push_text((PAGE_WIDTH - w) / 2.0, top, &title, title_style);
        self.y += title_style.line_height;

        let x0 = (PAGE_WIDTH - WIDTH) / 2.0;
        let y0 = self.y;
        self.draw_image(idx, WIDTH, Placement::Fixed { x: x0, y: y0 });

        // Legend in the blank right band of the raster, continued on the
        // next page when it runs past the break line.
        let scale = WIDTH / chart::RASTER_WIDTH as f32;
        let legend_x = x0 + 620.0 * scale;
        let chart_page = self.pages.len();
        let mut ly = y0 + (image_h - legend_h).max(0.0) / 2.0;
        for wedge in &spec.wedges {
            if ly + legend.line_height > break_line() {
                let background = self.background;
                self.new_page(background);
                ly = self.y;
            }
            let swatch = 3.0;
            self.current().ops.push(DrawOp::Rect {
                x: legend_x,
                y: ly + (legend.line_height - swatch) / 2.0,
                width: swatch,
                height: swatch,
                fill: wedge.color,
            });
            let label = sanitize(&ChartSpec::legend_entry(wedge));
            self.push_text(legend_x + swatch + 1.5, ly, &label, legend);
            ly += legend.line_height;
        }
        self.y = if self.pages.len() == chart_page { (y0 + image_h).max(ly) } else { ly };
        Ok(())
    }

    fn answer_box(&mut self, height: f32) {
        const INSET: f32 = 20.0;
        self.ensure_room(height);
        let (top, bottom) = (self.y, self.y + height);
        let (left, right) = (INSET, PAGE_WIDTH - INSET);
        let edges = [
            (left, top, right, top),
            (left, bottom, right, bottom),
            (left, top, left, bottom),
            (right, top, right, bottom),
        ];
        for (x1, y1, x2, y2) in edges {
            self.current().ops.push(DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                width: 0.4,
                color: Rgb::BOX_GREY,
                dash: Some(1.0),
            });
        }
        self.y = bottom;
    }

    /// The remark never leaves its page: it shrinks, then widens, to fit
    /// the space left, and is cut with an ellipsis past the smallest size.
    fn remark(&mut self, text: &str, icon: &ImageSource) -> Result<()> {
        let quoted = sanitize(&remark_quote(text));
        self.ensure_room(40.0);
        let top = self.y;
        if let Some(idx) = self.resolve(icon)? {
            self.draw_image(idx, 55.0, Placement::Fixed { x: 10.0, y: top - 5.0 });
        }
        self.y = top + 8.0;

        let available = break_line() - self.y;
        let fit = fit_remark(&quoted, available);
        let mut lines = fit.lines;
        let max_lines = (available / fit.style.line_height).floor().max(0.0) as usize;
        if lines.len() > max_lines {
            tracing::warn!("remark cut to {} of {} lines to stay on one page", max_lines, lines.len());
            lines.truncate(max_lines);
            if let Some(last) = lines.last_mut() {
                last.push_str(" ...");
            }
        }
        for line in lines {
            let w = metrics::text_width_mm(&line, fit.style.face, fit.style.size);
            let top = self.y;
            self.push_text(fit.x + (fit.width - w) / 2.0, top, &line, fit.style);
            self.y += fit.style.line_height;
        }
        Ok(())
    }

    fn row(&mut self, cells: &[Cell], height: f32) {
        self.ensure_room(height);
        let top = self.y;
        let mut x = MARGIN_LEFT;
        for cell in cells {
            let text = sanitize(&cell.text);
            let style = cell.style.with_line_height(height);
            self.push_text(x + CELL_PADDING, top, &text, style);
            x += cell.width;
        }
        self.y += height;
    }
}

// ============================================================================
// REMARK FITTING
// ============================================================================

/// Quoted form a client remark is printed in.
pub fn remark_quote(text: &str) -> String {
    format!("« {} »", text)
}

/// Font sizes tried, largest first, for a remark that does not fit.
const REMARK_SIZES: [f32; 7] = [12.0, 11.0, 10.0, 9.0, 8.0, 7.0, 6.0];
/// Column beside the illustration, then the full width under it.
const REMARK_COLUMNS: [(f32, f32); 2] = [(55.0, 120.0), (20.0, 170.0)];

struct RemarkFit {
    style: TextStyle,
    x: f32,
    width: f32,
    lines: Vec<String>,
}

/// Largest layout whose wrapped lines fit in `available` mm; the smallest
/// one when none does.
fn fit_remark(text: &str, available: f32) -> RemarkFit {
    let layout = |(x, width): (f32, f32), size: f32| {
        let style = TextStyle { size, line_height: size * 2.0 / 3.0, ..TextStyle::REMARK };
        let lines = metrics::wrap(text, style.face, size, width - 2.0 * CELL_PADDING);
        RemarkFit { style, x, width, lines }
    };
    let mut smallest = layout(REMARK_COLUMNS[0], REMARK_SIZES[0]);
    for column in REMARK_COLUMNS {
        for size in REMARK_SIZES {
            let fit = layout(column, size);
            if fit.lines.len() as f32 * fit.style.line_height <= available {
                return fit;
            }
            smallest = fit;
        }
    }
    smallest
}

/// Convenience for callers that only need a document from blocks.
pub fn assemble(asset_dir: &Path, work_dir: &Path, tag: &str, title: &str, blocks: &[Block]) -> Result<Document> {
    Assembler::new(asset_dir, work_dir, tag).assemble(title, blocks)
}
