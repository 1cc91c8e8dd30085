//! S15: Annex
//!
//! Appended only when the client left a remark. No background: title,
//! acknowledgement, a dashed answer box for a handwritten reply, and the
//! remark quoted next to the question-mark illustration.

use crate::render::layout::{remark_quote, CELL_PADDING};
use crate::render::{metrics, sanitize, Align, Block, ImageSource, TextStyle};
use crate::report::content::Topic;
use crate::report::sections::{gap, SectionContext};

const QUESTION: &str = "question_grandcrux.jpg";

const ANSWER_BOX: f32 = 70.0;
const MIN_ANSWER_BOX: f32 = 25.0;
/// Remark lines that fit under a full-height answer box.
const REMARK_LINES: usize = 6;
const REMARK_COLUMN: f32 = 120.0;

/// Answer box height; a long remark takes room from the box.
pub fn answer_box_height(remark: &str) -> f32 {
    let style = TextStyle::REMARK;
    let quoted = sanitize(&remark_quote(remark));
    let lines = metrics::wrap(&quoted, style.face, style.size, REMARK_COLUMN - 2.0 * CELL_PADDING).len();
    let extra = lines.saturating_sub(REMARK_LINES) as f32 * style.line_height;
    (ANSWER_BOX - extra).max(MIN_ANSWER_BOX)
}

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let Some(remark) = ctx.profile.remarks.as_deref() else {
        return Vec::new();
    };
    vec![
        Block::NewPage { background: false },
        gap(20.0),
        Block::AnnexTitle(ctx.heading("annex").to_string()),
        Block::Paragraph {
            text: ctx.text(Topic::AnnexIntro).to_string(),
            style: TextStyle::BODY_ITALIC,
            align: Align::Left,
        },
        gap(12.0),
        Block::AnswerBox { height: answer_box_height(remark) },
        gap(10.0),
        Block::Remark { text: remark.to_string(), icon: ImageSource::Asset(QUESTION) },
        gap(40.0),
    ]
}
