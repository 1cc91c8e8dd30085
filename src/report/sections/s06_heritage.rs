//! S6: Heritage
//!
//! How the wine is held (own cellar, external storage, fund) and why.
//!
//! Data Sources:
//! - `forme_possession` → Possession
//! - `motivation` → Motivation, introduced in italics

use crate::render::{Block, IconColumn};
use crate::report::content::Topic;
use crate::report::sections::{body, gap, italic, minor, page, SectionContext};

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let p = ctx.profile;
    vec![
        page(),
        minor(ctx.heading("heritage"), IconColumn::Narrow),
        body(ctx.lookup(Topic::Possession, p.possession)),
        gap(6.0),
        italic(ctx.text(Topic::MotivationIntro)),
        gap(4.0),
        body(ctx.lookup(Topic::Motivation, p.motivation)),
        gap(10.0),
    ]
}
