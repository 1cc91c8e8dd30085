//! S8: Transmission
//!
//! Succession-law introduction, then the children / no-children block.

use crate::render::Block;
use crate::report::content::Topic;
use crate::report::sections::{body, gap, major, page, SectionContext};

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let key = if ctx.profile.has_children { "oui" } else { "non" };
    vec![
        page(),
        major(ctx.heading("transmission")),
        body(ctx.text(Topic::TransmissionIntro)),
        gap(6.0),
        body(ctx.lookup(Topic::Children, key)),
        gap(10.0),
    ]
}
