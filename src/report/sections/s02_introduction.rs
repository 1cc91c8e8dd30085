//! S2: Introduction

use crate::render::Block;
use crate::report::content::Topic;
use crate::report::sections::{body, gap, major, page, SectionContext};

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    vec![
        page(),
        major(ctx.heading("introduction")),
        body(ctx.text(Topic::Introduction)),
        gap(10.0),
    ]
}
