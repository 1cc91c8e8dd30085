//! S14: Conclusion
//!
//! Closing text keyed by the importance the client gives to heritage, the
//! contact line, a decorative slice and, when any presentation option was
//! ticked, the follow-up mention.

use crate::render::{Align, Block, TextStyle};
use crate::report::content::Topic;
use crate::report::sections::{body, gap, illustration, major, notice, page, SectionContext};

pub const CONTACT_LINE: &str = "info@grandcruX.com  |  www.grandcruX.com";
const SLICE: &str = "slice.jpg";

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let p = ctx.profile;
    let mut blocks = vec![
        page(),
        major(ctx.heading("conclusion")),
        body(ctx.lookup(Topic::Conclusion, p.heritage_importance)),
        gap(15.0),
        Block::Paragraph {
            text: CONTACT_LINE.to_string(),
            style: TextStyle::CONTACT,
            align: Align::Center,
        },
        gap(30.0),
        illustration(SLICE, 80.0, 10.0),
    ];
    if ctx.presentation_mention && !p.presentation.is_empty() {
        blocks.extend([gap(4.0), notice(ctx.text(Topic::PresentationMention)), gap(10.0)]);
    }
    blocks
}
