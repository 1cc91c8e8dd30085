//! S12: Donation

use crate::render::{Block, IconColumn};
use crate::report::content::Topic;
use crate::report::sections::{body, gap, minor, page, SectionContext};

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    vec![
        page(),
        minor(ctx.heading("donation"), IconColumn::Wide),
        body(ctx.text(Topic::DonationIntro)),
        gap(6.0),
        body(ctx.text(Topic::DonationTypes)),
        gap(6.0),
        body(ctx.text(Topic::DonationPact)),
        gap(10.0),
    ]
}
