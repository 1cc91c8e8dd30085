//! S13: Donation Transition
//!
//! Untitled page bridging past donations (or their absence) to wine as a
//! gift.

use crate::render::Block;
use crate::report::content::Topic;
use crate::report::sections::{body, gap, page, SectionContext};

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let key = if ctx.profile.donations { "oui" } else { "non" };
    vec![
        page(),
        gap(25.0),
        body(ctx.lookup(Topic::DonationTransition, key)),
        gap(6.0),
        body(ctx.text(Topic::DonationWine)),
        gap(10.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::content::ContentTable;
    use crate::report::sections::test_support::*;
    use serde_json::json;

    #[test]
    fn test_transition_follows_donations_answer() {
        let table = ContentTable::global();
        for (raw, key) in [("oui", "oui"), ("non", "non"), ("", "non")] {
            let p = profile(json!({"donations": raw}));
            let t = texts(&compose(&SectionContext::new(&p, table)));
            assert_eq!(t[0], table.lookup(Topic::DonationTransition, p.locale, key));
        }
    }
}
