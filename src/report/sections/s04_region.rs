//! S4: Region Preference
//!
//! Continues the relationship page: a sentence naming the preferred region
//! (or the no-preference variant), then the region description.

use crate::render::Block;
use crate::report::content::Topic;
use crate::report::sections::{body, gap, spoken, SectionContext};

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let region = ctx.profile.region;
    let sentence = if region == "autre" {
        ctx.lookup(Topic::RegionIntro, "autre").to_string()
    } else {
        ctx.render(Topic::RegionIntro, "stated", &[("region", spoken(region).as_str())])
    };
    vec![
        body(sentence),
        gap(6.0),
        body(ctx.lookup(Topic::Region, region)),
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
    fn test_stated_region() {
        let p = profile(json!({"lang": "en", "region_preferee": "vallee_du_rhone"}));
        let t = texts(&compose(&SectionContext::new(&p, ContentTable::global())));
        assert_eq!(t[0], "You have expressed a preference for the following wine region: vallee du rhone.");
    }

    #[test]
    fn test_unknown_region_reads_as_no_preference() {
        let p = profile(json!({"lang": "en", "region_preferee": "mars"}));
        let table = ContentTable::global();
        let t = texts(&compose(&SectionContext::new(&p, table)));
        assert_eq!(t[0], table.lookup(Topic::RegionIntro, p.locale, "autre"));
        assert_eq!(t[1], table.lookup(Topic::Region, p.locale, "autre"));
    }
}
