//! S7: Risk Appetite
//!
//! Shares the heritage page: the sub-title follows the cursor.

use crate::render::{Block, IconColumn};
use crate::report::content::Topic;
use crate::report::sections::{body, gap, minor, SectionContext};

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    vec![
        minor(ctx.heading("risk"), IconColumn::Narrow),
        body(ctx.text(Topic::RiskIntro)),
        gap(6.0),
        body(ctx.lookup(Topic::Risk, ctx.profile.risk)),
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
    fn test_risk_levels() {
        let table = ContentTable::global();
        for (raw, key) in [("tres faible", "tres_faible"), ("Élevé", "eleve"), ("??", "modere")] {
            let p = profile(json!({"lang": "nl", "risque": raw}));
            let t = texts(&compose(&SectionContext::new(&p, table)));
            assert_eq!(t[2], table.lookup(Topic::Risk, p.locale, key));
        }
    }
}
