//! S5: Diversification
//!
//! Budget tier text, general guidance, the allocation illustration and,
//! when a budget was answered at all, the investment-advice disclaimer.

use crate::render::{Block, IconColumn};
use crate::report::content::Topic;
use crate::report::sections::{body, gap, illustration, minor, notice, page, SectionContext};

const GRAPH: &str = "graph.jpg";

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let p = ctx.profile;
    let mut blocks = vec![
        page(),
        minor(ctx.heading("diversification"), IconColumn::Wide),
        body(ctx.lookup(Topic::Budget, p.budget)),
        gap(6.0),
        body(ctx.text(Topic::BudgetGuidance)),
        gap(10.0),
        illustration(GRAPH, 80.0, 10.0),
    ];
    if p.budget_given {
        blocks.extend([gap(4.0), notice(ctx.text(Topic::InvestmentNotice)), gap(10.0)]);
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::content::ContentTable;
    use crate::report::sections::test_support::*;
    use serde_json::json;

    #[test]
    fn test_notice_only_with_budget() {
        let table = ContentTable::global();
        let with = profile(json!({"budget_vin": "2000_10000"}));
        let without = profile(json!({}));
        let notice_text = table.text(Topic::InvestmentNotice, with.locale);

        let t = texts(&compose(&SectionContext::new(&with, table)));
        assert!(t.iter().any(|s| s == notice_text));
        assert_eq!(t[1], table.lookup(Topic::Budget, with.locale, "2000_10000"));

        let t = texts(&compose(&SectionContext::new(&without, table)));
        assert!(!t.iter().any(|s| s == notice_text));
        assert_eq!(t[1], table.lookup(Topic::Budget, without.locale, "moins_500"));
    }
}
