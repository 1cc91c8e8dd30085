//! S9: Legal Reserve
//!
//! Only when the client has children (count > 0): how the estate splits
//! between the disposable portion and the children's reserve, illustrated
//! by the allocation chart.

use crate::chart::ChartSpec;
use crate::render::{Block, IconColumn};
use crate::report::content::Topic;
use crate::report::sections::{body, gap, minor, page, SectionContext};

/// Chart with localized labels, or `None` without children.
pub fn reserve_chart(ctx: &SectionContext) -> Option<ChartSpec> {
    ChartSpec::reserve(
        ctx.profile.children,
        ctx.lookup(Topic::ChartLabel, "title"),
        ctx.lookup(Topic::ChartLabel, "disposable"),
        |i| ctx.render(Topic::ChartLabel, "child", &[("index", i.to_string().as_str())]),
    )
}

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let Some(chart) = reserve_chart(ctx) else {
        return Vec::new();
    };
    let count = ctx.profile.children;
    let count_key = if count == 1 { "one" } else { "many" };
    vec![
        page(),
        minor(ctx.heading("reserve"), IconColumn::Narrow),
        gap(4.0),
        body(ctx.text(Topic::ReserveIntro)),
        gap(6.0),
        body(ctx.render(Topic::ChildCount, count_key, &[("count", count.to_string().as_str())])),
        gap(4.0),
        Block::Chart(chart),
        gap(10.0),
        body(ctx.text(Topic::ReserveFollowUp)),
        gap(10.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::content::ContentTable;
    use crate::report::sections::test_support::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_omitted_without_children() {
        let table = ContentTable::global();
        for answers in [
            json!({"enfants": "oui", "nombre_enfants": "0"}),
            json!({"enfants": "oui", "nombre_enfants": "deux"}),
            json!({"enfants": "non", "nombre_enfants": "2"}),
        ] {
            let p = profile(answers);
            assert!(compose(&SectionContext::new(&p, table)).is_empty());
        }
    }

    #[test]
    fn test_chart_labels_are_localized() {
        let p = profile(json!({"lang": "en", "enfants": "oui", "nombre_enfants": "2"}));
        let chart = reserve_chart(&SectionContext::new(&p, ContentTable::global())).unwrap();
        let labels: Vec<_> = chart.wedges.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["Disposable portion", "Reserve child 1", "Reserve child 2"]);
        assert_eq!(chart.title, "Estate (or 'notional' estate)");
        assert_relative_eq!(chart.total_share(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_child_count_sentence() {
        let table = ContentTable::global();
        let one = profile(json!({"lang": "en", "enfants": "oui", "nombre_enfants": "1"}));
        assert!(texts(&compose(&SectionContext::new(&one, table))).contains(&"You have 1 child.".to_string()));
        let many = profile(json!({"lang": "en", "enfants": "oui", "nombre_enfants": 4}));
        assert!(texts(&compose(&SectionContext::new(&many, table))).contains(&"You have 4 children.".to_string()));
    }
}
