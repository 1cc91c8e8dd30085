//! S10: Matrimonial Regime
//!
//! Married clients get the text and illustration of their regime; anyone
//! else gets the cohabitation block. An unrecognized regime resolves to the
//! statutory default (legal community).

use crate::render::{Block, IconColumn};
use crate::report::content::Topic;
use crate::report::sections::{body, gap, illustration, minor, page, SectionContext};

/// Illustration for each regime key.
pub fn regime_illustration(regime: &str) -> Option<&'static str> {
    match regime {
        "communautelegale" => Some("regime_legal.jpg"),
        "separationbien" => Some("separation_biens.jpg"),
        "communauteuniverselle" => Some("communaute_universelle.jpg"),
        _ => None,
    }
}

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let p = ctx.profile;
    let mut blocks = vec![
        page(),
        minor(ctx.heading("matrimonial"), IconColumn::Wide),
        body(ctx.text(Topic::MatrimonialIntro)),
        gap(6.0),
    ];
    if p.married {
        blocks.push(body(ctx.lookup(Topic::Regime, p.regime)));
        blocks.push(gap(8.0));
        if let Some(asset) = regime_illustration(p.regime) {
            blocks.push(illustration(asset, 100.0, 10.0));
        }
    } else {
        blocks.push(body(ctx.text(Topic::Unmarried)));
        blocks.push(gap(10.0));
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
    fn test_unmarried_block() {
        let table = ContentTable::global();
        let p = profile(json!({"mariage": "non", "regime": "separationbien"}));
        let blocks = compose(&SectionContext::new(&p, table));
        assert_eq!(texts(&blocks)[2], table.text(Topic::Unmarried, p.locale));
        assert!(assets(&blocks).is_empty());
    }

    #[test]
    fn test_married_regime_and_illustration() {
        let table = ContentTable::global();
        let p = profile(json!({"mariage": "oui", "regime": "communaute universelle"}));
        let blocks = compose(&SectionContext::new(&p, table));
        assert_eq!(texts(&blocks)[2], table.lookup(Topic::Regime, p.locale, "communauteuniverselle"));
        assert_eq!(assets(&blocks), vec!["communaute_universelle.jpg"]);
    }

    #[test]
    fn test_married_unknown_regime_uses_legal_community() {
        let p = profile(json!({"mariage": "oui", "regime": "autre"}));
        let blocks = compose(&SectionContext::new(&p, ContentTable::global()));
        assert_eq!(assets(&blocks), vec!["regime_legal.jpg"]);
    }
}
