//! S3: Relationship with Wine
//!
//! Profile summary sentence, then the knowledge and relationship blocks.
//!
//! Data Sources:
//! - `connaissance_vin` → Knowledge
//! - `relation_vin` → Relation

use crate::render::Block;
use crate::report::content::Topic;
use crate::report::sections::{body, gap, major, page, spoken, SectionContext};

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let p = ctx.profile;
    let (knowledge, relation) = (spoken(p.knowledge), spoken(p.relation));
    let summary = ctx.render(
        Topic::ProfileSummary,
        "text",
        &[("knowledge", knowledge.as_str()), ("relation", relation.as_str())],
    );
    vec![
        page(),
        major(ctx.heading("relationship")),
        body(summary),
        gap(6.0),
        body(ctx.lookup(Topic::Knowledge, p.knowledge)),
        gap(6.0),
        body(ctx.lookup(Topic::Relation, p.relation)),
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
    fn test_summary_uses_spoken_keys() {
        let p = profile(json!({"connaissance_vin": "Débutant", "relation_vin": "les deux"}));
        let blocks = compose(&SectionContext::new(&p, ContentTable::global()));
        let t = texts(&blocks);
        assert!(t[1].contains("vous êtes debutant"));
        assert!(t[1].contains("orientée vers les deux"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let p = profile(json!({}));
        let table = ContentTable::global();
        let blocks = compose(&SectionContext::new(&p, table));
        let t = texts(&blocks);
        assert_eq!(t[2], table.lookup(Topic::Knowledge, p.locale, "autre"));
        assert_eq!(t[3], table.lookup(Topic::Relation, p.locale, "autre"));
    }
}
