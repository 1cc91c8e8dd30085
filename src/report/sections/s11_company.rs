//! S11: Company Holding
//!
//! `societe = oui` with a company type names the type; `oui` without a
//! type adds nothing beyond the introduction; anything else gets the
//! no-company block.

use crate::render::{Block, IconColumn};
use crate::report::content::Topic;
use crate::report::sections::{body, gap, minor, page, SectionContext};

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let p = ctx.profile;
    let mut blocks = vec![
        page(),
        minor(ctx.heading("company"), IconColumn::Wide),
        body(ctx.text(Topic::CompanyIntro)),
        gap(6.0),
    ];
    match (p.has_company, p.company_type.as_deref()) {
        (true, Some(kind)) => {
            blocks.push(body(ctx.render(Topic::Company, "type", &[("company", kind)])));
            blocks.push(gap(8.0));
        }
        (true, None) => {}
        (false, _) => blocks.push(body(ctx.lookup(Topic::Company, "non"))),
    }
    blocks.push(gap(10.0));
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::content::ContentTable;
    use crate::report::sections::test_support::*;
    use serde_json::json;

    fn bodies(answers: serde_json::Value) -> Vec<String> {
        let p = profile(answers);
        texts(&compose(&SectionContext::new(&p, ContentTable::global())))
    }

    #[test]
    fn test_company_type_is_named() {
        let t = bodies(json!({"lang": "en", "societe": "oui", "type_societe": "SRL"}));
        assert_eq!(t[2], "We note that you have indicated the following company type: SRL.");
    }

    #[test]
    fn test_company_without_type_adds_nothing() {
        assert_eq!(bodies(json!({"societe": "oui"})).len(), 2);
    }

    #[test]
    fn test_no_company() {
        let t = bodies(json!({"lang": "en", "societe": "non", "type_societe": "SRL"}));
        assert!(t[2].starts_with("You have indicated that you do not own a company."));
    }
}
