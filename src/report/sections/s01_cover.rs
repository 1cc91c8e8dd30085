//! S1: Cover
//!
//! Logo, localized report title and the client's name, vertically centered,
//! with the decorative rule under the title block. No background.

use crate::render::{Align, Block, ImageSource, Placement, TextStyle};
use crate::report::sections::SectionContext;

const LOGO: &str = "grandcrux.png";
/// Top of the centered title block: (297 - 40) / 2 - 10.
const TITLE_TOP: f32 = 118.5;

pub fn compose(ctx: &SectionContext) -> Vec<Block> {
    let title = format!("{}\n{}", ctx.heading("cover"), ctx.profile.display_name());
    vec![
        Block::NewPage { background: false },
        Block::Image {
            source: ImageSource::Asset(LOGO),
            width: 100.0,
            placement: Placement::Fixed { x: 55.0, y: 5.0 },
            gap_after: 0.0,
        },
        Block::MoveTo(TITLE_TOP),
        Block::Paragraph { text: title, style: TextStyle::COVER_TITLE, align: Align::Center },
        Block::Rule { offset: 3.0, width: 0.8 },
        Block::Gap(15.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::content::ContentTable;
    use crate::report::sections::test_support::*;
    use serde_json::json;

    #[test]
    fn test_cover_title_carries_name() {
        let p = profile(json!({"lang": "en", "prenom": "Anne", "nom": "Dupont"}));
        let blocks = compose(&SectionContext::new(&p, ContentTable::global()));
        assert_eq!(texts(&blocks), vec!["Personalized Wine Report\nAnne Dupont".to_string()]);
        assert!(matches!(blocks[0], Block::NewPage { background: false }));
        assert_eq!(assets(&blocks), vec![LOGO]);
    }
}
