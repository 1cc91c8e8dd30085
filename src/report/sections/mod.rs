//! Report Section Composers
//!
//! Each section module turns the normalized [`Profile`] into the layout
//! blocks of one part of the narrative. Sections never read each other's
//! output; the order of [`SECTIONS`] is the reading order of the report.
//!
//! A section that does not apply (no children, no remarks) composes to an
//! empty block list and is left out of the document entirely.

pub mod s01_cover;
pub mod s02_introduction;
pub mod s03_relationship;
pub mod s04_region;
pub mod s05_diversification;
pub mod s06_heritage;
pub mod s07_risk;
pub mod s08_transmission;
pub mod s09_reserve;
pub mod s10_matrimonial;
pub mod s11_company;
pub mod s12_donation;
pub mod s13_donation_transition;
pub mod s14_conclusion;
pub mod s15_annex;

use crate::render::{Align, Block, IconColumn, ImageSource, Placement, TextStyle};
use crate::report::content::{ContentTable, Locale, Topic};
use crate::report::normalize::Profile;

/// Read-only inputs shared by every section of one report.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub profile: &'a Profile,
    pub content: &'a ContentTable,
    /// Mention the presentation follow-up in the conclusion.
    pub presentation_mention: bool,
}

impl<'a> SectionContext<'a> {
    pub fn new(profile: &'a Profile, content: &'a ContentTable) -> Self {
        Self {
            profile,
            content,
            presentation_mention: true,
        }
    }

    pub fn locale(&self) -> Locale {
        self.profile.locale
    }

    pub fn heading(&self, key: &str) -> &'static str {
        self.content.lookup(Topic::Heading, self.locale(), key)
    }

    pub fn lookup(&self, topic: Topic, key: &str) -> &'static str {
        self.content.lookup(topic, self.locale(), key)
    }

    pub fn text(&self, topic: Topic) -> &'static str {
        self.content.text(topic, self.locale())
    }

    pub fn render(&self, topic: Topic, key: &str, vars: &[(&str, &str)]) -> String {
        self.content.render(topic, self.locale(), key, vars)
    }
}

/// One entry of the fixed narrative.
pub struct SectionDef {
    pub name: &'static str,
    /// Answer fields the section reads (through the profile).
    pub fields: &'static [&'static str],
    pub compose: fn(&SectionContext) -> Vec<Block>,
}

pub static SECTIONS: [SectionDef; 15] = [
    SectionDef { name: "cover", fields: &["prenom", "nom"], compose: s01_cover::compose },
    SectionDef { name: "introduction", fields: &[], compose: s02_introduction::compose },
    SectionDef { name: "relationship", fields: &["connaissance_vin", "relation_vin"], compose: s03_relationship::compose },
    SectionDef { name: "region", fields: &["region_preferee"], compose: s04_region::compose },
    SectionDef { name: "diversification", fields: &["budget_vin"], compose: s05_diversification::compose },
    SectionDef { name: "heritage", fields: &["forme_possession", "motivation"], compose: s06_heritage::compose },
    SectionDef { name: "risk", fields: &["risque"], compose: s07_risk::compose },
    SectionDef { name: "transmission", fields: &["enfants"], compose: s08_transmission::compose },
    SectionDef { name: "reserve", fields: &["enfants", "nombre_enfants"], compose: s09_reserve::compose },
    SectionDef { name: "matrimonial", fields: &["mariage", "regime"], compose: s10_matrimonial::compose },
    SectionDef { name: "company", fields: &["societe", "type_societe"], compose: s11_company::compose },
    SectionDef { name: "donation", fields: &[], compose: s12_donation::compose },
    SectionDef { name: "donation_transition", fields: &["donations"], compose: s13_donation_transition::compose },
    SectionDef {
        name: "conclusion",
        fields: &["importance_patrimoine", "presentation", "presentation_transmission", "presentation_aspects_culturels"],
        compose: s14_conclusion::compose,
    },
    SectionDef { name: "annex", fields: &["remarques"], compose: s15_annex::compose },
];

/// Output of one pass over [`SECTIONS`].
#[derive(Debug, Clone, Default)]
pub struct Composition {
    pub blocks: Vec<Block>,
    /// Names of the sections that contributed, in order.
    pub sections: Vec<&'static str>,
}

/// Compose every section in order into one block stream.
pub fn compose_all(ctx: &SectionContext) -> Composition {
    let mut out = Composition::default();
    for section in &SECTIONS {
        let composed = (section.compose)(ctx);
        if composed.is_empty() {
            tracing::debug!("section {} omitted", section.name);
            continue;
        }
        tracing::debug!("section {}: {} blocks", section.name, composed.len());
        out.blocks.extend(composed);
        out.sections.push(section.name);
    }
    out
}

// ============================================================================
// BLOCK HELPERS
// ============================================================================

/// New page with the decorative background.
pub(crate) fn page() -> Block {
    Block::NewPage { background: true }
}

pub(crate) fn gap(mm: f32) -> Block {
    Block::Gap(mm)
}

pub(crate) fn body(text: impl Into<String>) -> Block {
    Block::Paragraph { text: text.into(), style: TextStyle::BODY, align: Align::Left }
}

pub(crate) fn italic(text: impl Into<String>) -> Block {
    Block::Paragraph { text: text.into(), style: TextStyle::BODY_ITALIC, align: Align::Left }
}

/// Grey italic centered notice.
pub(crate) fn notice(text: impl Into<String>) -> Block {
    Block::Paragraph { text: text.into(), style: TextStyle::NOTICE, align: Align::Center }
}

pub(crate) fn major(text: &str) -> Block {
    Block::MajorTitle(text.to_string())
}

pub(crate) fn minor(text: &str, icon: IconColumn) -> Block {
    Block::MinorTitle { text: text.to_string(), icon }
}

/// Centered illustration from the asset directory.
pub(crate) fn illustration(asset: &'static str, width: f32, gap_after: f32) -> Block {
    Block::Image {
        source: ImageSource::Asset(asset),
        width,
        placement: Placement::Centered,
        gap_after,
    }
}

/// Answer code shown inside a sentence: `vallee_du_rhone` → `vallee du rhone`.
pub(crate) fn spoken(key: &str) -> String {
    key.replace('_', " ")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::report::types::Answers;
    use serde_json::Value;

    pub fn profile(value: Value) -> Profile {
        let answers: Answers = serde_json::from_value(value).unwrap();
        Profile::from_answers(&answers, Locale::Fr)
    }

    /// Every paragraph and title text, in order.
    pub fn texts(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph { text, .. } | Block::Column { text, .. } => Some(text.clone()),
                Block::MajorTitle(t) | Block::AnnexTitle(t) => Some(t.clone()),
                Block::MinorTitle { text, .. } => Some(text.clone()),
                Block::Remark { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn assets(blocks: &[Block]) -> Vec<&'static str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Image { source: ImageSource::Asset(name), .. } => Some(*name),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_order_is_narrative_order() {
        let names: Vec<_> = SECTIONS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "cover",
                "introduction",
                "relationship",
                "region",
                "diversification",
                "heritage",
                "risk",
                "transmission",
                "reserve",
                "matrimonial",
                "company",
                "donation",
                "donation_transition",
                "conclusion",
                "annex",
            ]
        );
    }

    #[test]
    fn test_empty_answers_still_render_every_unconditional_section() {
        let p = profile(json!({}));
        let ctx = SectionContext::new(&p, ContentTable::global());
        let included = compose_all(&ctx).sections;
        assert_eq!(included.len(), 13);
        assert!(!included.contains(&"reserve"));
        assert!(!included.contains(&"annex"));
    }

    #[test]
    fn test_children_and_remarks_add_sections() {
        let p = profile(json!({"enfants": "oui", "nombre_enfants": "3", "remarques": "Merci"}));
        let ctx = SectionContext::new(&p, ContentTable::global());
        let included = compose_all(&ctx).sections;
        assert_eq!(included.len(), 15);
    }

    #[test]
    fn test_spoken_key() {
        assert_eq!(spoken("vallee_du_rhone"), "vallee du rhone");
    }
}
