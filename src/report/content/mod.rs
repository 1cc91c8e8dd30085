//! Localized Content Table
//!
//! Static copy indexed by (topic, locale, answer key). Each locale partition
//! lives in its own module as a flat slice of [`Entry`] rows; the slices are
//! folded into per-(topic, locale) hash maps the first time the table is used and never
//! mutated afterwards.
//!
//! Resolution order for `lookup(topic, locale, key)`:
//! 1. `(topic, locale, key)`
//! 2. `(topic, locale, topic.default_key())`
//! 3. the same two steps against the base locale (French)
//!
//! A lookup never fails: a topic absent from every partition yields `""`.

mod en;
mod fr;
mod nl;

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// LOCALE
// ============================================================================

/// Supported report languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
    Nl,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Fr, Locale::En, Locale::Nl];

    /// Locale every other partition falls back to.
    pub const BASE: Locale = Locale::Fr;

    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
            Locale::Nl => "nl",
        }
    }

    /// Parse a language code such as `"en"`, `"NL"` or `"fr-BE"`.
    ///
    /// Returns `None` for anything outside the supported set; callers pick
    /// the fallback.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "fr" => Some(Locale::Fr),
            "en" => Some(Locale::En),
            "nl" => Some(Locale::Nl),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// TOPICS
// ============================================================================

/// Subject of one block of copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Heading,
    Introduction,
    ProfileSummary,
    Knowledge,
    Relation,
    RegionIntro,
    Region,
    Budget,
    BudgetGuidance,
    InvestmentNotice,
    Possession,
    MotivationIntro,
    Motivation,
    RiskIntro,
    Risk,
    TransmissionIntro,
    Children,
    ReserveIntro,
    ChildCount,
    ReserveFollowUp,
    ChartLabel,
    MatrimonialIntro,
    Unmarried,
    Regime,
    CompanyIntro,
    Company,
    DonationIntro,
    DonationTypes,
    DonationPact,
    DonationTransition,
    DonationWine,
    Conclusion,
    PresentationMention,
    AnnexIntro,
    PrintSheet,
    PrintOption,
    PrintPrice,
    MailSubject,
    MailBody,
}

impl Topic {
    pub const ALL: [Topic; 39] = [
        Topic::Heading,
        Topic::Introduction,
        Topic::ProfileSummary,
        Topic::Knowledge,
        Topic::Relation,
        Topic::RegionIntro,
        Topic::Region,
        Topic::Budget,
        Topic::BudgetGuidance,
        Topic::InvestmentNotice,
        Topic::Possession,
        Topic::MotivationIntro,
        Topic::Motivation,
        Topic::RiskIntro,
        Topic::Risk,
        Topic::TransmissionIntro,
        Topic::Children,
        Topic::ReserveIntro,
        Topic::ChildCount,
        Topic::ReserveFollowUp,
        Topic::ChartLabel,
        Topic::MatrimonialIntro,
        Topic::Unmarried,
        Topic::Regime,
        Topic::CompanyIntro,
        Topic::Company,
        Topic::DonationIntro,
        Topic::DonationTypes,
        Topic::DonationPact,
        Topic::DonationTransition,
        Topic::DonationWine,
        Topic::Conclusion,
        Topic::PresentationMention,
        Topic::AnnexIntro,
        Topic::PrintSheet,
        Topic::PrintOption,
        Topic::PrintPrice,
        Topic::MailSubject,
        Topic::MailBody,
    ];

    /// Key used when a lookup names an answer key the topic does not know.
    pub fn default_key(self) -> &'static str {
        match self {
            Topic::Heading => "cover",
            Topic::Knowledge | Topic::Relation | Topic::Region => "autre",
            Topic::RegionIntro => "stated",
            Topic::Budget => "moins_500",
            Topic::Possession => "pas_encore",
            Topic::Motivation => "plaisir",
            Topic::Risk => "modere",
            Topic::Children | Topic::Company | Topic::DonationTransition => "non",
            Topic::ChildCount => "many",
            Topic::ChartLabel => "title",
            Topic::Regime => "communautelegale",
            Topic::Conclusion => "moyenne",
            Topic::PrintSheet => "title",
            Topic::PrintOption | Topic::PrintPrice => "handover",
            _ => "text",
        }
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// One row of a locale partition.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub topic: Topic,
    pub key: &'static str,
    pub text: &'static str,
}

impl Entry {
    pub const fn new(topic: Topic, key: &'static str, text: &'static str) -> Self {
        Self { topic, key, text }
    }
}

fn partition(locale: Locale) -> &'static [Entry] {
    match locale {
        Locale::Fr => fr::ENTRIES,
        Locale::En => en::ENTRIES,
        Locale::Nl => nl::ENTRIES,
    }
}

/// Immutable content table shared by every generation call.
#[derive(Debug)]
pub struct ContentTable {
    partitions: FxHashMap<(Topic, Locale), FxHashMap<&'static str, &'static str>>,
}

static TABLE: OnceLock<ContentTable> = OnceLock::new();

impl ContentTable {
    /// Process-wide table, built on first use.
    pub fn global() -> &'static ContentTable {
        TABLE.get_or_init(|| Self::from_partitions(Locale::ALL.iter().map(|&l| (l, partition(l)))))
    }

    fn from_partitions(parts: impl Iterator<Item = (Locale, &'static [Entry])>) -> Self {
        let mut partitions: FxHashMap<_, FxHashMap<_, _>> = FxHashMap::default();
        let mut count = 0usize;
        for (locale, rows) in parts {
            for row in rows {
                partitions
                    .entry((row.topic, locale))
                    .or_default()
                    .insert(row.key, row.text);
                count += 1;
            }
        }
        tracing::debug!("content table loaded: {} entries", count);
        Self { partitions }
    }

    fn get(&self, topic: Topic, locale: Locale, key: &str) -> Option<&'static str> {
        self.partitions
            .get(&(topic, locale))
            .and_then(|keys| keys.get(key))
            .copied()
    }

    /// Resolve a content entry, applying topic-default then base-locale fallback.
    pub fn lookup(&self, topic: Topic, locale: Locale, key: &str) -> &'static str {
        let default = topic.default_key();
        [locale, Locale::BASE]
            .into_iter()
            .find_map(|l| self.get(topic, l, key).or_else(|| self.get(topic, l, default)))
            .unwrap_or_default()
    }

    /// Single-entry topics (introduction, intros, notices).
    pub fn text(&self, topic: Topic, locale: Locale) -> &'static str {
        self.lookup(topic, locale, topic.default_key())
    }

    /// Lookup followed by `{name}` placeholder substitution.
    pub fn render(&self, topic: Topic, locale: Locale, key: &str, vars: &[(&str, &str)]) -> String {
        let mut out = self.lookup(topic, locale, key).to_string();
        for (name, value) in vars {
            out = out.replace(&format!("{{{}}}", name), value);
        }
        out
    }

    /// Answer keys known for a topic in one locale partition, sorted.
    pub fn keys(&self, topic: Topic, locale: Locale) -> Vec<&'static str> {
        let mut keys: Vec<_> = self
            .partitions
            .get(&(topic, locale))
            .map(|m| m.keys().copied().collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Whether the base partition defines `key` for `topic`.
    pub fn contains(&self, topic: Topic, key: &str) -> bool {
        self.get(topic, Locale::BASE, key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_code() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code(" NL "), Some(Locale::Nl));
        assert_eq!(Locale::from_code("fr-BE"), Some(Locale::Fr));
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_every_topic_has_base_default() {
        let table = ContentTable::global();
        for topic in Topic::ALL {
            assert!(
                table.contains(topic, topic.default_key()),
                "{:?} lacks its default key {:?}",
                topic,
                topic.default_key()
            );
        }
    }

    #[test]
    fn test_partitions_cover_same_keys() {
        let table = ContentTable::global();
        for topic in Topic::ALL {
            let base = table.keys(topic, Locale::BASE);
            for locale in [Locale::En, Locale::Nl] {
                let other = table.keys(topic, locale);
                assert_eq!(base, other, "{:?} differs in {}", topic, locale);
            }
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_topic_default() {
        let table = ContentTable::global();
        assert_eq!(
            table.lookup(Topic::Region, Locale::En, "atlantis"),
            table.lookup(Topic::Region, Locale::En, "autre")
        );
        assert_eq!(
            table.lookup(Topic::Risk, Locale::Nl, ""),
            table.lookup(Topic::Risk, Locale::Nl, "modere")
        );
    }

    #[test]
    fn test_missing_partition_falls_back_to_base() {
        let sparse = ContentTable::from_partitions(
            [(Locale::Fr, fr::ENTRIES), (Locale::En, &[] as &'static [Entry])].into_iter(),
        );
        assert!(sparse.keys(Topic::Introduction, Locale::En).is_empty());
        assert_eq!(
            sparse.lookup(Topic::Introduction, Locale::En, "text"),
            sparse.lookup(Topic::Introduction, Locale::Fr, "text")
        );
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let table = ContentTable::global();
        let s = table.render(Topic::ChildCount, Locale::En, "many", &[("count", "3")]);
        assert_eq!(s, "You have 3 children.");
        let s = table.render(Topic::Company, Locale::Fr, "type", &[("company", "SPRL Cave")]);
        assert!(s.contains("SPRL Cave"));
        assert!(!s.contains('{'));
    }
}
