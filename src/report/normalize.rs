//! Field Normalizer
//!
//! Resolves the raw Answer Set once, upfront, into a [`Profile`] of canonical
//! keys. Every section reads the profile by reference; nothing downstream
//! touches the raw answers again.
//!
//! Normalization never fails. Unknown or missing values degrade to the
//! field's default key, non-numeric child counts degrade to zero.

use serde::Serialize;

use crate::chart::MAX_CHILDREN;
use crate::report::content::Locale;
use crate::report::types::{get_flag, get_list, get_text, Answers};

// ============================================================================
// FIELD DOMAINS
// ============================================================================

/// Enumerated answer field: the canonical keys it accepts and its fallback.
#[derive(Debug, Clone, Copy)]
pub struct Domain {
    pub field: &'static str,
    pub keys: &'static [&'static str],
    pub default: &'static str,
}

pub static KNOWLEDGE: Domain = Domain {
    field: "connaissance_vin",
    keys: &["debutant", "amateur", "connaisseur", "professionnel", "autre"],
    default: "autre",
};

pub static RELATION: Domain = Domain {
    field: "relation_vin",
    keys: &["consommation", "investissement", "les_deux", "autre"],
    default: "autre",
};

pub static REGION: Domain = Domain {
    field: "region_preferee",
    keys: &[
        "bordeaux",
        "bourgogne",
        "vallee_du_rhone",
        "loire",
        "champagne",
        "alsace",
        "provence",
        "italie",
        "espagne",
        "portugal",
        "nouveau_monde",
        "autre",
    ],
    default: "autre",
};

pub static BUDGET: Domain = Domain {
    field: "budget_vin",
    keys: &["moins_500", "500_2000", "2000_10000", "plus_10000"],
    default: "moins_500",
};

pub static POSSESSION: Domain = Domain {
    field: "forme_possession",
    keys: &["cave_personnelle", "cave_externalisee", "fonds_investissement", "pas_encore"],
    default: "pas_encore",
};

pub static MOTIVATION: Domain = Domain {
    field: "motivation",
    keys: &["plaisir", "transmission", "placement", "diversification"],
    default: "plaisir",
};

pub static RISK: Domain = Domain {
    field: "risque",
    keys: &["tres_faible", "modere", "eleve"],
    default: "modere",
};

pub static REGIME: Domain = Domain {
    field: "regime",
    keys: &["communautelegale", "separationbien", "communauteuniverselle"],
    default: "communautelegale",
};

pub static HERITAGE_IMPORTANCE: Domain = Domain {
    field: "importance_patrimoine",
    keys: &["faible", "moyenne", "elevee"],
    default: "moyenne",
};

/// Every enumerated field, for exhaustive checks.
pub static DOMAINS: &[&Domain] = &[
    &KNOWLEDGE,
    &RELATION,
    &REGION,
    &BUDGET,
    &POSSESSION,
    &MOTIVATION,
    &RISK,
    &REGIME,
    &HERITAGE_IMPORTANCE,
];

/// Multi-select groups whose selections are unioned into `presentation`.
const PRESENTATION_FIELDS: [&str; 3] = [
    "presentation",
    "presentation_transmission",
    "presentation_aspects_culturels",
];

impl Domain {
    /// Map a raw value onto one of the domain's keys, or the default.
    pub fn resolve(&self, raw: Option<&str>) -> &'static str {
        self.try_resolve(raw).unwrap_or(self.default)
    }

    /// Like [`resolve`](Self::resolve) but reports an unrecognized value as `None`.
    pub fn try_resolve(&self, raw: Option<&str>) -> Option<&'static str> {
        let key = canonical_key(raw?);
        if key.is_empty() {
            return None;
        }
        if let Some(k) = self.keys.iter().copied().find(|k| *k == key) {
            return Some(k);
        }
        // "communaute_legale" and "communautelegale" name the same answer
        let squashed = key.replace('_', "");
        self.keys.iter().copied().find(|k| k.replace('_', "") == squashed)
    }
}

/// Lower-case, accent-folded, underscore-joined form of a raw answer code.
pub fn canonical_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.trim().chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' => out.push('a'),
            'ç' => out.push('c'),
            'è' | 'é' | 'ê' | 'ë' => out.push('e'),
            'ì' | 'í' | 'î' | 'ï' => out.push('i'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => out.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => out.push('u'),
            'œ' => out.push_str("oe"),
            ' ' | '-' | '\'' | '’' | '_' => {
                if !out.ends_with('_') {
                    out.push('_');
                }
            }
            c if c.is_ascii_alphanumeric() => out.push(c),
            _ => {}
        }
    }
    out.trim_matches('_').to_string()
}

/// Yes/no answer. Anything other than an affirmative reads as "non".
fn yes(raw: Option<&str>) -> bool {
    raw.map(canonical_key)
        .is_some_and(|k| matches!(k.as_str(), "oui" | "yes" | "ja" | "true" | "on" | "1"))
}

/// Children count: digits only after trimming, at most [`MAX_CHILDREN`],
/// otherwise zero.
pub fn parse_child_count(raw: Option<&str>) -> usize {
    let s = raw.map(str::trim).unwrap_or_default();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    match s.parse::<usize>() {
        Ok(n) if n <= MAX_CHILDREN => n,
        _ => {
            tracing::debug!("child count {:?} out of range, using 0", s);
            0
        }
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

// ============================================================================
// PROFILE
// ============================================================================

/// Normalized Answer Set for one generation call.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub locale: Locale,

    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub age: Option<String>,

    pub knowledge: &'static str,
    pub relation: &'static str,
    pub region: &'static str,
    pub budget: &'static str,
    /// Whether any budget tier was answered (drives the investment notice).
    pub budget_given: bool,
    pub possession: &'static str,
    pub motivation: &'static str,
    pub risk: &'static str,

    pub has_children: bool,
    /// Effective number of children; zero unless `has_children`.
    pub children: usize,
    pub married: bool,
    pub regime: &'static str,
    pub has_company: bool,
    pub company_type: Option<String>,
    pub donations: bool,
    pub heritage_importance: &'static str,

    pub presentation: Vec<String>,
    pub remarks: Option<String>,
    pub print_option: bool,
}

impl Profile {
    /// Normalize raw answers. `base` is the locale used when `lang` is
    /// missing or unsupported.
    pub fn from_answers(answers: &Answers, base: Locale) -> Self {
        let text = |key: &str| get_text(answers, key);
        let field = |d: &Domain| d.resolve(text(d.field).as_deref());

        let locale = text("lang")
            .as_deref()
            .and_then(Locale::from_code)
            .unwrap_or(base);

        let has_children = yes(text("enfants").as_deref());
        let children = if has_children {
            parse_child_count(text("nombre_enfants").as_deref())
        } else {
            0
        };

        let mut presentation: Vec<String> = Vec::new();
        for group in PRESENTATION_FIELDS {
            for option in get_list(answers, group) {
                if !presentation.contains(&option) {
                    presentation.push(option);
                }
            }
        }

        Self {
            locale,
            first_name: text("prenom").map(|s| s.trim().to_string()).unwrap_or_default(),
            last_name: text("nom").map(|s| s.trim().to_string()).unwrap_or_default(),
            email: non_blank(text("mail")),
            phone: text("tel").map(|s| s.trim().to_string()).unwrap_or_default(),
            address: text("domicile").map(|s| s.trim().to_string()).unwrap_or_default(),
            age: non_blank(text("age")),

            knowledge: field(&KNOWLEDGE),
            relation: field(&RELATION),
            region: field(&REGION),
            budget: field(&BUDGET),
            budget_given: non_blank(text(BUDGET.field)).is_some(),
            possession: field(&POSSESSION),
            motivation: field(&MOTIVATION),
            risk: field(&RISK),

            has_children,
            children,
            married: yes(text("mariage").as_deref()),
            regime: field(&REGIME),
            has_company: yes(text("societe").as_deref()),
            company_type: non_blank(text("type_societe")),
            donations: yes(text("donations").as_deref()),
            heritage_importance: field(&HERITAGE_IMPORTANCE),

            presentation,
            remarks: non_blank(text("remarques")),
            print_option: get_flag(answers, "printOption"),
        }
    }

    /// "Prénom Nom" as printed on the cover.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// File stem shared by the report and the print sheet: `<prenom>_<nom>`.
    pub fn file_stem(&self) -> String {
        file_stem(&self.first_name, &self.last_name)
    }
}

/// Stem used when neither name yields a usable character.
pub const ANONYMOUS_STEM: &str = "client";

/// `<prenom>_<nom>` reduced to `[A-Za-z0-9_-]`.
///
/// Accents are folded, every other character (separators, dots, spaces)
/// becomes a single `_`, so the stem is always one plain path component.
pub fn file_stem(first_name: &str, last_name: &str) -> String {
    let mut out = String::new();
    for c in format!("{} {}", first_name, last_name).chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c);
            continue;
        }
        let folded = if c.is_ascii() { String::new() } else { canonical_key(&c.to_string()) };
        if !folded.is_empty() && folded.chars().all(|f| f.is_ascii_alphanumeric()) {
            if c.is_uppercase() {
                out.push_str(&folded.to_ascii_uppercase());
            } else {
                out.push_str(&folded);
            }
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let stem = out.trim_matches(|c| c == '_' || c == '-');
    if stem.is_empty() {
        ANONYMOUS_STEM.to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(v: serde_json::Value) -> Profile {
        Profile::from_answers(&serde_json::from_value(v).unwrap(), Locale::Fr)
    }

    #[test]
    fn test_canonical_key() {
        assert_eq!(canonical_key("  Vallée du Rhône "), "vallee_du_rhone");
        assert_eq!(canonical_key("Très-faible"), "tres_faible");
        assert_eq!(canonical_key("LES_DEUX"), "les_deux");
        assert_eq!(canonical_key("500_2000"), "500_2000");
        assert_eq!(canonical_key("??"), "");
    }

    #[test]
    fn test_domain_resolve_defaults() {
        assert_eq!(REGION.resolve(Some("Bordeaux")), "bordeaux");
        assert_eq!(REGION.resolve(Some("atlantis")), "autre");
        assert_eq!(REGION.resolve(None), "autre");
        assert_eq!(RISK.resolve(Some("")), "modere");
        assert_eq!(REGIME.resolve(Some("communaute_legale")), "communautelegale");
        assert_eq!(BUDGET.try_resolve(Some("lots")), None);
    }

    #[test]
    fn test_every_domain_default_is_a_key() {
        for d in DOMAINS {
            assert!(d.keys.contains(&d.default), "{} default not in domain", d.field);
        }
    }

    #[test]
    fn test_parse_child_count() {
        assert_eq!(parse_child_count(Some("3")), 3);
        assert_eq!(parse_child_count(Some(" 2 ")), 2);
        assert_eq!(parse_child_count(Some("two")), 0);
        assert_eq!(parse_child_count(Some("-1")), 0);
        assert_eq!(parse_child_count(Some("2.5")), 0);
        assert_eq!(parse_child_count(Some("")), 0);
        assert_eq!(parse_child_count(None), 0);
        assert_eq!(parse_child_count(Some("20")), MAX_CHILDREN);
        assert_eq!(parse_child_count(Some("21")), 0);
        assert_eq!(parse_child_count(Some("1000000000")), 0);
        assert_eq!(parse_child_count(Some("99999999999999999999999")), 0);
    }

    #[test]
    fn test_empty_answers_never_fail() {
        let p = profile(json!({}));
        assert_eq!(p.locale, Locale::Fr);
        assert_eq!(p.knowledge, "autre");
        assert_eq!(p.budget, "moins_500");
        assert!(!p.budget_given);
        assert_eq!(p.possession, "pas_encore");
        assert_eq!(p.heritage_importance, "moyenne");
        assert_eq!(p.children, 0);
        assert!(p.presentation.is_empty());
        assert!(p.remarks.is_none());
    }

    #[test]
    fn test_children_require_yes() {
        let p = profile(json!({"enfants": "non", "nombre_enfants": "3"}));
        assert_eq!(p.children, 0);
        let p = profile(json!({"enfants": "oui", "nombre_enfants": 3}));
        assert_eq!(p.children, 3);
        let p = profile(json!({"enfants": "oui", "nombre_enfants": "beaucoup"}));
        assert!(p.has_children);
        assert_eq!(p.children, 0);
    }

    #[test]
    fn test_presentation_union() {
        let p = profile(json!({
            "presentation_transmission": ["transmission"],
            "presentation_aspects_culturels": ["culture", "transmission"]
        }));
        assert_eq!(p.presentation, vec!["transmission", "culture"]);
    }

    #[test]
    fn test_locale_fallback_and_names() {
        let p = profile(json!({"lang": "de", "prenom": "Anne Marie", "nom": "Dupont"}));
        assert_eq!(p.locale, Locale::Fr);
        assert_eq!(p.file_stem(), "Anne_Marie_Dupont");
        assert_eq!(p.display_name(), "Anne Marie Dupont");
    }

    #[test]
    fn test_file_stem_stays_one_component() {
        assert_eq!(file_stem("Jean", "x/../../../escaped"), "Jean_x_escaped");
        assert_eq!(file_stem("Hélène", "Lefèvre-Dubois"), "Helene_Lefevre-Dubois");
        assert_eq!(file_stem("Élodie", r"C:\Windows"), "Elodie_C_Windows");
        assert_eq!(file_stem("..", "/"), ANONYMOUS_STEM);
        assert_eq!(file_stem("", ""), ANONYMOUS_STEM);
        assert_eq!(file_stem("Jean Luc", "Van Damme"), "Jean_Luc_Van_Damme");
    }

    #[test]
    fn test_blank_remarks_are_none() {
        assert!(profile(json!({"remarques": "   "})).remarks.is_none());
        assert_eq!(
            profile(json!({"remarques": " Merci "})).remarks.as_deref(),
            Some("Merci")
        );
    }
}
