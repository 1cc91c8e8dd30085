//! Report configuration
//!
//! Read from the environment (`REPORT_*` variables) or from a JSON file.
//! Every field has a default, so an empty environment yields a working
//! configuration rooted in the current directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::report::content::Locale;

pub const DEFAULT_MAIL_BCC: &str = "noreply@grandcrux.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Static images: logo, background, icons, illustrations.
    pub asset_dir: PathBuf,
    /// Where generated PDFs are written.
    pub output_dir: PathBuf,
    /// Scratch directory for transient chart files.
    pub work_dir: PathBuf,
    /// Locale used when the answers carry no supported `lang`.
    pub base_locale: Locale,
    /// Always produce the print-options sheet (otherwise only on `printOption`).
    pub include_print_options: bool,
    pub include_presentation_mention: bool,
    pub mail_sender: Option<String>,
    pub mail_bcc: Option<String>,
    pub lead_store_path: PathBuf,
    pub outbox_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("."),
            work_dir: std::env::temp_dir(),
            base_locale: Locale::BASE,
            include_print_options: false,
            include_presentation_mention: true,
            mail_sender: None,
            mail_bcc: Some(DEFAULT_MAIL_BCC.to_string()),
            lead_store_path: PathBuf::from("leads.jsonl"),
            outbox_dir: PathBuf::from("outbox"),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "oui" => Some(true),
        "0" | "false" | "no" | "off" | "non" | "" => Some(false),
        _ => None,
    }
}

impl ReportConfig {
    /// Configuration from `REPORT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        let path = |name: &str| var(name).filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        let flag = |name: &str| -> Result<Option<bool>> {
            match var(name) {
                Some(raw) => parse_bool(&raw)
                    .map(Some)
                    .with_context(|| format!("{} must be a boolean, got {:?}", name, raw)),
                None => Ok(None),
            }
        };

        if let Some(p) = path("REPORT_ASSET_DIR") {
            config.asset_dir = p;
        }
        if let Some(p) = path("REPORT_OUTPUT_DIR") {
            config.output_dir = p;
        }
        if let Some(p) = path("REPORT_WORK_DIR") {
            config.work_dir = p;
        }
        if let Some(code) = var("REPORT_BASE_LOCALE") {
            config.base_locale = Locale::from_code(&code)
                .with_context(|| format!("REPORT_BASE_LOCALE: unsupported locale {:?}", code))?;
        }
        if let Some(b) = flag("REPORT_PRINT_OPTIONS")? {
            config.include_print_options = b;
        }
        if let Some(b) = flag("REPORT_PRESENTATION_MENTION")? {
            config.include_presentation_mention = b;
        }
        if let Some(sender) = var("REPORT_MAIL_SENDER").filter(|s| !s.trim().is_empty()) {
            config.mail_sender = Some(sender);
        }
        if let Some(bcc) = var("REPORT_MAIL_BCC") {
            config.mail_bcc = Some(bcc).filter(|s| !s.trim().is_empty());
        }
        if let Some(p) = path("REPORT_LEAD_STORE") {
            config.lead_store_path = p;
        }
        if let Some(p) = path("REPORT_OUTBOX_DIR") {
            config.outbox_dir = p;
        }
        Ok(config)
    }

    /// Load from a JSON file; absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = ReportConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.asset_dir, PathBuf::from("static"));
        assert_eq!(config.mail_bcc.as_deref(), Some(DEFAULT_MAIL_BCC));
        assert!(config.include_presentation_mention);
        assert!(!config.include_print_options);
    }

    #[test]
    fn test_environment_overrides() {
        let config = ReportConfig::from_vars(vars(&[
            ("REPORT_ASSET_DIR", "/srv/assets"),
            ("REPORT_BASE_LOCALE", "nl-BE"),
            ("REPORT_PRINT_OPTIONS", "yes"),
            ("REPORT_PRESENTATION_MENTION", "0"),
            ("REPORT_MAIL_BCC", ""),
        ]))
        .unwrap();
        assert_eq!(config.asset_dir, PathBuf::from("/srv/assets"));
        assert_eq!(config.base_locale, Locale::Nl);
        assert!(config.include_print_options);
        assert!(!config.include_presentation_mention);
        assert_eq!(config.mail_bcc, None);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(ReportConfig::from_vars(vars(&[("REPORT_BASE_LOCALE", "de")])).is_err());
        assert!(ReportConfig::from_vars(vars(&[("REPORT_PRINT_OPTIONS", "maybe")])).is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"output_dir": "out", "base_locale": "en"}"#).unwrap();
        let config = ReportConfig::load(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.base_locale, Locale::En);
        assert_eq!(config.asset_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ReportConfig::load(&dir.path().join("absent.json")).is_err());
    }
}
