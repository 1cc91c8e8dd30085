//! Report Generator
//!
//! Main entry point for producing documents. Orchestrates one generation
//! call end to end:
//!
//! 1. normalize the Answer Set into a [`Profile`] (once)
//! 2. compose all sections in narrative order
//! 3. assemble pages with a fresh [`Assembler`] for this call
//! 4. serialize to PDF in the output directory
//!
//! Public API (consumed by `delivery::submit` and the `generate_report` binary):
//! - ReportGenerator::new(config) -> Self
//! - ReportGenerator::generate_report(answers) -> Result<PathBuf>
//! - ReportGenerator::generate_report_for(profile) -> Result<PathBuf>
//! - ReportGenerator::generate_print_options(locale) -> Result<PathBuf>
//! - ReportGenerator::generate_print_options_for(profile) -> Result<PathBuf>
//! - ReportGenerator::generate_print_options_named(locale, first, last) -> Result<PathBuf>

use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::render::layout::Assembler;
use crate::render::{pdf, Block, Document};
use crate::report::content::{ContentTable, Locale, Topic};
use crate::report::normalize::{self, Profile};
use crate::report::print_options;
use crate::report::sections::{self, Composition, SectionContext};
use crate::report::types::Answers;

/// Report generator. Holds only immutable configuration; safe to share
/// between concurrent calls.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    config: ReportConfig,
    content: &'static ContentTable,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            content: ContentTable::global(),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Normalize raw answers against the configured base locale.
    pub fn profile(&self, answers: &Answers) -> Profile {
        Profile::from_answers(answers, self.config.base_locale)
    }

    /// Ordered layout blocks for a profile's report.
    pub fn compose(&self, profile: &Profile) -> Vec<Block> {
        self.composition(profile).blocks
    }

    fn composition(&self, profile: &Profile) -> Composition {
        let ctx = SectionContext {
            profile,
            content: self.content,
            presentation_mention: self.config.include_presentation_mention,
        };
        sections::compose_all(&ctx)
    }

    /// Lay out a profile's report without writing it.
    pub fn render(&self, profile: &Profile) -> Result<Document> {
        let request = Uuid::new_v4().simple().to_string();
        self.assemble(&request, &self.title(profile), &self.compose(profile))
    }

    fn title(&self, profile: &Profile) -> String {
        let heading = self.content.lookup(Topic::Heading, profile.locale, "cover");
        format!("{} - {}", heading, profile.display_name())
    }

    fn assemble(&self, request: &str, title: &str, blocks: &[Block]) -> Result<Document> {
        Assembler::new(&self.config.asset_dir, &self.config.work_dir, request).assemble(title, blocks)
    }

    /// `file_name` inside the output directory. Anything but a single plain
    /// component is refused.
    fn output_path(&self, file_name: &str) -> Result<PathBuf> {
        let path = self.config.output_dir.join(file_name);
        let mut components = Path::new(file_name).components();
        let plain = matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none();
        if !plain || path.parent() != Some(self.config.output_dir.as_path()) {
            return Err(ReportError::OutputPath(path));
        }
        Ok(path)
    }

    /// Whether this profile also gets the print-options sheet.
    pub fn wants_print_options(&self, profile: &Profile) -> bool {
        self.config.include_print_options || profile.print_option
    }

    /// Generate the personalized report; returns the written file.
    pub fn generate_report(&self, answers: &Answers) -> Result<PathBuf> {
        self.generate_report_for(&self.profile(answers))
    }

    /// Generate the report for an already normalized profile.
    pub fn generate_report_for(&self, profile: &Profile) -> Result<PathBuf> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("generate_report", request = %request_id);
        let _guard = span.enter();

        tracing::info!(
            "generating {} report for {:?} ({} children, remarks: {})",
            profile.locale,
            profile.display_name(),
            profile.children,
            profile.remarks.is_some()
        );

        let composition = self.composition(profile);
        tracing::debug!("sections: {}", composition.sections.join(", "));
        let document = self.assemble(&request_id.simple().to_string(), &self.title(profile), &composition.blocks)?;

        let path = self.output_path(&format!("{}_conditions.pdf", profile.file_stem()))?;
        pdf::write_pdf(&document, &path)?;
        Ok(path)
    }

    /// Anonymous print-options sheet in one language.
    pub fn generate_print_options(&self, locale: Locale) -> Result<PathBuf> {
        self.write_print_options(None, locale)
    }

    /// Print-options sheet named after the client, in the client's language.
    pub fn generate_print_options_for(&self, profile: &Profile) -> Result<PathBuf> {
        self.write_print_options(Some(&profile.file_stem()), profile.locale)
    }

    /// Print-options sheet named after a client given by name.
    pub fn generate_print_options_named(&self, locale: Locale, first_name: &str, last_name: &str) -> Result<PathBuf> {
        self.write_print_options(Some(&normalize::file_stem(first_name, last_name)), locale)
    }

    fn write_print_options(&self, stem: Option<&str>, locale: Locale) -> Result<PathBuf> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("generate_print_options", request = %request_id);
        let _guard = span.enter();

        let blocks = print_options::compose(self.content, locale);
        let title = self.content.lookup(Topic::PrintSheet, locale, "title");
        let document = self.assemble(&request_id.simple().to_string(), title, &blocks)?;

        let path = self.output_path(&print_options::file_name(stem, locale))?;
        pdf::write_pdf(&document, &path)?;
        Ok(path)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generator(dir: &std::path::Path) -> ReportGenerator {
        ReportGenerator::new(ReportConfig {
            asset_dir: dir.join("static"),
            output_dir: dir.join("out"),
            work_dir: dir.join("work"),
            ..ReportConfig::default()
        })
    }

    fn answers(value: serde_json::Value) -> Answers {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_report_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let gen = generator(dir.path());
        let path = gen
            .generate_report(&answers(json!({"prenom": "Jean Luc", "nom": "Van Damme"})))
            .unwrap();
        assert_eq!(path, dir.path().join("out").join("Jean_Luc_Van_Damme_conditions.pdf"));
        assert!(path.exists());
    }

    #[test]
    fn test_names_cannot_leave_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let gen = generator(dir.path());
        let out = dir.path().join("out");
        let path = gen
            .generate_report(&answers(json!({"prenom": "Jean", "nom": "x/../../../escaped"})))
            .unwrap();
        assert_eq!(path.parent(), Some(out.as_path()));
        assert_eq!(path.file_name().unwrap(), "Jean_x_escaped_conditions.pdf");

        let sheet = gen.generate_print_options_named(Locale::En, "../..", "/etc/passwd").unwrap();
        assert_eq!(sheet.parent(), Some(out.as_path()));
        assert_eq!(sheet.file_name().unwrap(), "etc_passwd_print_version_en.pdf");
    }

    #[test]
    fn test_output_path_refuses_nested_names() {
        let dir = tempfile::tempdir().unwrap();
        let gen = generator(dir.path());
        assert!(gen.output_path("report.pdf").is_ok());
        for bad in ["../report.pdf", "a/report.pdf", "/tmp/report.pdf", ".."] {
            assert!(matches!(gen.output_path(bad), Err(ReportError::OutputPath(_))), "{}", bad);
        }
    }

    #[test]
    fn test_work_dir_left_clean() {
        let dir = tempfile::tempdir().unwrap();
        let gen = generator(dir.path());
        gen.generate_report(&answers(json!({"enfants": "oui", "nombre_enfants": "3"})))
            .unwrap();
        let leftovers = std::fs::read_dir(dir.path().join("work")).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_print_options_names() {
        let dir = tempfile::tempdir().unwrap();
        let gen = generator(dir.path());
        let anon = gen.generate_print_options(Locale::En).unwrap();
        assert!(anon.ends_with("print_version_en.pdf"));

        let profile = gen.profile(&answers(json!({"lang": "nl", "prenom": "Els", "nom": "Peeters"})));
        let named = gen.generate_print_options_for(&profile).unwrap();
        assert!(named.ends_with("Els_Peeters_print_version_nl.pdf"));

        let by_name = gen.generate_print_options_named(Locale::Fr, "Anne Marie", "Dupont").unwrap();
        assert!(by_name.ends_with("Anne_Marie_Dupont_print_version_fr.pdf"));
    }

    #[test]
    fn test_wants_print_options() {
        let gen = ReportGenerator::default();
        assert!(!gen.wants_print_options(&gen.profile(&answers(json!({})))));
        assert!(gen.wants_print_options(&gen.profile(&answers(json!({"printOption": "on"})))));
    }
}
