//! Report Integration Tests
//!
//! Runs the public API end to end: answers in, PDF out, read back with
//! lopdf. Asset directories are empty unless a test creates images, so
//! these also exercise the missing-asset path.

use std::fs;
use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use serde_json::{json, Value};

use cellar_report::chart::ChartSpec;
use cellar_report::delivery::{DocumentMailer, Lead, LeadStore};
use cellar_report::render::{pdf, sanitize, DrawOp};
use cellar_report::report::sections::s09_reserve::reserve_chart;
use cellar_report::report::sections::SectionContext;
use cellar_report::{
    submit, Answers, ContentTable, JsonlLeadStore, Locale, OutboxMailer, Profile, ReportConfig, ReportError,
    ReportGenerator, Topic,
};

// ============================================================================
// HELPERS
// ============================================================================

fn answers(value: Value) -> Answers {
    serde_json::from_value(value).unwrap()
}

fn generator(root: &Path) -> ReportGenerator {
    ReportGenerator::new(ReportConfig {
        asset_dir: root.join("static"),
        output_dir: root.join("out"),
        work_dir: root.join("work"),
        lead_store_path: root.join("leads.jsonl"),
        outbox_dir: root.join("outbox"),
        ..ReportConfig::default()
    })
}

fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pages of a written PDF, each as its text lines joined by spaces.
fn read_pages(path: &Path) -> Vec<String> {
    let doc = lopdf::Document::load(path).unwrap();
    pdf::page_texts(&doc)
        .unwrap()
        .into_iter()
        .map(|lines| squash(&lines.join(" ")))
        .collect()
}

fn shows(pages: &[String], text: &str) -> bool {
    let needle = squash(&sanitize(text));
    pages.iter().any(|p| p.contains(&needle))
}

fn en(topic: Topic, key: &str) -> &'static str {
    ContentTable::global().lookup(topic, Locale::En, key)
}

fn scenario() -> Value {
    json!({
        "lang": "en",
        "connaissance_vin": "debutant",
        "relation_vin": "consommation",
        "region_preferee": "bordeaux",
        "budget_vin": "500_2000",
        "enfants": "oui",
        "nombre_enfants": "2",
        "mariage": "non",
        "societe": "non",
        "donations": "non",
        "importance_patrimoine": "moyenne",
        "remarques": ""
    })
}

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn test_english_scenario_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = generator(dir.path()).generate_report(&answers(scenario())).unwrap();
    let pages = read_pages(&path);

    assert!(shows(&pages, en(Topic::Knowledge, "debutant")));
    assert!(shows(&pages, en(Topic::Region, "bordeaux")));
    assert!(shows(&pages, en(Topic::Budget, "500_2000")));
    assert!(shows(&pages, en(Topic::Unmarried, "text")));
    assert!(shows(&pages, en(Topic::Company, "non")));
    assert!(shows(&pages, en(Topic::DonationTransition, "non")));
    assert!(shows(&pages, en(Topic::Conclusion, "moyenne")));

    // Chart legend: disposable share plus one wedge per child.
    assert!(shows(&pages, "Disposable portion: 50.0%"));
    assert!(shows(&pages, "Reserve child 1: 25.0%"));
    assert!(shows(&pages, "Reserve child 2: 25.0%"));
    assert!(!shows(&pages, "Reserve child 3"));

    assert!(!shows(&pages, "APPENDIX"));
    assert!(pages[0].contains("Personalized Wine Report"));
}

#[test]
fn test_annex_appended_only_with_remarks() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());

    let without = read_pages(&gen.generate_report(&answers(scenario())).unwrap());

    let mut with_remark = scenario();
    with_remark["remarques"] = json!("Could you call me back on Friday’s afternoon?");
    with_remark["prenom"] = json!("Other");
    let with = read_pages(&gen.generate_report(&answers(with_remark)).unwrap());

    assert_eq!(with.len(), without.len() + 1);
    let annex = with.last().unwrap();
    assert!(annex.starts_with("APPENDIX"));
    assert!(annex.contains("Could you call me back on Friday's afternoon?"));
    assert_eq!(with.iter().filter(|p| p.contains("APPENDIX")).count(), 1);
}

#[test]
fn test_zero_children_omits_reserve_section() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());

    let mut none = scenario();
    none["nombre_enfants"] = json!("0");
    none["prenom"] = json!("None");
    let none = read_pages(&gen.generate_report(&answers(none)).unwrap());
    let two = read_pages(&gen.generate_report(&answers(scenario())).unwrap());

    let heading = en(Topic::Heading, "reserve");
    assert!(!shows(&none, heading));
    assert!(!shows(&none, "Disposable portion"));
    assert!(shows(&two, heading));
    assert!(two.len() > none.len());
}

#[test]
fn test_print_options_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());
    let path = gen.generate_print_options(Locale::Fr).unwrap();
    assert_eq!(path.file_name().unwrap(), "print_version_fr.pdf");

    let pages = read_pages(&path);
    assert_eq!(pages.len(), 1);
    assert!(shows(&pages, "GRATUIT"));
    assert!(shows(&pages, "525 EUR"));
}

#[test]
fn test_assets_are_embedded_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let static_dir = dir.path().join("static");
    fs::create_dir_all(&static_dir).unwrap();
    for name in ["canevas.jpg", "bouteille.jpg", "graph.jpg"] {
        image::RgbImage::from_pixel(30, 40, image::Rgb([240, 230, 220]))
            .save_with_format(static_dir.join(name), image::ImageFormat::Jpeg)
            .unwrap();
    }

    let gen = generator(dir.path());
    let profile = gen.profile(&answers(scenario()));
    let doc = gen.render(&profile).unwrap();

    // background + icon + graph + chart raster
    assert_eq!(doc.images.len(), 4);
    // Cover has no background; every following page starts with it.
    assert!(!matches!(doc.pages[0].ops.first(), Some(DrawOp::Image { x, y, .. }) if *x == 0.0 && *y == 0.0));
    for page in &doc.pages[1..] {
        assert!(matches!(page.ops.first(), Some(DrawOp::Image { image: 0, .. })));
    }
}

#[test]
fn test_concurrent_generation_shares_work_dir() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());

    let paths: Vec<PathBuf> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let gen = &gen;
                s.spawn(move || {
                    let mut a = scenario();
                    a["prenom"] = json!(format!("Client{}", i));
                    a["nombre_enfants"] = json!((i + 1).to_string());
                    gen.generate_report(&answers(a)).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, path) in paths.iter().enumerate() {
        let pages = read_pages(path);
        let last = format!("Reserve child {}: {:.1}%", i + 1, 50.0 / (i + 1) as f64);
        assert!(shows(&pages, &last), "{:?} missing {}", path, last);
    }
    assert_eq!(fs::read_dir(dir.path().join("work")).unwrap().count(), 0);
}

fn assert_within_break_line(doc: &cellar_report::render::Document) {
    let limit = cellar_report::render::PAGE_HEIGHT - cellar_report::render::layout::BREAK_MARGIN;
    for (n, page) in doc.pages.iter().enumerate() {
        for op in &page.ops {
            if let DrawOp::Text { y, text, .. } = op {
                assert!(*y <= limit, "page {}: {:?} drawn at y = {}", n + 1, text, y);
            }
        }
    }
}

#[test]
fn test_names_never_choose_the_output_location() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());
    let out = dir.path().join("out");

    let mut a = scenario();
    a["prenom"] = json!("Jean");
    a["nom"] = json!("x/../../../escaped");
    a["printOption"] = json!("on");
    let store = JsonlLeadStore::new(dir.path().join("leads.jsonl"));
    let mailer = OutboxMailer::from_config(gen.config());
    let receipt = submit(&answers(a), &gen, &store, &mailer).unwrap();

    assert_eq!(receipt.report.parent(), Some(out.as_path()));
    assert_eq!(receipt.print_options.as_deref().and_then(Path::parent), Some(out.as_path()));
    assert!(receipt.report.is_file());
    assert!(!dir.path().join("escaped_conditions.pdf").exists());
    let written: Vec<_> = fs::read_dir(&out).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.is_file()));
}

#[test]
fn test_largest_family_chart_stays_on_the_page() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());
    let mut a = scenario();
    a["nombre_enfants"] = json!("20");
    let doc = gen.render(&gen.profile(&answers(a))).unwrap();

    assert!(doc.contains_text("Reserve child 20: 2.5%"));
    assert!(!doc.contains_text("Reserve child 21"));
    assert_within_break_line(&doc);
}

#[test]
fn test_implausible_child_counts_degrade_to_no_reserve() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());
    for count in ["60", "1000000000", "184467440737095516160"] {
        let mut a = scenario();
        a["nombre_enfants"] = json!(count);
        let doc = gen.render(&gen.profile(&answers(a))).unwrap();
        assert!(!doc.contains_text("Disposable portion"), "{}", count);
        assert!(!doc.contains_text(en(Topic::Heading, "reserve")), "{}", count);
        assert_within_break_line(&doc);
    }
}

#[test]
fn test_long_remark_fits_one_annex_page() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());
    let without = read_pages(&gen.generate_report(&answers(scenario())).unwrap());

    let remark = "I would like to know how to value the bottles I inherited from my grandfather, \
                  and whether a shared cellar with my sister is a sensible way to keep them. "
        .repeat(8);
    assert!(remark.len() > 1200);
    let mut a = scenario();
    a["prenom"] = json!("Verbose");
    a["remarques"] = json!(remark);
    let path = gen.generate_report(&answers(a.clone())).unwrap();
    let with = read_pages(&path);

    assert_eq!(with.len(), without.len() + 1);
    assert!(with.last().unwrap().contains(&squash(remark.trim())));
    assert_within_break_line(&gen.render(&gen.profile(&answers(a))).unwrap());
}

// ============================================================================
// CONTENT TABLE PROPERTIES
// ============================================================================

#[test]
fn test_every_locale_and_topic_resolves() {
    let table = ContentTable::global();
    for locale in Locale::ALL {
        for topic in Topic::ALL {
            assert!(!table.text(topic, locale).is_empty(), "{:?}/{:?} default", topic, locale);
            for key in table.keys(topic, Locale::BASE) {
                assert!(!table.lookup(topic, locale, key).is_empty(), "{:?}/{:?}/{}", topic, locale, key);
            }
        }
    }
}

#[test]
fn test_unknown_key_falls_back_to_topic_default() {
    let table = ContentTable::global();
    for locale in Locale::ALL {
        for topic in Topic::ALL {
            assert_eq!(
                table.lookup(topic, locale, "no_such_answer"),
                table.lookup(topic, locale, topic.default_key()),
            );
        }
    }
}

#[test]
fn test_sanitize_is_idempotent_over_all_copy() {
    let table = ContentTable::global();
    for locale in Locale::ALL {
        for topic in Topic::ALL {
            for key in table.keys(topic, locale) {
                let once = sanitize(table.lookup(topic, locale, key));
                assert_eq!(sanitize(&once), once);
                assert!(once.chars().all(cellar_report::render::sanitize::is_renderable));
            }
        }
    }
    assert_eq!(sanitize("l’été"), "l'été");
}

// ============================================================================
// CHART
// ============================================================================

#[test]
fn test_wedges_for_profile() {
    let table = ContentTable::global();
    for n in 1..=9usize {
        let profile = Profile::from_answers(
            &answers(json!({"enfants": "oui", "nombre_enfants": n.to_string()})),
            Locale::Fr,
        );
        let chart: ChartSpec = reserve_chart(&SectionContext::new(&profile, table)).unwrap();
        assert_eq!(chart.wedges.len(), n + 1);
        assert_relative_eq!(chart.wedges[0].share, 50.0);
        for w in &chart.wedges[1..] {
            assert_relative_eq!(w.share, 50.0 / n as f64, epsilon = 1e-12);
        }
        assert_relative_eq!(chart.total_share(), 100.0, epsilon = 1e-9);
    }
}

// ============================================================================
// DELIVERY
// ============================================================================

struct FailingStore;

impl LeadStore for FailingStore {
    fn save_lead(&self, _lead: &Lead) -> cellar_report::Result<()> {
        Err(ReportError::Delivery("database unavailable".into()))
    }
}

struct FailingMailer;

impl DocumentMailer for FailingMailer {
    fn send_document(&self, _email: Option<&str>, _locale: Locale, _attachments: &[PathBuf]) -> cellar_report::Result<()> {
        Err(ReportError::Delivery("smtp down".into()))
    }
}

#[test]
fn test_collaborator_failures_do_not_discard_documents() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());
    let receipt = submit(&answers(scenario()), &gen, &FailingStore, &FailingMailer).unwrap();

    assert!(receipt.report.is_file());
    assert!(!receipt.mail_sent);
    assert!(!receipt.lead_saved);
    assert!(receipt.mail_error.unwrap().contains("smtp down"));
    assert!(receipt.lead_error.unwrap().contains("database unavailable"));
}

#[test]
fn test_submit_with_print_option() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());
    let store = JsonlLeadStore::new(&gen.config().lead_store_path);
    let mailer = OutboxMailer::from_config(gen.config());

    let mut a = scenario();
    a["prenom"] = json!("Anne");
    a["nom"] = json!("Dupont");
    a["mail"] = json!("anne@example.com");
    a["printOption"] = json!(true);
    let receipt = submit(&answers(a), &gen, &store, &mailer).unwrap();

    assert!(receipt.mail_sent && receipt.lead_saved);
    let sheet = receipt.print_options.unwrap();
    assert_eq!(sheet.file_name().unwrap(), "Anne_Dupont_print_version_en.pdf");

    let leads = store.leads().unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].last_name, "Dupont");

    let queued: Vec<_> = fs::read_dir(mailer.dir()).unwrap().collect();
    assert_eq!(queued.len(), 1);
    let message_dir = queued.into_iter().next().unwrap().unwrap().path();
    assert!(message_dir.join("Anne_Dupont_conditions.pdf").is_file());
    assert!(message_dir.join("Anne_Dupont_print_version_en.pdf").is_file());
}

#[test]
fn test_submit_without_email_still_saves_lead() {
    let dir = tempfile::tempdir().unwrap();
    let gen = generator(dir.path());
    let store = JsonlLeadStore::new(&gen.config().lead_store_path);
    let mailer = OutboxMailer::from_config(gen.config());

    let receipt = submit(&answers(scenario()), &gen, &store, &mailer).unwrap();
    assert!(!receipt.mail_sent);
    assert!(receipt.lead_saved);
    assert_eq!(store.leads().unwrap()[0].last_name, "PROSPECT");
}
