//! Delivery collaborators
//!
//! After a report is generated it is mailed to the client and the contact
//! is recorded as a lead. Both are collaborators behind traits:
//! - [`LeadStore`]: persistence, must serialize its own writes
//! - [`DocumentMailer`]: sends the generated documents
//!
//! [`submit`] runs the whole flow. Only generation failures abort it; a
//! failed mail or lead write is logged and reported in the receipt, and the
//! generated documents stay on disk.

pub mod jsonl_store;
pub mod outbox;

pub use jsonl_store::JsonlLeadStore;
pub use outbox::OutboxMailer;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ReportError, Result};
use crate::report::content::{ContentTable, Locale, Topic};
use crate::report::generator::ReportGenerator;
use crate::report::normalize::Profile;
use crate::report::types::Answers;

// ============================================================================
// LEADS
// ============================================================================

/// Last name recorded when the client left it blank.
pub const ANONYMOUS_LAST_NAME: &str = "PROSPECT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub last_name: String,
    pub first_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub fn from_profile(profile: &Profile) -> Self {
        let last_name = if profile.last_name.is_empty() {
            ANONYMOUS_LAST_NAME.to_string()
        } else {
            profile.last_name.clone()
        };
        Self {
            last_name,
            first_name: profile.first_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            created_at: Utc::now(),
        }
    }
}

pub trait LeadStore {
    fn save_lead(&self, lead: &Lead) -> Result<()>;
}

// ============================================================================
// MAIL
// ============================================================================

pub trait DocumentMailer {
    /// Send `attachments` to `email`. A missing recipient is an error.
    fn send_document(&self, email: Option<&str>, locale: Locale, attachments: &[PathBuf]) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
}

/// Mail envelope: localized subject and HTML body plus attachment list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailMessage {
    pub id: Uuid,
    pub from: Option<String>,
    pub to: String,
    pub bcc: Option<String>,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
}

impl MailMessage {
    pub fn compose(
        content: &ContentTable,
        locale: Locale,
        to: &str,
        from: Option<&str>,
        bcc: Option<&str>,
        attachments: &[PathBuf],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            from: from.map(str::to_string),
            to: to.to_string(),
            bcc: bcc.map(str::to_string),
            subject: content.text(Topic::MailSubject, locale).to_string(),
            html: content.text(Topic::MailBody, locale).to_string(),
            attachments: attachments.iter().map(|p| pdf_attachment(p)).collect(),
            created_at: Utc::now(),
        }
    }
}

fn pdf_attachment(path: &Path) -> Attachment {
    Attachment {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        content_type: "application/pdf".to_string(),
    }
}

/// Trimmed recipient, or a delivery error when there is none.
pub fn recipient(email: Option<&str>) -> Result<&str> {
    email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ReportError::Delivery("missing recipient address".to_string()))
}

// ============================================================================
// SUBMISSION
// ============================================================================

/// Outcome of one submission. Documents are always present; collaborator
/// failures are recorded, not raised.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub report: PathBuf,
    pub print_options: Option<PathBuf>,
    pub mail_sent: bool,
    pub mail_error: Option<String>,
    pub lead_saved: bool,
    pub lead_error: Option<String>,
}

/// Generate the documents, mail them, then record the lead.
pub fn submit(
    answers: &Answers,
    generator: &ReportGenerator,
    store: &dyn LeadStore,
    mailer: &dyn DocumentMailer,
) -> Result<SubmissionReceipt> {
    let profile = generator.profile(answers);
    let report = generator.generate_report_for(&profile)?;
    let print_options = if generator.wants_print_options(&profile) {
        Some(generator.generate_print_options_for(&profile)?)
    } else {
        None
    };

    let mut attachments = vec![report.clone()];
    attachments.extend(print_options.iter().cloned());

    let mail_error = match mailer.send_document(profile.email.as_deref(), profile.locale, &attachments) {
        Ok(()) => {
            tracing::info!("mailed {} attachment(s)", attachments.len());
            None
        }
        Err(e) => {
            tracing::warn!("mail not sent: {}", e);
            Some(e.to_string())
        }
    };

    let lead_error = match store.save_lead(&Lead::from_profile(&profile)) {
        Ok(()) => None,
        Err(e) => {
            tracing::error!("lead not saved: {}", e);
            Some(e.to_string())
        }
    };

    Ok(SubmissionReceipt {
        report,
        print_options,
        mail_sent: mail_error.is_none(),
        mail_error,
        lead_saved: lead_error.is_none(),
        lead_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::content::ContentTable;
    use serde_json::json;

    #[test]
    fn test_lead_defaults_last_name() {
        let answers: Answers = serde_json::from_value(json!({"prenom": "Lou", "mail": "lou@example.com"})).unwrap();
        let lead = Lead::from_profile(&Profile::from_answers(&answers, Locale::Fr));
        assert_eq!(lead.last_name, ANONYMOUS_LAST_NAME);
        assert_eq!(lead.first_name, "Lou");
        assert_eq!(lead.email.as_deref(), Some("lou@example.com"));
    }

    #[test]
    fn test_recipient_required() {
        assert!(matches!(recipient(None), Err(ReportError::Delivery(_))));
        assert!(matches!(recipient(Some("  ")), Err(ReportError::Delivery(_))));
        assert_eq!(recipient(Some(" a@b.c ")).unwrap(), "a@b.c");
    }

    #[test]
    fn test_message_is_localized() {
        let msg = MailMessage::compose(
            ContentTable::global(),
            Locale::En,
            "a@b.c",
            None,
            Some("noreply@grandcrux.com"),
            &[PathBuf::from("/tmp/x/Anne_Dupont_conditions.pdf")],
        );
        assert_eq!(msg.subject, "Your personalised wine report!");
        assert!(msg.html.contains("Kind regards"));
        assert_eq!(msg.attachments[0].file_name, "Anne_Dupont_conditions.pdf");
        assert_eq!(msg.attachments[0].content_type, "application/pdf");
    }
}
