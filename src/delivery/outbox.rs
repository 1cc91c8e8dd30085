//! File-based mail outbox.
//!
//! Each message becomes a directory `<outbox>/<message id>/` holding the
//! envelope as `message.json` and a copy of every attachment. A relay
//! process picks them up from there.

use std::fs;
use std::path::{Path, PathBuf};

use super::{recipient, DocumentMailer, MailMessage};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::report::content::{ContentTable, Locale};

pub const ENVELOPE_FILE: &str = "message.json";

#[derive(Debug, Clone)]
pub struct OutboxMailer {
    dir: PathBuf,
    sender: Option<String>,
    bcc: Option<String>,
    content: &'static ContentTable,
}

impl OutboxMailer {
    pub fn new(dir: impl Into<PathBuf>, sender: Option<String>, bcc: Option<String>) -> Self {
        Self {
            dir: dir.into(),
            sender,
            bcc,
            content: ContentTable::global(),
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(&config.outbox_dir, config.mail_sender.clone(), config.mail_bcc.clone())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one message and its attachments; returns the message directory.
    pub fn enqueue(&self, email: Option<&str>, locale: Locale, attachments: &[PathBuf]) -> Result<PathBuf> {
        let to = recipient(email)?;
        if let Some(missing) = attachments.iter().find(|p| !p.is_file()) {
            return Err(ReportError::Delivery(format!("attachment not found: {:?}", missing)));
        }
        let message = MailMessage::compose(
            self.content,
            locale,
            to,
            self.sender.as_deref(),
            self.bcc.as_deref(),
            attachments,
        );

        let message_dir = self.publish(&message, attachments)?;
        tracing::info!("queued mail {} to {} ({} attachments)", message.id, to, attachments.len());
        Ok(message_dir)
    }

    /// Build the message in a staging directory and rename it into place,
    /// so the outbox only ever holds complete messages.
    fn publish(&self, message: &MailMessage, attachments: &[PathBuf]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        // Removed on drop unless renamed away first.
        let staging = tempfile::Builder::new().prefix(".staging_").tempdir_in(&self.dir)?;
        for (path, attachment) in attachments.iter().zip(&message.attachments) {
            fs::copy(path, staging.path().join(&attachment.file_name))?;
        }
        fs::write(staging.path().join(ENVELOPE_FILE), serde_json::to_vec_pretty(message)?)?;

        let message_dir = self.dir.join(message.id.to_string());
        fs::rename(staging.path(), &message_dir)?;
        Ok(message_dir)
    }
}

impl DocumentMailer for OutboxMailer {
    fn send_document(&self, email: Option<&str>, locale: Locale, attachments: &[PathBuf]) -> Result<()> {
        self.enqueue(email, locale, attachments).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_writes_envelope_and_copies() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("A_B_conditions.pdf");
        fs::write(&report, b"%PDF-1.5").unwrap();

        let mailer = OutboxMailer::new(dir.path().join("outbox"), Some("info@grandcrux.com".into()), None);
        let message_dir = mailer.enqueue(Some("client@example.com"), Locale::Nl, &[report]).unwrap();

        assert!(message_dir.join("A_B_conditions.pdf").is_file());
        let envelope: MailMessage =
            serde_json::from_slice(&fs::read(message_dir.join(ENVELOPE_FILE)).unwrap()).unwrap();
        assert_eq!(envelope.to, "client@example.com");
        assert_eq!(envelope.subject, "Uw gepersonaliseerd wijnrapport!");
        assert_eq!(envelope.from.as_deref(), Some("info@grandcrux.com"));
    }

    #[test]
    fn test_missing_recipient_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mailer = OutboxMailer::new(dir.path().join("outbox"), None, None);
        let err = mailer.send_document(None, Locale::Fr, &[]).unwrap_err();
        assert!(matches!(err, ReportError::Delivery(_)));
        assert!(!mailer.dir().exists());
    }

    #[test]
    fn test_failed_copy_leaves_no_partial_message() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("A_B_conditions.pdf");
        fs::write(&report, b"%PDF-1.5").unwrap();
        let gone = dir.path().join("A_B_print_version_fr.pdf");

        let mailer = OutboxMailer::new(dir.path().join("outbox"), None, None);
        let attachments = vec![report, gone];
        let message = MailMessage::compose(ContentTable::global(), Locale::Fr, "a@b.c", None, None, &attachments);
        assert!(mailer.publish(&message, &attachments).is_err());
        assert_eq!(fs::read_dir(mailer.dir()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_attachment_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mailer = OutboxMailer::new(dir.path().join("outbox"), None, None);
        let err = mailer
            .send_document(Some("a@b.c"), Locale::Fr, &[dir.path().join("absent.pdf")])
            .unwrap_err();
        assert!(matches!(err, ReportError::Delivery(_)));
    }
}
