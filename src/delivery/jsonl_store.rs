//! Append-only JSON-lines lead store.
//!
//! One lead per line. Writes from concurrent submissions are serialized
//! by an internal lock so lines never interleave.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{Lead, LeadStore};
use crate::error::{ReportError, Result};

#[derive(Debug)]
pub struct JsonlLeadStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonlLeadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All recorded leads, oldest first. A missing file reads as empty.
    pub fn leads(&self) -> Result<Vec<Lead>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut leads = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            leads.push(serde_json::from_str(&line)?);
        }
        Ok(leads)
    }
}

impl LeadStore for JsonlLeadStore {
    fn save_lead(&self, lead: &Lead) -> Result<()> {
        let json = serde_json::to_string(lead)?;
        let _guard = self
            .lock
            .lock()
            .map_err(|_| ReportError::Delivery("lead store lock poisoned".to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", json)?;
        tracing::debug!("lead saved to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Arc;
    use std::thread;

    fn lead(first: &str) -> Lead {
        Lead {
            last_name: "Dupont".into(),
            first_name: first.into(),
            email: None,
            phone: String::new(),
            address: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlLeadStore::new(dir.path().join("data").join("leads.jsonl"));
        assert!(store.leads().unwrap().is_empty());
        store.save_lead(&lead("Anne")).unwrap();
        store.save_lead(&lead("Marc")).unwrap();
        let names: Vec<_> = store.leads().unwrap().into_iter().map(|l| l.first_name).collect();
        assert_eq!(names, vec!["Anne", "Marc"]);
    }

    #[test]
    fn test_concurrent_writes_keep_lines_whole() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonlLeadStore::new(dir.path().join("leads.jsonl")));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for j in 0..10 {
                        store.save_lead(&lead(&format!("t{}-{}", i, j))).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.leads().unwrap().len(), 80);
    }
}
