pub mod email;
pub mod matcher;

pub use email::{extract_emails, MAX_PAGE_EMAILS};
pub use matcher::{find_candidates, Candidate};

use crate::domain::{normalize_number, NormalizedNumber};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub whatsapp: Vec<NormalizedNumber>,
    pub emails: Vec<String>,
    pub domain: String,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.whatsapp.is_empty()
    }

    pub fn first_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }
}

pub fn extract(content: &str, domain: &str) -> ExtractionResult {
    let mut seen = HashSet::new();
    let mut whatsapp = Vec::new();

    for candidate in find_candidates(content) {
        match normalize_number(candidate.as_str()) {
            Some(number) => {
                if seen.insert(number.clone()) {
                    debug!(number = %number, "whatsapp number found");
                    whatsapp.push(number);
                }
            }
            None => trace!(raw = candidate.as_str(), "candidate rejected"),
        }
    }

    let emails = extract_emails(content);
    debug!(
        domain,
        numbers = whatsapp.len(),
        emails = emails.len(),
        "page scanned"
    );

    ExtractionResult {
        whatsapp,
        emails,
        domain: domain.to_string(),
    }
}
