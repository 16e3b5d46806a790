use crate::domain::NewContact;
use crate::pipeline::gate::{check_number, GateDecision};
use crate::pipeline::ContactStore;
use crate::scan::ExtractionResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReport {
    pub saved: usize,
    pub duplicates: usize,
    pub failed: usize,
}

/// Returns `Ok(None)` without touching the store when the page had no
/// numbers. A refused write only skips that contact; a failing lookup aborts
/// the whole batch and no counts are reported.
pub fn save_extraction<S>(
    store: &S,
    result: &ExtractionResult,
    now_ms: i64,
) -> Result<Option<SaveReport>, S::Error>
where
    S: ContactStore + ?Sized,
{
    if result.is_empty() {
        debug!(domain = %result.domain, "no numbers to save");
        return Ok(None);
    }

    let email = result.first_email();
    let mut report = SaveReport::default();

    for number in &result.whatsapp {
        match check_number(store, number)? {
            GateDecision::Duplicate => {
                debug!(number = %number, "already stored");
                report.duplicates += 1;
            }
            GateDecision::Accept => {
                let contact = NewContact::new(
                    result.domain.as_str(),
                    number.clone(),
                    email.map(str::to_string),
                    now_ms,
                );
                match store.add(contact) {
                    Ok(id) => {
                        debug!(number = %number, id = %id, "contact saved");
                        report.saved += 1;
                    }
                    Err(err) => {
                        warn!(number = %number, error = %err, "failed to save contact");
                        report.failed += 1;
                    }
                }
            }
        }
    }

    info!(
        domain = %result.domain,
        saved = report.saved,
        duplicates = report.duplicates,
        "extraction saved"
    );
    Ok(Some(report))
}
