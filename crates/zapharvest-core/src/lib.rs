pub mod domain;
pub mod dto;
pub mod error;
pub mod link;
pub mod pipeline;
pub mod scan;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use link::whatsapp_web_url;
pub use pipeline::{
    check_number, save_extraction, send_next, ContactStore, GateDecision, SaveReport, SendNext,
    SessionTally,
};
pub use scan::{extract, extract_emails, find_candidates, Candidate, ExtractionResult};
