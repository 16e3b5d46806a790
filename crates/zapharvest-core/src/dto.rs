use crate::domain::Contact;
use crate::pipeline::SaveReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOutcomeDto {
    pub source: String,
    pub domain: String,
    pub numbers: Vec<String>,
    pub emails: Vec<String>,
    pub report: Option<SaveReport>,
    pub session_total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendStatus {
    Selected,
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendNextDto {
    pub status: SendStatus,
    pub contact: Option<Contact>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCountsDto {
    pub total: i64,
    pub unsent: i64,
}
