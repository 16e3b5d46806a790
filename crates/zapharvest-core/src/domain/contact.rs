use crate::domain::ids::ContactId;
use crate::domain::number::NormalizedNumber;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub domain: String,
    pub whatsapp: NormalizedNumber,
    pub email: Option<String>,
    pub timestamp: i64,
    pub sent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub domain: String,
    pub whatsapp: NormalizedNumber,
    pub email: Option<String>,
    pub timestamp: i64,
}

impl NewContact {
    pub fn new(
        domain: impl Into<String>,
        whatsapp: NormalizedNumber,
        email: Option<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            domain: domain.into(),
            whatsapp,
            email,
            timestamp,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.domain.trim().is_empty() {
            return Err(CoreError::EmptyDomain);
        }
        if self.timestamp < 0 {
            return Err(CoreError::InvalidTimestamp);
        }
        Ok(())
    }

    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            domain: self.domain,
            whatsapp: self.whatsapp,
            email: self.email,
            timestamp: self.timestamp,
            sent: false,
        }
    }
}
