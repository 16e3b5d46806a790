//! Dedup gate and the orchestration around it.
//!
//! Everything here assumes a single writer: the gate checks the store and
//! then writes, and nothing makes that pair atomic. Running two extractions
//! against the same store at once can let both pass the check for the same
//! number; the SQLite store's unique index then rejects the second insert,
//! which surfaces as an ordinary per-contact write failure.

pub mod gate;
pub mod save;
pub mod send;
pub mod tally;

pub use gate::{check_number, GateDecision};
pub use save::{save_extraction, SaveReport};
pub use send::{send_next, SendNext};
pub use tally::SessionTally;

use crate::domain::{Contact, ContactId, NewContact, NormalizedNumber};

pub trait ContactStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn add(&self, contact: NewContact) -> Result<ContactId, Self::Error>;

    fn exists_by_number(&self, number: &NormalizedNumber) -> Result<bool, Self::Error>;

    fn get_all(&self) -> Result<Vec<Contact>, Self::Error>;

    fn update_sent_flag(&self, id: ContactId) -> Result<(), Self::Error>;

    fn clear_all(&self) -> Result<(), Self::Error>;
}

#[cfg(test)]
pub(crate) mod memory {
    use super::ContactStore;
    use crate::domain::{Contact, ContactId, NewContact, NormalizedNumber};
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum MemoryError {
        #[error("store offline")]
        Offline,
        #[error("write rejected for {0}")]
        WriteRejected(String),
        #[error("contact not found: {0}")]
        NotFound(ContactId),
    }

    #[derive(Default)]
    pub struct MemoryStore {
        pub contacts: RefCell<Vec<Contact>>,
        pub next_id: Cell<i64>,
        pub calls: Cell<usize>,
        pub offline: bool,
        pub reject_writes: HashSet<String>,
    }

    impl MemoryStore {
        pub fn with_numbers(numbers: &[&str]) -> Self {
            let store = Self::default();
            for number in numbers {
                let number: NormalizedNumber = number.parse().expect("number");
                store
                    .add(NewContact::new("seed.example", number, None, 0))
                    .expect("seed");
            }
            store.calls.set(0);
            store
        }

        fn touch(&self) -> Result<(), MemoryError> {
            self.calls.set(self.calls.get() + 1);
            if self.offline {
                return Err(MemoryError::Offline);
            }
            Ok(())
        }
    }

    impl ContactStore for MemoryStore {
        type Error = MemoryError;

        fn add(&self, contact: NewContact) -> Result<ContactId, Self::Error> {
            self.touch()?;
            if self.reject_writes.contains(contact.whatsapp.as_str()) {
                return Err(MemoryError::WriteRejected(contact.whatsapp.to_string()));
            }
            let id = ContactId(self.next_id.get() + 1);
            self.next_id.set(id.0);
            self.contacts.borrow_mut().push(contact.into_contact(id));
            Ok(id)
        }

        fn exists_by_number(&self, number: &NormalizedNumber) -> Result<bool, Self::Error> {
            self.touch()?;
            Ok(self
                .contacts
                .borrow()
                .iter()
                .any(|contact| &contact.whatsapp == number))
        }

        fn get_all(&self) -> Result<Vec<Contact>, Self::Error> {
            self.touch()?;
            Ok(self.contacts.borrow().clone())
        }

        fn update_sent_flag(&self, id: ContactId) -> Result<(), Self::Error> {
            self.touch()?;
            let mut contacts = self.contacts.borrow_mut();
            let contact = contacts
                .iter_mut()
                .find(|contact| contact.id == id)
                .ok_or(MemoryError::NotFound(id))?;
            contact.sent = true;
            Ok(())
        }

        fn clear_all(&self) -> Result<(), Self::Error> {
            self.touch()?;
            self.contacts.borrow_mut().clear();
            Ok(())
        }
    }
}
