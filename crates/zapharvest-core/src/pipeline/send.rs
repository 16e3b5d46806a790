use crate::domain::Contact;
use crate::pipeline::ContactStore;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendNext {
    Selected(Contact),
    Exhausted,
}

/// Picks the oldest unsent contact and flags it before handing it out, so a
/// repeated call cannot return the same contact twice.
pub fn send_next<S>(store: &S) -> Result<SendNext, S::Error>
where
    S: ContactStore + ?Sized,
{
    let contacts = store.get_all()?;
    let Some(mut next) = contacts.into_iter().find(|contact| !contact.sent) else {
        debug!("send queue exhausted");
        return Ok(SendNext::Exhausted);
    };

    store.update_sent_flag(next.id)?;
    next.sent = true;
    debug!(id = %next.id, number = %next.whatsapp, "contact selected");
    Ok(SendNext::Selected(next))
}
