use crate::error::{Result, StoreError};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use tracing::debug;
use zapharvest_core::{Contact, ContactId, ContactStore, NewContact, NormalizedNumber};

const CONTACT_COLUMNS: &str = "id, domain, whatsapp, email, timestamp, sent";

pub struct ContactsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, input: NewContact) -> Result<Contact> {
        input.validate()?;
        self.conn
            .execute(
                "INSERT INTO contacts (domain, whatsapp, email, timestamp, sent)
                 VALUES (?1, ?2, ?3, ?4, 0);",
                params![
                    input.domain,
                    input.whatsapp.as_str(),
                    input.email,
                    input.timestamp
                ],
            )
            .map_err(|err| map_insert_error(err, &input.whatsapp))?;
        let id = ContactId(self.conn.last_insert_rowid());
        Ok(input.into_contact(id))
    }

    pub fn get(&self, id: ContactId) -> Result<Option<Contact>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1;"
        ))?;
        let mut rows = stmt.query([id.get()])?;
        match rows.next()? {
            Some(row) => Ok(Some(contact_from_row(row)?)),
            None => Ok(None),
        }
    }

    pub fn number_exists(&self, number: &NormalizedNumber) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM contacts WHERE whatsapp = ?1 LIMIT 1;",
                [number.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn list_all(&self) -> Result<Vec<Contact>> {
        self.query_contacts(
            &format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY id ASC;"),
            params![],
        )
    }

    pub fn list_recent(&self, limit: usize) -> Result<Vec<Contact>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.query_contacts(
            &format!("SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY id DESC LIMIT ?1;"),
            [limit],
        )
    }

    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn count_unsent(&self) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM contacts WHERE sent = 0;",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub fn mark_sent(&self, id: ContactId) -> Result<()> {
        let updated = self
            .conn
            .execute("UPDATE contacts SET sent = 1 WHERE id = ?1;", [id.get()])?;
        if updated == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id = %id, "contact marked sent");
        Ok(())
    }

    /// Removes every contact. Ids keep growing afterwards.
    pub fn clear(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM contacts;", [])?;
        debug!(removed, "contacts cleared");
        Ok(removed)
    }

    fn query_contacts<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(contact_from_row(row)?);
        }
        Ok(contacts)
    }
}

impl ContactStore for ContactsRepo<'_> {
    type Error = StoreError;

    fn add(&self, contact: NewContact) -> Result<ContactId> {
        self.create(contact).map(|contact| contact.id)
    }

    fn exists_by_number(&self, number: &NormalizedNumber) -> Result<bool> {
        self.number_exists(number)
    }

    fn get_all(&self) -> Result<Vec<Contact>> {
        self.list_all()
    }

    fn update_sent_flag(&self, id: ContactId) -> Result<()> {
        self.mark_sent(id)
    }

    fn clear_all(&self) -> Result<()> {
        self.clear().map(|_| ())
    }
}

fn map_insert_error(err: rusqlite::Error, number: &NormalizedNumber) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(ref failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            StoreError::DuplicateNumber(number.to_string())
        }
        other => StoreError::Sql(other),
    }
}

fn contact_from_row(row: &rusqlite::Row<'_>) -> Result<Contact> {
    let id: i64 = row.get(0)?;
    let whatsapp: String = row.get(2)?;
    let whatsapp = whatsapp
        .parse::<NormalizedNumber>()
        .map_err(|err| StoreError::InvalidRow {
            id,
            reason: err.to_string(),
        })?;
    Ok(Contact {
        id: ContactId(id),
        domain: row.get(1)?,
        whatsapp,
        email: row.get(3)?,
        timestamp: row.get(4)?,
        sent: row.get::<_, i64>(5)? != 0,
    })
}
