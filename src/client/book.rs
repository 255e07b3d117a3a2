use crate::client::ContactClient;
use crate::error::{ContactError, ContactResult};
use crate::model::{Contact, ContactId, ContactPatch, NewContact};

/// Local view of the contact list.
///
/// Holds the last fetched list and at most one contact being edited. Every
/// mutation is followed by a full re-fetch; nothing is patched locally.
pub struct ContactBook {
    client: ContactClient,
    contacts: Vec<Contact>,
    editing: Option<Contact>,
}

impl ContactBook {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client,
            contacts: Vec::new(),
            editing: None,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn editing(&self) -> Option<&Contact> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut Contact> {
        self.editing.as_mut()
    }

    pub fn refresh(&mut self) -> ContactResult<()> {
        self.contacts = self.client.list_contacts()?;
        Ok(())
    }

    pub fn add(&mut self, contact: &NewContact) -> ContactResult<Contact> {
        let created = self.client.add_contact(contact)?;
        self.refresh()?;
        Ok(created)
    }

    pub fn delete(&mut self, id: ContactId) -> ContactResult<usize> {
        let deleted = self.client.delete_contact(id)?;
        self.refresh()?;
        Ok(deleted)
    }

    /// Copy the contact with `id` into the edit slot, replacing any edit in
    /// progress.
    pub fn begin_edit(&mut self, id: ContactId) -> ContactResult<&mut Contact> {
        let contact = self
            .contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ContactError::Other(format!("No contact with id {}", id)))?;
        Ok(self.editing.insert(contact))
    }

    /// Send the edited contact to the server, clear the edit slot and
    /// re-fetch. Returns the server's affected-count; `None` when nothing was
    /// being edited.
    pub fn save_edit(&mut self) -> ContactResult<Option<usize>> {
        let Some(contact) = self.editing.take() else {
            return Ok(None);
        };
        let updated = self.client.update_contact(contact.id, &ContactPatch::full(&contact))?;
        self.refresh()?;
        Ok(Some(updated))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Find contacts by id or case-insensitive partial name. An exact name
    /// match wins over partial matches.
    pub fn find(&self, query: &str) -> Vec<&Contact> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        if let Ok(id) = query.parse::<ContactId>() {
            if let Some(c) = self.contacts.iter().find(|c| c.id == id) {
                return vec![c];
            }
        }

        let lower = query.to_lowercase();
        let matches: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&lower))
            .collect();

        let exact = matches.iter().position(|c| c.name.to_lowercase() == lower);
        match exact {
            Some(i) if matches.len() > 1 => vec![matches[i]],
            _ => matches,
        }
    }
}
