use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ContactError, ContactResult};
use crate::model::{Contact, ContactId, ContactPatch, DeleteOutcome, NewContact, UpdateOutcome};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client for the `/contactlist` endpoints.
#[derive(Clone)]
pub struct ContactClient {
    base_url: String,
    agent: ureq::Agent,
}

impl ContactClient {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_contacts(&self) -> ContactResult<Vec<Contact>> {
        let resp = self.agent.get(&self.collection_url()).call().map_err(map_ureq_error)?;
        read_json(resp)
    }

    pub fn add_contact(&self, contact: &NewContact) -> ContactResult<Contact> {
        let resp = self
            .agent
            .post(&self.collection_url())
            .send_json(contact)
            .map_err(map_ureq_error)?;
        read_json(resp)
    }

    pub fn update_contact(&self, id: ContactId, patch: &ContactPatch) -> ContactResult<usize> {
        let resp = self
            .agent
            .put(&self.item_url(id))
            .send_json(patch)
            .map_err(map_ureq_error)?;
        let outcome: UpdateOutcome = read_json(resp)?;
        Ok(outcome.updated)
    }

    pub fn delete_contact(&self, id: ContactId) -> ContactResult<usize> {
        let resp = self.agent.delete(&self.item_url(id)).call().map_err(map_ureq_error)?;
        let outcome: DeleteOutcome = read_json(resp)?;
        Ok(outcome.deleted)
    }

    fn collection_url(&self) -> String {
        format!("{}/contactlist", self.base_url)
    }

    fn item_url(&self, id: ContactId) -> String {
        format!("{}/contactlist/{}", self.base_url, id)
    }
}

fn read_json<T: DeserializeOwned>(resp: ureq::Response) -> ContactResult<T> {
    debug!(url = resp.get_url(), status = resp.status(), "server replied");
    let body = resp.into_string()?;
    Ok(serde_json::from_str(&body)?)
}

fn map_ureq_error(e: ureq::Error) -> ContactError {
    match e {
        ureq::Error::Status(status, resp) => {
            let body = resp.into_string().unwrap_or_default();
            let body = serde_json::from_str::<crate::http::ErrorResponse>(&body)
                .map(|r| r.error)
                .unwrap_or(body);
            ContactError::Status { status, body }
        }
        ureq::Error::Transport(t) => ContactError::Transport(t.to_string()),
    }
}
