//! Persisted client registry with duplicate prevention.

use thiserror::Error;
use tracing::{debug, warn};

use super::store::{KeyValueStore, StoreError};
use crate::core::{ClientPatch, ClientProfile, ClientRecord};

/// Store key holding the JSON array of client records.
pub const CLIENTS_KEY: &str = "af_clients";

/// Why a candidate client was rejected as a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateReason {
    /// Same email, compared case-insensitively.
    Email,
    /// No company and same "first last" name, compared case-insensitively.
    Name,
}

impl DuplicateReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Email => "a client with this email already exists",
            Self::Name => "a client with this name already exists",
        }
    }
}

/// Errors returned by [`ClientRegistry`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The candidate duplicates an existing client; nothing was stored.
    #[error("duplicate client: {}", .reason.message())]
    Duplicate { reason: DuplicateReason },

    /// No client has this id.
    #[error("client {0} not found")]
    NotFound(u64),

    /// The highest stored id is `u64::MAX`; no further id can be issued.
    #[error("no client id left after {0}")]
    IdExhausted(u64),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("client store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RegistryError {
    /// True for the recoverable duplicate outcome of [`ClientRegistry::add`].
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Example clients written by [`ClientRegistry::initialize`].
pub fn default_clients() -> Vec<ClientRecord> {
    vec![
        ClientRecord::new(1, "Dupont Jean", "jean.dupont@example.com"),
        ClientRecord::new(2, "Martin Sophie", "sophie.martin@example.com"),
        ClientRecord::new(3, "Bernard Entreprise SARL", "contact@bernard.fr"),
    ]
}

/// Parse a persisted client blob.
pub fn decode_clients(raw: &str) -> Result<Vec<ClientRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Serialize clients into the persisted blob format, keeping order.
pub fn encode_clients(clients: &[ClientRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(clients)
}

enum Stored {
    Missing,
    Malformed,
    Records(Vec<ClientRecord>),
}

/// CRUD over the client list persisted under one store key.
///
/// Every mutation reads the whole list, changes it, and writes it back.
/// Two registries over the same backing data race: the last write wins.
#[derive(Debug)]
pub struct ClientRegistry<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ClientRegistry<S> {
    /// Registry persisted under [`CLIENTS_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, CLIENTS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Write [`default_clients`] when nothing usable is stored yet.
    ///
    /// Returns `true` when the defaults were written. A malformed value is
    /// replaced; a valid one (even an empty list) is kept.
    pub fn initialize(&mut self) -> Result<bool, RegistryError> {
        match self.read()? {
            Stored::Records(_) => Ok(false),
            Stored::Missing | Stored::Malformed => {
                self.seed(&default_clients())?;
                Ok(true)
            }
        }
    }

    /// Replace the stored list with `clients`.
    pub fn seed(&mut self, clients: &[ClientRecord]) -> Result<(), RegistryError> {
        self.persist(clients)?;
        debug!(key = %self.key, count = clients.len(), "client store seeded");
        Ok(())
    }

    /// All clients in insertion order. Missing or malformed data reads as empty.
    pub fn list(&self) -> Result<Vec<ClientRecord>, RegistryError> {
        Ok(match self.read()? {
            Stored::Records(records) => records,
            Stored::Missing | Stored::Malformed => Vec::new(),
        })
    }

    pub fn get(&self, id: u64) -> Result<Option<ClientRecord>, RegistryError> {
        Ok(self.list()?.into_iter().find(|c| c.id == id))
    }

    /// Add a client built from `candidate`.
    ///
    /// Rejects, without touching the store, a candidate whose email matches an
    /// existing client, or, when it has no company, whose "first last" name
    /// matches an existing display name. Both comparisons ignore case.
    pub fn add(&mut self, candidate: ClientProfile) -> Result<ClientRecord, RegistryError> {
        let mut clients = self.list()?;

        if let Some(reason) = find_duplicate(&clients, &candidate) {
            warn!(email = %candidate.email, ?reason, "duplicate client rejected");
            return Err(RegistryError::Duplicate { reason });
        }

        let last = clients.iter().map(|c| c.id).max().unwrap_or(0);
        let id = last.checked_add(1).ok_or(RegistryError::IdExhausted(last))?;
        let client = ClientRecord::from_profile(id, candidate);
        clients.push(client.clone());
        self.persist(&clients)?;

        debug!(id, name = %client.name, "client added");
        Ok(client)
    }

    /// Shallow-merge `patch` into the client `id`.
    pub fn update(&mut self, id: u64, patch: ClientPatch) -> Result<ClientRecord, RegistryError> {
        let mut clients = self.list()?;
        let client = clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        patch.apply(client);
        let updated = client.clone();
        self.persist(&clients)?;

        debug!(id, "client updated");
        Ok(updated)
    }

    /// Remove the client `id`. The list is written back even when no client
    /// matched.
    pub fn delete(&mut self, id: u64) -> Result<(), RegistryError> {
        let mut clients = self.list()?;
        let before = clients.len();
        clients.retain(|c| c.id != id);
        self.persist(&clients)?;

        debug!(id, removed = before - clients.len(), "client delete");
        Ok(())
    }

    fn read(&self) -> Result<Stored, RegistryError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Stored::Missing);
        };
        match decode_clients(&raw) {
            Ok(records) => Ok(Stored::Records(records)),
            Err(error) => {
                warn!(key = %self.key, %error, "malformed client store, reading as empty");
                Ok(Stored::Malformed)
            }
        }
    }

    fn persist(&mut self, clients: &[ClientRecord]) -> Result<(), RegistryError> {
        let raw = encode_clients(clients)?;
        self.store.set(&self.key, raw)?;
        Ok(())
    }
}

fn find_duplicate(clients: &[ClientRecord], candidate: &ClientProfile) -> Option<DuplicateReason> {
    let email = candidate.email.to_lowercase();
    if clients.iter().any(|c| c.email.to_lowercase() == email) {
        return Some(DuplicateReason::Email);
    }

    if candidate.company_name().is_none() {
        let full_name = candidate.full_name().to_lowercase();
        if clients.iter().any(|c| c.name.to_lowercase() == full_name) {
            return Some(DuplicateReason::Name);
        }
    }

    None
}
