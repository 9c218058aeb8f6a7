//! Persistence: key-value stores, the client registry, and the artisan
//! configuration.
//!
//! Nothing here is global. Build a store once at startup and hand it (or a
//! `&mut` to it) to the registry and the config helpers.
//!
//! # Example
//!
//! ```
//! use artisanflow::core::ClientProfile;
//! use artisanflow::registry::*;
//!
//! let mut store = MemoryStore::new();
//! let mut clients = ClientRegistry::new(&mut store);
//! clients.initialize().unwrap();
//!
//! let added = clients
//!     .add(ClientProfile::new("Luc", "Petit", "luc@petit.fr"))
//!     .unwrap();
//! assert_eq!(added.id, 4);
//!
//! let again = clients.add(ClientProfile::new("Lucas", "Petit", "LUC@petit.fr"));
//! assert!(again.unwrap_err().is_duplicate());
//! ```

mod clients;
mod settings;
mod store;

pub use clients::{
    CLIENTS_KEY, ClientRegistry, DuplicateReason, RegistryError, decode_clients, default_clients,
    encode_clients,
};
pub use settings::{CONFIG_KEY, artisan_currency, load_config, save_config};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
