#![no_main]

use artisanflow::core::{ClientPatch, ClientProfile};
use artisanflow::registry::{ClientRegistry, KeyValueStore, MemoryStore, decode_clients};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let _ = decode_clients(s);

        let mut store = MemoryStore::new();
        if store.set("af_clients", s.to_string()).is_ok() {
            let mut reg = ClientRegistry::new(store);
            let ids: Vec<u64> = reg
                .list()
                .map(|clients| clients.iter().map(|c| c.id).collect())
                .unwrap_or_default();

            let _ = reg.add(ClientProfile::new("Fuzz", "Client", "fuzz@example.com"));
            for id in ids.iter().take(4) {
                let _ = reg.update(*id, ClientPatch::default().phone("0000"));
                let _ = reg.delete(*id);
            }
            let _ = reg.update(u64::MAX, ClientPatch::default().name("none"));
            let _ = reg.delete(u64::MAX);
            let _ = reg.initialize();
            let _ = reg.list();
        }
    }
});
