use tracing::warn;

use super::store::KeyValueStore;
use crate::core::{ArtisanConfig, ArtisanError, Currency, DEFAULT_COUNTRY, currency_for_country};

/// Store key holding the artisan configuration.
pub const CONFIG_KEY: &str = "af_config_artisan";

/// Load the artisan configuration. Absent or malformed values give `None`.
pub fn load_config<S: KeyValueStore>(store: &S) -> Result<Option<ArtisanConfig>, ArtisanError> {
    let raw = store
        .get(CONFIG_KEY)
        .map_err(|e| ArtisanError::Storage(e.to_string()))?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(config) => Ok(Some(config)),
        Err(error) => {
            warn!(key = CONFIG_KEY, %error, "malformed artisan config ignored");
            Ok(None)
        }
    }
}

/// Persist the artisan configuration.
///
/// A configuration marked `completed` must pass [`ArtisanConfig::validate`];
/// otherwise nothing is written. Drafts are saved as is.
pub fn save_config<S: KeyValueStore>(
    store: &mut S,
    config: &ArtisanConfig,
) -> Result<(), ArtisanError> {
    if config.completed {
        config.ensure_valid()?;
    }
    let raw =
        serde_json::to_string(config).map_err(|e| ArtisanError::Serialization(e.to_string()))?;
    store
        .set(CONFIG_KEY, raw)
        .map_err(|e| ArtisanError::Storage(e.to_string()))
}

/// Currency of the configured artisan, EUR until a configuration exists.
pub fn artisan_currency<S: KeyValueStore>(store: &S) -> Result<&'static Currency, ArtisanError> {
    Ok(match load_config(store)? {
        Some(config) => config.currency(),
        None => currency_for_country(DEFAULT_COUNTRY),
    })
}
