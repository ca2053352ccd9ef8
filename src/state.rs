use crate::flash::FlashKey;
use crate::storage::LinkStore;

#[derive(Clone)]
pub struct AppState {
    pub store: LinkStore,
    /// Prefix of issued short URLs, without a trailing slash.
    pub base_url: String,
    pub flash_key: FlashKey,
}
