// Infrastructure modules
pub mod api_client;     // Remote AnimalDex API access
#[cfg(any(test, feature = "test-util"))]
pub mod memory_api;     // In-memory catalog implementing the same trait
pub mod session_store;  // Live page views

pub use api_client::{AnimalDexApi, HttpApiClient};
#[cfg(any(test, feature = "test-util"))]
pub use memory_api::InMemoryApi;
pub use session_store::SessionStore;
