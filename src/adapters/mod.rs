// Adapters layer: concrete implementations of the domain ports (http, storage, notification).

pub mod http;
pub mod notifier;
pub mod storage;

pub use http::HttpCatalogApi;
pub use notifier::ConsoleNotifier;
pub use storage::{LocalStorage, MemoryStorage};
