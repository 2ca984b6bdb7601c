// Adapters layer: concrete implementations of the collaborator ports
// (hosted auth over HTTP, file-backed featured store and catalog).

pub mod http;
pub mod local;

pub use http::HttpIdentityProvider;
pub use local::{JsonCatalog, JsonStore};
