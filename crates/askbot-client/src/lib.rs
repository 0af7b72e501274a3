pub mod config;
pub mod error;
pub mod http;
pub mod traits;

pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
pub use error::TransportFailure;
pub use http::HttpQaClient;
pub use traits::{AskRequest, AskResponse, QaClient};
