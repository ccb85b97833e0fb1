pub mod discovery;
pub mod http;
pub mod processor;
pub mod scoring;
pub mod site;
pub mod validator;

pub use discovery::JobsPageDiscovery;
pub use http::{FetchOutcome, PageFetcher};
