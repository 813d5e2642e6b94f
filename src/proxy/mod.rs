pub mod upstream;

pub use upstream::{UpstreamClient, UpstreamError, UpstreamResponse};
