//! Transport collaborator for aero-request
//!
//! The aggregator never parses HTTP. It reads five already-decoded sources
//! through `ServerRequest`:
//! - query parameters
//! - parsed body (coerced to a map)
//! - cookies
//! - uploaded files
//! - host attributes

mod memory;
mod request;
mod upload;

pub use memory::MemoryRequest;
pub use request::{ParsedBody, ServerRequest};
pub use upload::{UploadStatus, UploadedFile};
