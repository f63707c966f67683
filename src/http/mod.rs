//! HTTP protocol layer module
//!
//! Status-code response builders, MIME detection, cache revalidation and
//! Range resolution, decoupled from the message API business logic.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used builders
pub use range::resolve_range;
pub use response::{
    apply_cors, build_304_response, build_404_response, build_405_response, build_413_response,
    build_416_response, build_preflight_response,
};
