//! Request handler module
//!
//! Routing dispatch for the message API, the landing page, and the
//! static clip files.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
