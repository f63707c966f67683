// API module entry
// JSON endpoints for receiving text and listing stored messages

mod handlers;
mod response;
mod types;

pub use handlers::{handle_get_messages, handle_receive_text};
pub use response::not_found;
