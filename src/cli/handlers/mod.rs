//! Command handlers for the CLI.

mod add_user;
mod serve;

// Re-export public items
pub use add_user::handle_add_user;
pub use serve::handle_serve;
