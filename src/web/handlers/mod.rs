//! Request handlers for the web UI.

mod delete;
mod detail;
mod edit;
mod home;
mod list;
mod users;

// Re-export public items
pub use delete::{handle_delete, handle_delete_confirm};
pub use detail::handle_detail;
pub use edit::{handle_add, handle_add_form, handle_edit, handle_edit_form};
pub use home::handle_home;
pub use list::{handle_list, handle_success};
pub use users::{handle_login, handle_login_form, handle_logout, handle_signup, handle_signup_form};
