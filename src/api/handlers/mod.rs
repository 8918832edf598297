//! HTTP request handlers for the JSON endpoints.

pub mod login;
pub mod logout;

pub use login::login_handler;
pub use logout::logout_handler;
