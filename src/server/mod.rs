//! HTTP front end serving the checker's latest results as HTML and JSON.

pub mod handlers;
pub mod page;
pub mod types;

pub use handlers::{router, serve};
pub use types::AppState;
