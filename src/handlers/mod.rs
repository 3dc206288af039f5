pub mod oauth;
pub mod status_handler;

pub use status_handler::status_handler;
