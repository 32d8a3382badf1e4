pub mod error;
pub mod helpers;
pub mod latest_message;
pub mod store;
