//! CLI command implementations

pub mod clear;
pub mod config;
pub mod delete;
pub mod list;
pub mod store;

pub use clear::execute as clear;
pub use config::execute as config;
pub use delete::execute as delete;
pub use list::execute as list;
pub use store::execute as store;
