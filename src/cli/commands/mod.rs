pub mod config;
pub mod create;

pub use config::run_config;
pub use create::run_create;
