pub mod connection;
pub mod loader;
pub mod schema;

pub use connection::{resolve_connection, ConnectionOverrides};
pub use loader::ConfigLoader;
pub use schema::Config;
