pub mod config;
pub mod routes;
pub mod server;

mod error;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::AppState;
pub use server::{app, open_catalog, start_server};
