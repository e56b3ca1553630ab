//! Static site content: navigation, contact card, configuration.

pub mod config;
pub mod contact;
pub mod routes;

pub use config::{ConfigError, ConfigResult, DEFAULT_PORT, SiteConfig};
pub use contact::ContactInfo;
pub use routes::Route;
