//! Storefront - a terminal front-end for the storefront engine.
//!
//! Reads one command per line, forwards intents to the engine's
//! [`Shop`](storefront_engine::Shop), and renders the resulting snapshots as
//! a product grid with detail and cart overlays.

pub mod command;
pub mod config;
pub mod error;
pub mod receipt;
pub mod render;
pub mod session;

pub use command::Command;
pub use config::{Config, ConfigError, OutputFormat};
pub use error::{AppError, Result};
pub use receipt::Receipt;
pub use render::Renderer;
pub use session::{Reply, Session};
