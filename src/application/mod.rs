//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod session;
pub mod transfer;

pub use manage_config::ConfigService;
pub use session::Session;
pub use transfer::{export_to_file, import_from_file, ImportOutcome};
