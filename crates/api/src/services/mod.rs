pub mod token_cleanup_service;

pub use token_cleanup_service::{spawn_token_cleanup_service, TokenCleanupService};
