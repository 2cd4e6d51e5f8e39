pub mod config;
pub mod cookie;
pub mod jwt;
pub mod password;
pub mod permissions;
pub mod refresh;

pub use config::AuthConfig;
pub use jwt::{Claims, JwtService};
pub use password::PasswordService;
