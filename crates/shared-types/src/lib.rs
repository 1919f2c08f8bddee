pub mod error;
pub mod config;

// Operators, sessions and access control
pub mod access;
pub mod session;
pub mod user;

// Dashboard domain
pub mod admin;
pub mod citizen;
pub mod dashboard;
pub mod filter;
pub mod heatmap;
pub mod report;
pub mod seed;
pub mod settings;

pub use error::*;
pub use config::*;

pub use access::*;
pub use session::*;
pub use user::*;

pub use admin::*;
pub use citizen::*;
pub use dashboard::*;
pub use filter::*;
pub use heatmap::*;
pub use report::*;
pub use settings::*;
