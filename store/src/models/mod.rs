pub mod donation;
pub mod project_config;
pub mod user;
