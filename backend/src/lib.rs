pub mod auth;
pub mod error;
pub mod fallback;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod settings;
pub mod state;
pub mod validation;

pub use routes::configure;
pub use state::AppState;
