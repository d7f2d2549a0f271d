use rand::Rng;
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@donations.local";
const DEFAULT_ADMIN_PASSWORD: &str = "change-me-now";

/// Runtime settings read from the environment (and `.env` via dotenv).
#[derive(Clone)]
pub struct Settings {
    /// Unset: every endpoint serves its fallback. `memory`: in-process store.
    pub database_url: Option<String>,
    pub public_base_url: Option<String>,
    pub bind_addr: String,
    pub session_secret: Vec<u8>,
    pub admin_email: String,
    pub admin_password: String,
    pub cookie_secure: bool,
    pub bcrypt_cost: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: None,
            public_base_url: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            session_secret: random_secret(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            cookie_secure: false,
            bcrypt_cost: 12,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let defaults = Settings::default();

        let session_secret = match var("SESSION_SECRET") {
            Some(secret) => secret.into_bytes(),
            None => {
                log::warn!("SESSION_SECRET not set, sessions will not survive a restart");
                defaults.session_secret
            }
        };

        let admin_password = var("ADMIN_PASSWORD").unwrap_or_else(|| {
            log::warn!("ADMIN_PASSWORD not set, seeding uses the built-in default");
            defaults.admin_password
        });

        Self {
            database_url: var("DATABASE_URL"),
            public_base_url: var("PUBLIC_BASE_URL"),
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            session_secret,
            admin_email: var("ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_password,
            cookie_secure: var("COOKIE_SECURE").is_some_and(|v| parse_flag(&v)),
            bcrypt_cost: var("BCRYPT_COST")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bcrypt_cost),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn random_secret() -> Vec<u8> {
    let mut secret = [0u8; 32];
    rand::rng().fill(&mut secret);
    secret.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn default_secrets_differ_per_instance() {
        let a = Settings::default();
        let b = Settings::default();
        assert_eq!(a.session_secret.len(), 32);
        assert_ne!(a.session_secret, b.session_secret);
    }
}
