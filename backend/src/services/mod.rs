pub mod accounts;
pub mod config;
pub mod ledger;
pub mod setup;

/// Where a read result came from. Both variants are served with status 200;
/// the distinction is surfaced through the `X-Data-Source` header.
#[derive(Debug, Clone, PartialEq)]
pub enum Served<T> {
    Live(T),
    Fallback(T),
}

impl<T> Served<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Served::Fallback(_))
    }

    pub fn source(&self) -> &'static str {
        match self {
            Served::Live(_) => "live",
            Served::Fallback(_) => "fallback",
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Served::Live(value) | Served::Fallback(value) => value,
        }
    }

    pub fn as_inner(&self) -> &T {
        match self {
            Served::Live(value) | Served::Fallback(value) => value,
        }
    }
}
