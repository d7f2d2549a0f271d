use actix_web::{middleware::Logger, web, App, HttpServer};
use backend::settings::Settings;
use backend::{configure, AppState};
use dotenv::dotenv;
use std::sync::Arc;
use store::{MemoryStore, Repository, Store, UnavailableStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();
    let store = open_store(&settings).await;
    let bind_addr = settings.bind_addr.clone();
    let state = web::Data::new(AppState::new(store, settings));

    log::info!("Listening on {}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}

/// Any failure here degrades the service to fallback data instead of exiting.
async fn open_store(settings: &Settings) -> Arc<dyn Repository> {
    let Some(database_url) = settings.database_url.as_deref() else {
        log::warn!("DATABASE_URL not set, serving fallback data only");
        return Arc::new(UnavailableStore);
    };

    if database_url == "memory" {
        log::warn!("Using in-memory store, nothing will be persisted");
        return Arc::new(MemoryStore::new());
    }

    // Only a malformed URL fails here; an unreachable server degrades per request.
    let store = match Store::connect_lazy(database_url) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Invalid DATABASE_URL, serving fallback data: {}", e);
            return Arc::new(UnavailableStore);
        }
    };

    if let Err(e) = store.migrate().await {
        log::warn!("Failed to run migrations, will retry on next start: {}", e);
    }
    Arc::new(store)
}
