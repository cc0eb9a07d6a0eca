use actix_session::{SessionMiddleware, storage::RedisSessionStore};
use actix_web::{App, HttpServer, cookie::Key, dev::Server, middleware::from_fn, web::Data};
use secrecy::{ExposeSecret, SecretString};
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::authentication::load_current_user;
use crate::configuration::{DatabaseSettings, Settings};
use crate::history::{DayBoundary, HistoryStore, PgHistoryStore};
use crate::pagination::PageOption;
use crate::routes;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    #[allow(clippy::missing_errors_doc)]
    /// # Panics
    /// if the configured page sizes contradict each other
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&configuration.database);
        let store: Arc<dyn HistoryStore> = Arc::new(PgHistoryStore::new(connection_pool));

        let days = configuration.history.day_boundary()?;
        let page_option = configuration.history.page_option();
        tracing::info!(
            history = ?configuration.history,
            "Loaded history settings"
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port,
        );

        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            store,
            days,
            page_option,
            configuration.application.hmac_secret,
            configuration.redis_uri,
        )
        .await?;

        Ok(Self { port, server })
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    #[allow(clippy::missing_errors_doc)]
    // only return when the application is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

async fn run(
    listener: TcpListener,
    store: Arc<dyn HistoryStore>,
    days: DayBoundary,
    page_option: PageOption,
    hmac_secret: SecretString,
    redis_uri: SecretString,
) -> Result<Server, anyhow::Error> {
    let store: Data<dyn HistoryStore> = Data::from(store);
    let days = Data::new(days);
    let page_option = Data::new(page_option);
    let secret_key = Key::from(hmac_secret.expose_secret().as_bytes());
    let redis_store = RedisSessionStore::new(redis_uri.expose_secret()).await?;
    let server = HttpServer::new(move || {
        App::new()
            // runs after the session middleware below has loaded the session
            .wrap(from_fn(load_current_user))
            .wrap(SessionMiddleware::new(
                redis_store.clone(),
                secret_key.clone(),
            ))
            .wrap(TracingLogger::default())
            .configure(routes::configure)
            .app_data(store.clone())
            .app_data(days.clone())
            .app_data(page_option.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

#[must_use]
pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(configuration.connect_options())
}
