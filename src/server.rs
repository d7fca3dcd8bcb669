//! Wiring of adapters, handlers and the HTTP router.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use thiserror::Error;

use crate::adapters::http::{api_router, ChatHandlers, DashboardHandlers, HttpSettings};
use crate::adapters::{
    postgres, HttpTranslator, HttpTranslatorConfig, InMemoryBookingRepository, InMemoryChatLog,
    InMemorySessionStore, PassthroughTranslator, PostgresBookingRepository,
    PostgresChatLogRepository, RedisSessionStore,
};
use crate::application::{
    AvailabilityChecker, DialogueEngine, GetAnalyticsHandler, GetChatSessionHandler,
    SendChatMessageHandler,
};
use crate::config::{AppConfig, ConfigError};
use crate::domain::conversation::ReplyPicker;
use crate::domain::session::DEFAULT_SESSION_TTL_SECS;
use crate::ports::{
    AnalyticsReader, BookingRepository, ChatLogRepository, SessionStore, SessionStoreError,
    TranslationError, Translator,
};

/// Failures while starting the service.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to apply migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to open session store: {0}")]
    SessionStore(#[from] SessionStoreError),

    #[error("Failed to create translator: {0}")]
    Translation(#[from] TranslationError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// The port implementations the service runs on.
#[derive(Clone)]
pub struct Backends {
    pub bookings: Arc<dyn BookingRepository>,
    pub analytics: Arc<dyn AnalyticsReader>,
    pub chat_log: Arc<dyn ChatLogRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub translator: Arc<dyn Translator>,
}

impl Backends {
    /// Everything in process memory, no translation.
    pub fn in_memory() -> Self {
        let bookings = Arc::new(InMemoryBookingRepository::new());
        Self {
            bookings: bookings.clone(),
            analytics: bookings,
            chat_log: Arc::new(InMemoryChatLog::new()),
            sessions: Arc::new(InMemorySessionStore::with_ttl(Duration::from_secs(
                DEFAULT_SESSION_TTL_SECS,
            ))),
            translator: Arc::new(PassthroughTranslator),
        }
    }

    /// Connects whatever `config` enables and falls back to memory for the rest.
    pub async fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let mut backends = Self::in_memory();

        match &config.database {
            Some(database) => {
                tracing::info!(url = %database.redacted_url(), "Connecting to PostgreSQL");
                let pool = postgres::connect(database).await?;
                if database.run_migrations {
                    postgres::run_migrations(&pool).await?;
                    tracing::info!("Database migrations applied");
                }
                let bookings = Arc::new(PostgresBookingRepository::new(pool.clone()));
                backends.bookings = bookings.clone();
                backends.analytics = bookings;
                backends.chat_log = Arc::new(PostgresChatLogRepository::new(pool));
            }
            None => tracing::warn!("No database configured, bookings are kept in memory"),
        }

        match &config.redis {
            Some(redis) => {
                let store = RedisSessionStore::connect(&redis.url, redis.session_ttl_secs).await?;
                tracing::info!(ttl_secs = store.ttl_secs(), "Using Redis session store");
                backends.sessions = Arc::new(store);
            }
            None => {
                let ttl = config.session_ttl();
                tracing::info!(
                    ttl_secs = ttl.as_secs(),
                    "No Redis configured, sessions are kept in memory"
                );
                backends.sessions = Arc::new(InMemorySessionStore::with_ttl(ttl));
            }
        }

        if config.translation.enabled {
            let mut translator_config = HttpTranslatorConfig::new(&config.translation.base_url)
                .with_timeout(config.translation.timeout());
            if let Some(key) = &config.translation.api_key {
                use secrecy::ExposeSecret;
                translator_config = translator_config.with_api_key(key.expose_secret().as_str());
            }
            backends.translator = Arc::new(HttpTranslator::new(translator_config)?);
            tracing::info!(base_url = %config.translation.base_url, "Translation enabled");
        }

        Ok(backends)
    }
}

/// Builds the HTTP application on top of `backends`.
pub fn build_router(
    config: &AppConfig,
    backends: Backends,
    replies: Arc<dyn ReplyPicker>,
) -> Router {
    let availability =
        AvailabilityChecker::new(backends.bookings.clone(), config.booking.daily_capacity);
    let engine = DialogueEngine::new(backends.bookings, availability, replies);

    let send_handler = Arc::new(SendChatMessageHandler::new(
        engine,
        backends.sessions.clone(),
        backends.chat_log,
        backends.translator,
        config.booking.message_limits(),
    ));
    let get_handler = Arc::new(GetChatSessionHandler::new(backends.sessions));
    let analytics_handler = Arc::new(GetAnalyticsHandler::new(backends.analytics));

    api_router(
        ChatHandlers::new(send_handler, get_handler),
        DashboardHandlers::new(analytics_handler),
        &HttpSettings::from(&config.server),
    )
}
