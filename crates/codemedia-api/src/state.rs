//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use codemedia_auth::jwt::{JwtDecoder, JwtEncoder};
use codemedia_auth::password::{PasswordHasher, PasswordValidator};
use codemedia_core::config::AppConfig;
use codemedia_core::traits::ClockSource;
use codemedia_database::{DatabasePool, SnippetStore, UserStore};
use codemedia_service::{CodeGenerator, ShareCodeManager, SnippetService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL pool, absent when running on the in-memory stores
    pub db_pool: Option<DatabasePool>,
    /// JWT token decoder
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Share code manager
    pub share_manager: Arc<ShareCodeManager>,
    /// Snippet service
    pub snippet_service: Arc<SnippetService>,
    /// User account service
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wire services over the given stores, clock, and code generator.
    pub fn new(
        config: AppConfig,
        snippets: Arc<dyn SnippetStore>,
        users: Arc<dyn UserStore>,
        clock: Arc<dyn ClockSource>,
        generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));

        let share_manager = Arc::new(ShareCodeManager::new(
            Arc::clone(&snippets),
            Arc::clone(&users),
            Arc::clone(&clock),
            generator,
            config.share.clone(),
        ));
        let snippet_service = Arc::new(SnippetService::new(
            Arc::clone(&snippets),
            Arc::clone(&users),
            clock,
            &config.share,
        ));
        let user_service = Arc::new(UserService::new(
            users,
            snippets,
            password_hasher,
            password_validator,
            jwt_encoder,
        ));

        Self {
            config: Arc::new(config),
            db_pool: None,
            jwt_decoder,
            share_manager,
            snippet_service,
            user_service,
        }
    }

    /// Attach the PostgreSQL pool for health reporting.
    pub fn with_pool(mut self, pool: DatabasePool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
