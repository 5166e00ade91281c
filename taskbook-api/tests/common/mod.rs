/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup and migrations
/// - Test user creation
/// - JWT token generation
/// - API client helpers

use sqlx::PgPool;
use taskbook_api::app::{build_router, AppState};
use taskbook_api::config::Config;
use taskbook_shared::auth::jwt::{create_token, Claims, TokenType};
use taskbook_shared::models::user::{CreateUser, User};
use uuid::Uuid;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub config: Config,
    pub user: User,
    pub jwt_token: String,
}

impl TestContext {
    /// Creates a new test context with a fresh user
    pub async fn new() -> anyhow::Result<Self> {
        // Load test configuration
        let config = Config::from_env()?;

        // Connect to database, creating it on a fresh checkout
        taskbook_shared::db::migrations::ensure_database_exists(&config.database.url).await?;
        let db = PgPool::connect(&config.database.url).await?;

        // Run migrations (path relative to Cargo.toml, not this file)
        sqlx::migrate!("../migrations").run(&db).await?;

        // Create test user
        let user = User::create(
            &db,
            CreateUser {
                email: format!("test-{}@example.com", Uuid::new_v4()),
                password_hash: "test_hash".to_string(), // Not used by token auth
                name: Some("Test User".to_string()),
            },
        )
        .await?;

        // Generate JWT token
        let claims = Claims::new(user.id, TokenType::Access);
        let jwt_token = create_token(&claims, &config.jwt.secret)?;

        // Build app
        let state = AppState::new(db.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext {
            db,
            app,
            config,
            user,
            jwt_token,
        })
    }

    /// Returns authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.jwt_token)
    }

    /// Creates a second user with their own token, for ownership tests
    pub async fn other_user(&self) -> anyhow::Result<(User, String)> {
        let user = User::create(
            &self.db,
            CreateUser {
                email: format!("other-{}@example.com", Uuid::new_v4()),
                password_hash: "test_hash".to_string(),
                name: Some("Other User".to_string()),
            },
        )
        .await?;

        let claims = Claims::new(user.id, TokenType::Access);
        let token = create_token(&claims, &self.config.jwt.secret)?;

        Ok((user, token))
    }

    /// Cleans up test data
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        // Deleting the user cascades to their tasks
        User::delete(&self.db, self.user.id).await?;
        Ok(())
    }
}

/// Helper to create a task owned by the context's user
pub async fn create_test_task(
    ctx: &TestContext,
    title: &str,
    description: Option<&str>,
) -> anyhow::Result<Uuid> {
    use taskbook_shared::models::task::{CreateTask, Task};

    let task = Task::create(
        &ctx.db,
        CreateTask {
            user_id: ctx.user.id,
            title: title.to_string(),
            description: description.map(str::to_string),
            completed: false,
        },
    )
    .await?;

    Ok(task.id)
}
