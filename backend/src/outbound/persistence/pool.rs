//! `bb8` connection pool over `diesel-async` PostgreSQL connections.
//!
//! Checkout never blocks the runtime; it waits up to the configured timeout
//! and reports failures as [`PoolError`].

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Errors raised while building or using the pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available in time, or opening one failed.
    #[error("failed to get connection from pool: {message}")]
    Checkout {
        /// Underlying cause.
        message: String,
    },
    /// The pool could not be created.
    #[error("failed to build connection pool: {message}")]
    Build {
        /// Underlying cause.
        message: String,
    },
}

impl PoolError {
    /// Underlying cause, whichever variant this is.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

/// Pool sizing and timeouts.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use feedback_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/feedback")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Defaults: ten connections, two kept idle, thirty second checkout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(2),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of open connections.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set how many idle connections to keep warm.
    #[must_use]
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set how long checkout may wait.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Connection string.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Maximum number of open connections.
    #[must_use]
    pub const fn max_size(&self) -> u32 {
        self.max_size
    }

    fn effective_min_idle(&self) -> Result<Option<u32>, PoolError> {
        if self.max_size == 0 {
            return Err(PoolError::Build {
                message: "pool max size must be at least 1".to_owned(),
            });
        }
        Ok(self.min_idle.map(|idle| idle.min(self.max_size)))
    }
}

/// Shared handle to the PostgreSQL pool. Cloning is cheap.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool described by `config`.
    ///
    /// `min_idle` is capped at `max_size`.
    ///
    /// # Errors
    /// Returns [`PoolError::Build`] when `max_size` is zero or the pool cannot
    /// be created.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let min_idle = config.effective_min_idle()?;
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::Build {
                message: err.to_string(),
            })?;
        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// Returns [`PoolError::Checkout`] when none is available in time.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner.get().await.map_err(|err| PoolError::Checkout {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_match_documented_values() {
        let config = PoolConfig::new("postgres://localhost/feedback");

        assert_eq!(config.database_url(), "postgres://localhost/feedback");
        assert_eq!(config.max_size(), 10);
        assert_eq!(config.min_idle, Some(2));
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
    }

    #[rstest]
    fn builders_override_defaults() {
        let config = PoolConfig::new("postgres://localhost/feedback")
            .with_max_size(3)
            .with_min_idle(None)
            .with_connection_timeout(Duration::from_secs(1));

        assert_eq!(config.max_size(), 3);
        assert_eq!(config.min_idle, None);
        assert_eq!(config.connection_timeout, Duration::from_secs(1));
    }

    #[rstest]
    #[case(1, Some(2), Some(1))]
    #[case(4, Some(2), Some(2))]
    #[case(1, None, None)]
    fn min_idle_never_exceeds_max_size(
        #[case] max_size: u32,
        #[case] min_idle: Option<u32>,
        #[case] expected: Option<u32>,
    ) {
        let config = PoolConfig::new("postgres://localhost/feedback")
            .with_max_size(max_size)
            .with_min_idle(min_idle);

        assert_eq!(config.effective_min_idle(), Ok(expected));
    }

    #[tokio::test]
    async fn zero_max_size_is_a_build_error() {
        let config = PoolConfig::new("postgres://127.0.0.1:1/feedback").with_max_size(0);

        let Err(err) = DbPool::new(config).await else {
            panic!("zero-sized pool must be rejected");
        };
        assert_eq!(
            err,
            PoolError::Build {
                message: "pool max size must be at least 1".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn single_connection_pool_reports_unreachable_database() {
        let config = PoolConfig::new("postgres://127.0.0.1:1/feedback")
            .with_max_size(1)
            .with_connection_timeout(Duration::from_millis(500));

        let result = DbPool::new(config).await;

        assert!(matches!(result, Err(PoolError::Build { .. })));
    }

    #[rstest]
    #[case(PoolError::Checkout { message: "timed out".to_owned() }, "failed to get connection from pool: timed out")]
    #[case(PoolError::Build { message: "bad url".to_owned() }, "failed to build connection pool: bad url")]
    fn errors_render_cause(#[case] error: PoolError, #[case] rendered: &str) {
        assert_eq!(error.to_string(), rendered);
        assert!(rendered.ends_with(error.message()));
    }
}
