//! SQLite repository implementation.
//!
//! Implements the repository traits from `holocron_core::storage` using SQLite.
//! Every operation opens its own connection and drops it when done; nothing
//! is cached between requests.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use holocron_core::profile::{CreateUserRequest, Favorites, Theme, User, UserChange, SEED_THEMES};
use holocron_core::storage::{
    FavoritesRepository, RepositoryError, Result, ThemeRepository, UserRepository,
};

use super::conversions::{row_to_favorites, row_to_theme, row_to_user};
use super::error::{map_open_error, map_tokio_rusqlite_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds only the database path; each operation opens its own connection.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    path: PathBuf,
}

impl SqliteRepository {
    /// Creates a repository for the database file at `path`.
    ///
    /// Nothing is opened until the first operation. Call
    /// [`SqliteRepository::bootstrap`] once before serving requests.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens a fresh connection for a single unit of work.
    ///
    /// The file is created if it doesn't exist. The connection is closed when
    /// the returned handle is dropped.
    async fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(self.path.clone())
            .await
            .map_err(map_open_error)?;

        conn.call(|conn| {
            conn.execute_batch(schema::CONNECTION_PRAGMAS)
                .map_err(wrap_err)
        })
        .await
        .map_err(map_open_error)?;

        Ok(conn)
    }

    /// Prepare the database for serving.
    ///
    /// With `reset` set, all tables are dropped first so the process starts
    /// from an empty user table. Otherwise existing data is kept. Either way
    /// the tables exist and the seed themes are present afterwards.
    ///
    /// A kept database whose `User` table predates the unique username
    /// constraint is served as is, with a warning.
    pub async fn bootstrap(&self, reset: bool) -> Result<()> {
        let conn = self.connect().await?;

        let username_unique = conn
            .call(move |conn| {
                if reset {
                    conn.execute_batch(schema::DROP_TABLES).map_err(wrap_err)?;
                }
                conn.execute_batch(schema::CREATE_TABLES)
                    .map_err(wrap_err)?;

                let mut stmt = conn.prepare(schema::SEED_THEME).map_err(wrap_err)?;
                for (id, first, second) in SEED_THEMES {
                    stmt.execute(rusqlite::params![id, first, second])
                        .map_err(wrap_err)?;
                }
                username_is_unique(conn).map_err(wrap_err)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if !username_unique {
            tracing::warn!(
                path = %self.path.display(),
                "User.username has no unique constraint; duplicate usernames will not be rejected"
            );
        }

        tracing::info!(path = %self.path.display(), reset, "Database bootstrapped");
        Ok(())
    }
}

fn username_is_unique(conn: &rusqlite::Connection) -> rusqlite::Result<bool> {
    conn.query_row(schema::COUNT_UNIQUE_USERNAME_INDEXES, [], |row| {
        row.get::<_, i64>(0)
    })
    .map(|count| count > 0)
}

// ============================================================================
// ThemeRepository implementation
// ============================================================================

#[async_trait]
impl ThemeRepository for SqliteRepository {
    async fn find_theme(&self, id: i64) -> Result<Theme> {
        let conn = self.connect().await?;

        conn.call(move |conn| {
            conn.query_row(schema::SELECT_THEME_BY_ID, [id], row_to_theme)
                .map_err(wrap_err)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Theme", id.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn find_user(&self, username: &str) -> Result<User> {
        let conn = self.connect().await?;
        let username_str = username.to_string();

        conn.call(move |conn| {
            conn.query_row(
                schema::SELECT_USER_BY_USERNAME,
                [&username_str],
                row_to_user,
            )
            .map_err(wrap_err)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "User", username))
    }

    async fn list_user_ids(&self) -> Result<Vec<i64>> {
        let conn = self.connect().await?;

        conn.call(|conn| {
            let mut stmt = conn.prepare(schema::SELECT_USER_IDS).map_err(wrap_err)?;
            let rows = stmt
                .query_map([], |row| row.get::<_, i64>("id"))
                .map_err(wrap_err)?;

            let mut ids = Vec::new();
            for row_result in rows {
                ids.push(row_result.map_err(wrap_err)?);
            }
            Ok(ids)
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        request.validate()?;

        let conn = self.connect().await?;
        let username = request.username.clone();
        let password = request.password.clone();

        // The UNIQUE constraint on username rejects duplicates, so there is
        // no read-before-insert window.
        conn.call(move |conn| {
            let tx = conn.transaction().map_err(wrap_err)?;
            tx.execute(schema::INSERT_USER, rusqlite::params![username, password])
                .map_err(wrap_err)?;
            let id = tx.last_insert_rowid();
            tx.execute(schema::INSERT_EMPTY_FAVORITES, [id])
                .map_err(wrap_err)?;
            tx.commit().map_err(wrap_err)?;

            Ok(User {
                id,
                username,
                password,
                tid: None,
            })
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "User", request.username.as_str()))
    }

    async fn update_user(&self, mut user: User, change: UserChange) -> Result<User> {
        let conn = self.connect().await?;
        let id = user.id;
        let statement = change.clone();

        conn.call(move |conn| {
            let result = match statement {
                UserChange::Theme(tid) => {
                    conn.execute(schema::UPDATE_USER_THEME, rusqlite::params![id, tid])
                }
                UserChange::Password(password) => conn.execute(
                    schema::UPDATE_USER_PASSWORD,
                    rusqlite::params![id, password],
                ),
            };
            result.map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "User", user.username.as_str()))?;

        change.apply_to(&mut user);
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        let conn = self.connect().await?;

        conn.call(move |conn| {
            conn.execute(schema::DELETE_USER, [id]).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "User", id.to_string()))
    }
}

// ============================================================================
// FavoritesRepository implementation
// ============================================================================

#[async_trait]
impl FavoritesRepository for SqliteRepository {
    async fn find_favorites(&self, id: i64) -> Result<Favorites> {
        let conn = self.connect().await?;

        conn.call(move |conn| {
            conn.query_row(schema::SELECT_FAVORITES_BY_ID, [id], row_to_favorites)
                .map_err(wrap_err)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Favorites", id.to_string()))
    }

    async fn update_favorites(&self, favorites: &Favorites) -> Result<()> {
        let conn = self.connect().await?;
        let record = favorites.clone();

        conn.call(move |conn| {
            conn.execute(
                schema::UPDATE_FAVORITES,
                rusqlite::params![
                    record.id,
                    record.character,
                    record.film,
                    record.starship,
                    record.vehicle,
                    record.species,
                    record.planet
                ],
            )
            .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Favorites", favorites.id.to_string()))
    }
}
