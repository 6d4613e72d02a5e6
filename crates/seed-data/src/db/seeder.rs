//! Database seeding utilities.

use roster::models::User;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Database seeder that replaces the user directory contents.
pub struct Seeder {
    pool: PgPool,
    batch_size: usize,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            batch_size: 50,
        }
    }

    /// Sets the batch size for bulk operations.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Replaces the entire `users` table with the given records.
    ///
    /// The truncate and the inserts run in one transaction: a failed run
    /// rolls back to the previous contents, and readers never observe a
    /// partially seeded table. The first database error aborts the run.
    pub async fn reseed(&self, users: &[User]) -> Result<(), SeedError> {
        info!("Reseeding {} users...", users.len());

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM users").execute(&mut *tx).await?;

        let mut staged = 0;
        for chunk in users.chunks(self.batch_size) {
            for user in chunk {
                sqlx::query(
                    r#"
                    INSERT INTO users (id, name, email, address, created_at)
                    VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(user.id)
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.address)
                .bind(user.created_at)
                .execute(&mut *tx)
                .await?;
            }

            staged += chunk.len();
            info!("  Staged {}/{} users", staged, users.len());
        }

        tx.commit().await?;

        info!("Seeded {} users", users.len());
        Ok(())
    }

    /// Returns the current number of rows in `users`.
    pub async fn count_users(&self) -> Result<i64, SeedError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
