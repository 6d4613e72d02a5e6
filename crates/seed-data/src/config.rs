//! Configuration types for seed data generation.

use serde::{Deserialize, Serialize};

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of users to generate.
    pub user_count: usize,

    /// Batch size for database insertions.
    pub batch_size: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: 1000,
            batch_size: 50,
        }
    }
}
