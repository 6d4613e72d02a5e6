//! Seed data generation for roster.
//!
//! This crate provides tools for generating Japanese-locale user records and
//! loading them into the directory database, to support manual verification
//! and demo environments.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::default();
//! let mut rng = rand::thread_rng();
//!
//! let users = UserGenerator::new().generate_batch(config.user_count, &mut rng);
//! Seeder::new(pool)
//!     .with_batch_size(config.batch_size)
//!     .reseed(&users)
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::UserGenerator;
}
