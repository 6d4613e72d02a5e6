//! Database integration for seed data.
//!
//! The [`Seeder`] replaces the contents of the `users` table with generated
//! records, with support for batched inserts and progress reporting.

mod seeder;

pub use seeder::{SeedError, Seeder};
