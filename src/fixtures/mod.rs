//! Test fixtures for analyzer, generator and command tests.
//!
//! Fixtures are record descriptions loaded at compile time using `include_str!`.
//!
//! ## Available Fixtures
//!
//! - [`USERS`] - single `users` table with a unique email
//! - [`BLOG`] - array of two tables, one with a composite key
//! - [`UNKNOWN_TYPE`] - a description naming a type tag that does not exist

/// Single description of a `users` table.
///
/// Contains:
/// - `id` UUID primary key, `email` String, nullable `bio` Text
/// - a `unique` constraint on `email` with no extras
pub const USERS: &str = include_str!("users.json");

/// Array of two descriptions: `authors` and `posts`.
///
/// `posts` uses an explicit composite key `(author_id, slug)` and every
/// logical type except UUID and Text appears across the two tables.
pub const BLOG: &str = include_str!("blog.json");

/// Description of an `events` table whose `payload` field has type `Json`.
pub const UNKNOWN_TYPE: &str = include_str!("unknown_type.json");
