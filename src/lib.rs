//! # hnd
//!
//! Ranked Hacker News stories in the terminal.
//!
//! ## Architecture
//!
//! The whole run is one linear pipeline with a single fan-out/fan-in
//! stage in the middle:
//!
//! ```text
//! CLI → listing → ParallelFetcher (rate-limited workers) → rows → table
//! ```
//!
//! - [`fetcher`]: HTTP access to the story API plus the concurrent,
//!   rate-limited fetch orchestration
//! - [`domain`]: story models, listing modes, and the rank-keyed rows
//! - [`render`]: the terminal table
//!
//! ## Quick Start
//!
//! ```bash
//! # Front page, fifty stories
//! hnd
//!
//! # Stories 11-40 of the "show" listing
//! hnd -m show -s 11 -n 30
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the HTTP fetcher, rate limiter,
/// and parallel fetcher together.
pub mod app;

/// Command-line interface using clap.
///
/// Flag parsing, the cross-flag window validation, and the command body
/// that drives a fetch and prints the table.
pub mod cli;

/// Core domain models.
///
/// - [`Mode`](domain::Mode): story listing category with its ranking cap
/// - [`Story`](domain::Story): fetched item metadata with display fallbacks
/// - [`StoryRow`](domain::StoryRow): one rank slot of the result table
pub mod domain;

/// Story fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait over the story API
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`RateLimiter`](fetcher::rate_limit::RateLimiter): global admission gate
/// - [`ParallelFetcher`](fetcher::parallel::ParallelFetcher): concurrent fetching with semaphore
pub mod fetcher;

/// Terminal table rendering.
pub mod render;
