//! Platform-free client logic for the MatchUp browser front end.
//!
//! Everything the web shell decides without touching the DOM lives here:
//! decoding the like/pass endpoint's JSON payload, classifying the outcome,
//! and resolving query-string driven navigation targets. The crate has no
//! `web-sys` dependency so all of it runs under plain `cargo test` on the
//! host.

pub mod interaction;
pub mod routing;
