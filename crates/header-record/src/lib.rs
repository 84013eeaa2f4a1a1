//! A three-field header record built from literals and printed once.
//!
//! The [`Header`] record carries a text value, a signed integer and an
//! unsigned integer. [`Header::sample()`] fills it with the fixed values
//! `"foo"`, `-2593` and `29384`; [`render::emit`] writes one rendering of it
//! to any [`std::io::Write`] sink.
//!
//! ```
//! use header_record::prelude::*;
//!
//! let mut out = Vec::new();
//! emit(&mut out, &Header::sample(), Format::Json)?;
//! assert_eq!(out, b"{\"text\":\"foo\",\"signed\":-2593,\"unsigned\":29384}\n");
//! # Ok::<(), String>(())
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`record`] | [`Header`] and its version-one layout [`HeaderVersionOne`](record::HeaderVersionOne) |
//! | [`render`] | [`Format`](render::Format) selection, [`render`](render::render) and [`emit`](render::emit) |
//! | [`config`] | [`RunConfig`](config::RunConfig) built from CLI flags |
//! | [`logging`] | stderr [`tracing_subscriber::Layer`] |

pub mod config;
pub mod logging;
pub mod prelude;
pub mod record;
pub mod render;

pub use record::Header;
