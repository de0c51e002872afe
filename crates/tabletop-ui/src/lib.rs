#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Tabletop page enhancements.
//! Progressive behaviours layered over the server-rendered catalogue pages: submit
//! feedback, card hover lift, alert auto-dismissal and button ripples.

pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use crate::core::config::EnhanceConfig;
pub use crate::error::EnhanceError;

#[cfg(target_arch = "wasm32")]
pub use dom::{Enhancements, initialize, run};
