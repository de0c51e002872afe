//! Core, DOM-free primitives and behaviours for the page enhancements.
//!
//! Behaviours are written against the small traits in [`element`] and the
//! [`schedule::Scheduler`] seam so they run natively under test.
pub mod alert;
pub mod config;
pub mod element;
pub mod geometry;
pub mod hover;
pub mod report;
pub mod ripple;
pub mod schedule;
pub mod styles;
pub mod submit;

#[cfg(test)]
pub(crate) mod testing;
