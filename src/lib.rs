//! nebula library crate
//!
//! Exposes the review pipeline so the CLI and integration tests can use
//! it without going through process startup.

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod llm;
pub mod render;
pub mod review;
