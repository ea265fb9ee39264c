//! `EventDeck` - terminal slideshow for event records with a slide editor.
//!
//! This crate provides the event catalogue, slideshow navigation, the sortable
//! grid overview, and a slide-element store backed by a slide generator.

// Re-export public modules for use in integration tests and as a library
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod generator;
pub mod input;
pub mod slide;
pub mod store;
pub mod types;
pub mod ui;
pub mod viewer;
