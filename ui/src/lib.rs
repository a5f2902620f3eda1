//! Gamedesk admin console UI.
//!
//! The reusable piece is [`widgets::PagedTable`]; the pages under
//! [`pages`] are its callers, each wired to an in-memory
//! `SampleProvider` until a backend exists.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod pages;
pub mod widgets;

pub use app::GamedeskApp;
