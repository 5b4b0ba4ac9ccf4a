pub mod browser;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod grouping;
pub mod timeline;
pub mod tracing;
pub mod tracked;
pub mod viewport;
