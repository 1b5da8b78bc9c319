//! Docket Core Library
//!
//! Domain logic for the docket post store: the post model, the
//! file-system store, and the relevance-ranking engine shared by
//! every front end presenting the same corpus.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod post;
pub mod rank;
pub mod records;
pub mod store;
