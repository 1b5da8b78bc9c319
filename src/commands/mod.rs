//! Command implementations for docket

pub mod dispatch;
pub mod list;
pub mod search;
pub mod show;
pub mod tags;
