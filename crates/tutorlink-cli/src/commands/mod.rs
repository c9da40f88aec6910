pub mod ask;
pub mod common;
pub mod completions;
pub mod config;
pub mod connect;
pub mod contact;
pub mod list;
pub mod profile;
pub mod search;
pub mod show;
