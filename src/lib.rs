//! Bookshelf API Library
//!
//! Accounts and a personal reading list (read / unread / purchased /
//! dropped) served over HTTP and stored in PostgreSQL.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
