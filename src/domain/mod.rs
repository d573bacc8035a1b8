// Domain layer module exports
// Domain types know nothing about HTTP or SQL

pub mod reading_list;
pub mod repositories;
pub mod user;
