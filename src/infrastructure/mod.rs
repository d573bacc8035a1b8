// Infrastructure layer module
// Database adapters implementing the domain repository ports

pub mod database;
pub mod repositories;
