// API layer module (HTTP adapter)
// Handlers translate requests into domain calls; routes wires them together

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
