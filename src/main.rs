use bookshelf_api::api::{self, AppState};
use bookshelf_api::config::AppConfig;
use bookshelf_api::infrastructure::database;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = database::connect(&config)
        .await
        .expect("Failed to connect to database");

    database::migrate(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database connected successfully");

    let addr = config.bind_addr;
    let app = api::router(AppState::new(pool, config));

    // Start server
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
