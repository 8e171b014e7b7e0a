use recipe_box::{app, config::AppConfig, keepalive, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "recipe_box=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    tracing::info!(env = %config.app_env, mealdb = %config.mealdb_base_url, "starting");

    let state = AppState::init(config.clone()).await?;
    let _keepalive = keepalive::spawn(&config);

    let app = app::build_app(state);
    app::serve(app, &config).await
}
