use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use mailassist::auth::TokenService;
use mailassist::reply::GeminiProvider;
use mailassist::web::{AppState, WebServer};
use mailassist::{Config, Database};

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    // Load configuration
    let config = match Config::load_with_env(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = mailassist::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        mailassist::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    info!("MailAssist - AI email reply generator");

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> mailassist::Result<()> {
    let db = Database::open(&config.database.url).await?;

    let provider = GeminiProvider::new(&config.gemini)?;
    info!(model = %config.gemini.model, "Using Gemini at {}", provider.endpoint());

    let tokens = Arc::new(TokenService::new(
        &config.auth.jwt_secret,
        config.auth.token_expiry_days,
    ));
    let state = AppState::new(db.clone(), tokens, Arc::new(provider));

    let server = WebServer::new(&config.server, state)?;
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    let result = server.run().await;
    db.close().await;
    result
}
