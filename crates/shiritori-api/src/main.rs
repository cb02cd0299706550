//! Shiritori referee API server entry point.

use std::sync::{Arc, Mutex};

use shiritori_api::config::ServerConfig;
use shiritori_api::error::AppError;
use shiritori_api::state::AppState;
use shiritori_core::classifier::PartOfSpeechClassifier;
use shiritori_core::clock::SystemClock;
use shiritori_core::rng::SystemRng;
use shiritori_game::domain::classifier::{AcceptAllClassifier, WordListClassifier};
use tracing_subscriber::EnvFilter;

/// Picks the verb/adjective classifier named by the configuration.
fn load_classifier(config: &ServerConfig) -> Result<Arc<dyn PartOfSpeechClassifier>, AppError> {
    match &config.pos_word_list {
        Some(path) => {
            let classifier = WordListClassifier::load(path)?;
            tracing::info!(
                path = %path.display(),
                entries = classifier.len(),
                "loaded part-of-speech word list"
            );
            Ok(Arc::new(classifier))
        }
        None => {
            tracing::warn!("SHIRITORI_POS_WORDLIST not set; verbs and adjectives are not filtered");
            Ok(Arc::new(AcceptAllClassifier))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting shiritori referee API server");

    let config = ServerConfig::from_env()?;
    let classifier = load_classifier(&config)?;

    let app_state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(Mutex::new(SystemRng::new())),
        classifier,
    )?;

    let app = shiritori_api::build_app(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
