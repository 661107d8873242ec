use std::{fs::OpenOptions, path::Path, sync::Arc, sync::Mutex};

use anyhow::Context;
use iqra_books::{
    books_client::BooksClient,
    config::Config,
    data_source::DataSource,
    screen::{ScreenController, ScreenSettings, localization::TitleTranslations},
    tui,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt::SubscriberBuilder, prelude::*};

type IqraBooksResult<T> = anyhow::Result<T>;

#[tokio::main]
async fn main() -> IqraBooksResult<()> {
    // Load environment variables from .env files
    if Path::new(".env.local").exists() {
        dotenvy::from_filename(".env.local")?;
    } else if Path::new(".env").exists() {
        dotenvy::from_filename(".env")?;
    };
    let config = Config::load()?;
    if let Err(e) = config.validate() {
        return Err(anyhow::anyhow!(e));
    }

    // The terminal belongs to the UI, so logs go to a file. Respect RUST_LOG if set.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file))?;
    let default_filter = format!("{}=info,reqwest=warn,h2=warn", env!("CARGO_PKG_NAME"));
    let env_filter = std::env::var("RUST_LOG").unwrap_or(default_filter);
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .finish()
        .with(ErrorLayer::default())
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting iqra books");

    let client = BooksClient::new(&config.books_api_url, config.request_timeout)?;
    tracing::info!(books_url = %config.books_api_url, cover_base = %config.cover_base_url, "configured books client");

    let screen = ScreenController::new(
        DataSource::spawn(Arc::new(client)),
        ScreenSettings {
            cover_base_url: config.cover_base_url.clone(),
            expand_duration: config.expand_duration,
            titles: TitleTranslations::default(),
        },
    );
    tui::run(screen, config.tick)?;
    Ok(())
}
