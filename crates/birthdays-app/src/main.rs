use std::path::Path;

use birthdays_app::app::api::routes;
use birthdays_app::state::AppStateHandler;
use birthdays_core::config::load_config;
use birthdays_service::addressbook::AddressBooks;
use birthdays_service::carddav::CardDavClient;
use birthdays_service::feed::BirthdayFeed;
use salvo::conn::TcpListener;
use salvo::logging::Logger;
use salvo::{Listener, Router, Server};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting CardDAV birthday calendar server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    if config.auth.api_key.is_empty() {
        tracing::warn!("auth.api_key is empty; feeds are readable without a key");
    }

    let books = AddressBooks::load(Path::new(&config.address_books.file)).await?;
    if books.is_empty() {
        tracing::warn!(file = %config.address_books.file, "No address books configured");
    }

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(AppStateHandler::new(
            config,
            books,
            BirthdayFeed::new(CardDavClient::default()),
        ))
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    let server = Server::new(acceptor);
    let handle = server.handle();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        tracing::info!("Shutdown signal received");
        handle.stop_graceful(None);
    });

    server.serve(router).await;

    Ok(())
}
