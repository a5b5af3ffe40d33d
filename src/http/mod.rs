//! HTTP surface for `bookshelf`.
//!
//! | Method | Path          | Store operation |
//! |--------|---------------|-----------------|
//! | POST   | `/books`      | create          |
//! | GET    | `/books`      | list            |
//! | GET    | `/books/{id}` | get             |
//! | PUT    | `/books/{id}` | update          |
//! | DELETE | `/books/{id}` | delete          |

pub mod handlers;
pub mod query;
pub mod response;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use bookshelf_lib::BookStore;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

/// Store handle shared by all handlers.
///
/// Every operation holds the lock for its full read-modify-write.
pub type SharedStore = Arc<RwLock<BookStore>>;

/// Wrap a store for sharing across handlers.
#[must_use]
pub fn shared(store: BookStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}

/// Build the application router around `store`.
pub fn router(store: SharedStore, cors: bool) -> Router {
    let router = Router::new()
        .route("/books", post(handlers::add_book).get(handlers::list_books))
        .route(
            "/books/{id}",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .fallback(handlers::not_found)
        .with_state(store)
        .layer(TraceLayer::new_for_http());

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Bind and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(address.as_str())
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    let local = listener.local_addr().context("Failed to read bound address")?;

    let app = router(shared(BookStore::new()), config.cors);

    info!(%local, cors = config.cors, "Bookshelf server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Bookshelf server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
