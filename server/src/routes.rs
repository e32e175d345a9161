use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::models::BidResponse;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/cotacao", get(get_quotation))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The whole pipeline for one inbound request: fetch from the exchange API,
/// persist, answer with the bid. Every failure maps to an opaque 500; the
/// cause only shows up in the logs.
async fn get_quotation(State(state): State<AppState>) -> Result<Json<BidResponse>, StatusCode> {
    let quote = state.exchange.fetch_latest().await.map_err(|err| {
        error!("Failed to fetch quotation: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let bid = quote.bid.clone();
    if let Err(err) = state.quotes.insert(quote, state.persist_deadline).await {
        error!("Failed to persist quotation: {}", err);
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    Ok(Json(BidResponse { bid }))
}
