//! Card generation endpoint
//!
//! POST /api/generate accepts either the tri-state body
//! (`include`/`exclude`/`maybe`) or the legacy `selectedPhrases` body and
//! returns `{"bingoGrid": [[..], ..]}`.

use axum::{body::Bytes, Json};
use bingo_common::card::{
    generate_card_with_thread_rng, parse_generate_request, CardRequest, GenerateResponse,
};
use tracing::{debug, warn};

use crate::error::ApiResult;

/// POST /api/generate
pub async fn generate(body: Bytes) -> ApiResult<Json<GenerateResponse>> {
    let request = parse_generate_request(&body).inspect_err(|e| {
        warn!(kind = e.kind(), "Rejected card request: {}", e);
    })?;

    match &request {
        CardRequest::TriState(selection) => debug!(
            include = selection.include.len(),
            exclude = selection.exclude.len(),
            maybe = selection.maybe.len(),
            "Generating card from tri-state selection"
        ),
        CardRequest::Fixed(selected) => debug!(
            selected = selected.len(),
            "Generating card from fixed selection"
        ),
    }

    let shape = request.shape();
    let bingo_grid = generate_card_with_thread_rng(request).inspect_err(|e| {
        warn!(kind = e.kind(), shape, "Rejected card request: {}", e);
    })?;

    Ok(Json(GenerateResponse { bingo_grid }))
}
