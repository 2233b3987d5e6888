use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use super::dto::{ScrapsIdeasRequest, ScrapsIdeasResponse};
use super::services::ScrapIdeaProvider;
use crate::state::AppState;

pub fn scraps_routes() -> Router<AppState> {
    Router::new().route("/scraps-ideas", post(scraps_ideas))
}

/// POST /meal-plan/scraps-ideas { ingredient: "broccoli" }
#[instrument(skip(state, body), fields(ingredient = %body.ingredient))]
pub async fn scraps_ideas(
    State(state): State<AppState>,
    Json(body): Json<ScrapsIdeasRequest>,
) -> Json<ScrapsIdeasResponse> {
    let ideas = state.scraps.ideas_for(&body.ingredient).await;
    info!(ideas = ideas.len(), "scrap ideas served");
    Json(ScrapsIdeasResponse {
        ingredient: body.ingredient,
        ideas,
    })
}
