use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{instrument, warn};

use super::dto::{MealPlanRequest, MealPlanResponse};
use super::services::generate_meal_plan;
use crate::{error::rejection, state::AppState};

pub fn plan_routes() -> Router<AppState> {
    Router::new().route("/generate", post(generate))
}

/// POST /meal-plan/generate { ingredients: [{ name, daysUntilExpiry }], days?: 2 }
#[instrument(skip(state, body), fields(ingredients = body.ingredients.len(), days = body.days))]
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<MealPlanRequest>,
) -> Result<Json<MealPlanResponse>, (StatusCode, String)> {
    let plan = generate_meal_plan(&state, body.ingredients, body.days)
        .await
        .map_err(|e| {
            warn!(error = %e, "meal plan rejected");
            rejection(e)
        })?;
    Ok(Json(plan))
}
