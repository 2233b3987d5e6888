mod catalog;
pub mod dto;
pub mod handlers;
pub mod services;
pub mod waste;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::plan_routes())
}
