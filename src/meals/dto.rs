use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub days_until_expiry: i64, // zero or negative: already expired
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    #[allow(dead_code)]
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub key_ingredients: Vec<String>,
    pub cooking_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrap_uses: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteSummary {
    pub waste_reduction: u32,
    pub estimated_savings: f64,
}

#[derive(Debug, Deserialize)]
pub struct MealPlanRequest {
    pub ingredients: Vec<Ingredient>,
    #[serde(default = "default_days")]
    pub days: i64,
}
fn default_days() -> i64 { 2 }

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResponse {
    pub meals: Vec<Meal>,
    pub waste_summary: WasteSummary,
}
