use async_trait::async_trait;
use tracing::{debug, info};

use super::catalog::CATALOG;
use super::dto::{Ingredient, Meal, MealPlanResponse};
use super::waste::WasteEstimator;
use crate::error::PlannerError;
use crate::state::AppState;

/// Source of meal suggestions for a prioritized ingredient list.
#[async_trait]
pub trait MealSuggester: Send + Sync {
    async fn suggest(&self, prioritized: &[Ingredient], days: i64) -> Result<Vec<Meal>, PlannerError>;
}

/// Fills the fixed template catalog from the prioritized list. `days` is not consulted.
#[derive(Debug, Clone, Default)]
pub struct CatalogMealSuggester;

#[async_trait]
impl MealSuggester for CatalogMealSuggester {
    async fn suggest(&self, prioritized: &[Ingredient], _days: i64) -> Result<Vec<Meal>, PlannerError> {
        select_meals(prioritized)
    }
}

/// Stable sort by days until expiry, most urgent first.
pub fn prioritize(ingredients: &[Ingredient]) -> Vec<Ingredient> {
    let mut out = ingredients.to_vec();
    out.sort_by_key(|i| i.days_until_expiry);
    out
}

pub fn select_meals(prioritized: &[Ingredient]) -> Result<Vec<Meal>, PlannerError> {
    if prioritized.is_empty() {
        return Err(PlannerError::invalid("at least one ingredient is required"));
    }
    Ok(CATALOG.iter().map(|t| t.instantiate(prioritized)).collect())
}

fn validate(ingredients: &[Ingredient]) -> Result<(), PlannerError> {
    if ingredients.is_empty() {
        return Err(PlannerError::invalid("ingredients must not be empty"));
    }
    if let Some(pos) = ingredients.iter().position(|i| i.name.trim().is_empty()) {
        return Err(PlannerError::invalid(format!(
            "ingredient at index {} has an empty name",
            pos
        )));
    }
    Ok(())
}

pub async fn generate_meal_plan(
    st: &AppState,
    ingredients: Vec<Ingredient>,
    days: i64,
) -> Result<MealPlanResponse, PlannerError> {
    validate(&ingredients)?;

    let prioritized = prioritize(&ingredients);
    debug!(
        most_urgent = %prioritized[0].name,
        days_left = prioritized[0].days_until_expiry,
        "ingredients prioritized"
    );

    let meals = st.suggester.suggest(&prioritized, days).await?;
    let waste_summary = st.waste.estimate(&prioritized, &meals);

    info!(ingredients = prioritized.len(), meals = meals.len(), days, "meal plan generated");
    Ok(MealPlanResponse {
        meals,
        waste_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ing(name: &str, days: i64) -> Ingredient {
        Ingredient {
            name: name.into(),
            days_until_expiry: days,
        }
    }

    fn keys(meal: &Meal) -> Vec<&str> {
        meal.key_ingredients.iter().map(String::as_str).collect()
    }

    #[test]
    fn prioritize_sorts_ascending_and_keeps_everything() {
        let input = vec![ing("Spinach", 1), ing("Milk", 5), ing("Bread", 3)];
        let out = prioritize(&input);
        let names: Vec<_> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Spinach", "Bread", "Milk"]);
        // input untouched
        assert_eq!(input[1].name, "Milk");
    }

    #[test]
    fn prioritize_is_stable_for_equal_urgency() {
        let input = vec![
            ing("A", 2),
            ing("B", -1),
            ing("C", 2),
            ing("D", 0),
            ing("E", 2),
            ing("B", -1),
        ];
        let out = prioritize(&input);
        let names: Vec<_> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "B", "D", "A", "C", "E"]);
        assert!(out
            .windows(2)
            .all(|w| w[0].days_until_expiry <= w[1].days_until_expiry));
    }

    #[test]
    fn prioritize_empty() {
        assert!(prioritize(&[]).is_empty());
    }

    #[test]
    fn three_ingredients_fill_every_slot() {
        let p = prioritize(&[ing("Spinach", 1), ing("Milk", 5), ing("Bread", 3)]);
        let meals = select_meals(&p).unwrap();
        assert_eq!(meals.len(), 4);
        assert_eq!(keys(&meals[0]), vec!["Spinach", "Bread"]);
        assert_eq!(keys(&meals[1]), vec!["Bread", "Milk"]);
        assert_eq!(keys(&meals[2]), vec!["Spinach", "Bread", "Milk"]);
        assert_eq!(keys(&meals[3]), vec!["Bread", "Milk"]);
    }

    #[test]
    fn single_ingredient_used_everywhere() {
        let meals = select_meals(&[ing("Egg", 2)]).unwrap();
        assert_eq!(meals.len(), 4);
        for meal in &meals {
            assert_eq!(keys(meal), vec!["Egg"]);
        }
    }

    #[test]
    fn two_ingredients() {
        let p = vec![ing("Kale", 0), ing("Leek", 4)];
        let meals = select_meals(&p).unwrap();
        assert_eq!(keys(&meals[0]), vec!["Kale", "Leek"]);
        assert_eq!(keys(&meals[1]), vec!["Leek"]);
        assert_eq!(keys(&meals[2]), vec!["Kale", "Leek"]);
        assert_eq!(keys(&meals[3]), vec!["Kale", "Leek"]);
    }

    #[test]
    fn many_ingredients_never_yield_empty_slots() {
        for n in 1..8 {
            let p: Vec<_> = (0..n).map(|d| ing(&format!("item-{}", d), d)).collect();
            let meals = select_meals(&p).unwrap();
            assert_eq!(meals.len(), 4);
            assert!(meals.iter().all(|m| !m.key_ingredients.is_empty()));
        }
    }

    #[test]
    fn selection_is_idempotent() {
        let p = vec![ing("Tomato", 1), ing("Basil", 1), ing("Rice", 9), ing("Feta", 4)];
        assert_eq!(select_meals(&p).unwrap(), select_meals(&p).unwrap());
    }

    #[test]
    fn empty_list_is_invalid() {
        let err = select_meals(&[]).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidArgument(_)));
    }

    #[test]
    fn validate_rejects_blank_names() {
        let err = validate(&[ing("Milk", 1), ing("  ", 2)]).unwrap_err();
        assert!(err.to_string().contains("index 1"));
        assert!(validate(&[]).is_err());
        assert!(validate(&[ing("Milk", 1)]).is_ok());
    }

    #[tokio::test]
    async fn generate_meal_plan_attaches_waste_summary() {
        let state = AppState::fake();
        let plan = generate_meal_plan(&state, vec![ing("Milk", 5), ing("Spinach", 1)], 7)
            .await
            .unwrap();
        assert_eq!(plan.meals.len(), 4);
        assert_eq!(keys(&plan.meals[0]), vec!["Spinach", "Milk"]);
        assert_eq!(plan.waste_summary.waste_reduction, 40);
        assert_eq!(plan.waste_summary.estimated_savings, 15.50);
    }

    #[tokio::test]
    async fn generate_meal_plan_rejects_empty_input() {
        let state = AppState::fake();
        let err = generate_meal_plan(&state, vec![], 2).await.unwrap_err();
        assert!(matches!(err, PlannerError::InvalidArgument(_)));
    }
}
