use crate::config::AppConfig;
use crate::meals::services::{CatalogMealSuggester, MealSuggester};
use crate::meals::waste::{FixedWasteEstimator, WasteEstimator};
use crate::scraps::services::{CuratedScrapIdeas, ScrapIdeaProvider};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub suggester: Arc<dyn MealSuggester>,
    pub scraps: Arc<dyn ScrapIdeaProvider>,
    pub waste: Arc<dyn WasteEstimator>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Ok(Self::from_config(config))
    }

    /// Wires the static catalog, curated scrap table and fixed waste figures.
    pub fn from_config(config: AppConfig) -> Self {
        let waste = Arc::new(FixedWasteEstimator::new(&config.waste)) as Arc<dyn WasteEstimator>;
        Self::from_parts(
            Arc::new(config),
            Arc::new(CatalogMealSuggester),
            Arc::new(CuratedScrapIdeas),
            waste,
        )
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        suggester: Arc<dyn MealSuggester>,
        scraps: Arc<dyn ScrapIdeaProvider>,
        waste: Arc<dyn WasteEstimator>,
    ) -> Self {
        Self {
            config,
            suggester,
            scraps,
            waste,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = AppConfig::from_lookup(|_| None).expect("default config");
        Self::from_config(config)
    }
}
