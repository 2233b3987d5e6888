use crate::config::WasteConfig;

use super::dto::{Ingredient, Meal, WasteSummary};

/// Produces the waste summary attached to a generated plan.
pub trait WasteEstimator: Send + Sync {
    fn estimate(&self, prioritized: &[Ingredient], meals: &[Meal]) -> WasteSummary;
}

/// Returns the configured figures regardless of the plan.
#[derive(Debug, Clone)]
pub struct FixedWasteEstimator {
    summary: WasteSummary,
}

impl FixedWasteEstimator {
    pub fn new(cfg: &WasteConfig) -> Self {
        Self {
            summary: WasteSummary {
                waste_reduction: cfg.reduction_percent,
                estimated_savings: cfg.estimated_savings,
            },
        }
    }
}

impl WasteEstimator for FixedWasteEstimator {
    fn estimate(&self, _prioritized: &[Ingredient], _meals: &[Meal]) -> WasteSummary {
        self.summary.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_estimator_ignores_input() {
        let est = FixedWasteEstimator::new(&WasteConfig {
            reduction_percent: 40,
            estimated_savings: 15.50,
        });
        let expected = WasteSummary {
            waste_reduction: 40,
            estimated_savings: 15.50,
        };
        assert_eq!(est.estimate(&[], &[]), expected);

        let many = vec![
            Ingredient { name: "Kale".into(), days_until_expiry: 0 };
            12
        ];
        assert_eq!(est.estimate(&many, &[]), expected);
    }
}
