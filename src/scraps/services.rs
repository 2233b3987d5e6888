use async_trait::async_trait;
use tracing::debug;

use super::dto::ScrapIdea;

/// Source of reuse ideas for an ingredient's scraps.
#[async_trait]
pub trait ScrapIdeaProvider: Send + Sync {
    async fn ideas_for(&self, ingredient: &str) -> Vec<ScrapIdea>;
}

/// Hand-curated table with a templated fallback.
#[derive(Debug, Clone, Default)]
pub struct CuratedScrapIdeas;

#[async_trait]
impl ScrapIdeaProvider for CuratedScrapIdeas {
    async fn ideas_for(&self, ingredient: &str) -> Vec<ScrapIdea> {
        lookup_scrap_ideas(ingredient)
    }
}

struct IdeaText {
    title: &'static str,
    description: &'static str,
}

struct CuratedEntry {
    ingredient: &'static str,
    ideas: &'static [IdeaText],
}

const CURATED: &[CuratedEntry] = &[
    CuratedEntry {
        ingredient: "broccoli",
        ideas: &[
            IdeaText {
                title: "Broccoli Stem Chips",
                description: "Peel the stems, cut into chip-sized pieces, toss with olive oil and seasonings, then roast until crispy. A delicious alternative to regular chips!",
            },
            IdeaText {
                title: "Vegetable Broth",
                description: "Freeze stems in a freezer bag. When you have enough vegetable scraps, boil them to make nutrient-rich homemade broth.",
            },
            IdeaText {
                title: "Pickle the Stems",
                description: "Cut broccoli stems into spears, pickle with vinegar, mustard seeds, and dill for a tangy snack.",
            },
        ],
    },
    CuratedEntry {
        ingredient: "potato",
        ideas: &[
            IdeaText {
                title: "Crispy Potato Peel Chips",
                description: "Wash peels thoroughly, toss with oil and seasonings, bake at 400°F until golden and crispy. Excellent as a side or snack!",
            },
            IdeaText {
                title: "Potato Peel Stock",
                description: "Save peels and boil with aromatics for a starchy, nutrient-rich stock perfect for soups.",
            },
            IdeaText {
                title: "Compost Nutrient",
                description: "Add peels to your compost bin to enrich soil with potassium and other minerals.",
            },
        ],
    },
    CuratedEntry {
        ingredient: "carrot",
        ideas: &[
            IdeaText {
                title: "Carrot Top Pesto",
                description: "Blend carrot tops with garlic, nuts, cheese, and oil to make a vibrant pesto for pasta or sandwiches.",
            },
            IdeaText {
                title: "Roasted Carrot Peels",
                description: "Toss thin peels with oil and herbs, roast until crispy for a vegetable chip snack.",
            },
        ],
    },
];

/// Case-insensitive match on the curated table; anything else gets the generic list.
pub fn lookup_scrap_ideas(ingredient: &str) -> Vec<ScrapIdea> {
    let key = ingredient.to_lowercase();
    match CURATED.iter().find(|e| e.ingredient == key) {
        Some(entry) => entry
            .ideas
            .iter()
            .map(|i| ScrapIdea {
                title: i.title.to_string(),
                description: i.description.to_string(),
            })
            .collect(),
        None => {
            debug!(%ingredient, "no curated scrap ideas; using fallback");
            fallback_ideas(ingredient)
        }
    }
}

// `ingredient` goes into the text exactly as the caller sent it.
fn fallback_ideas(ingredient: &str) -> Vec<ScrapIdea> {
    vec![
        ScrapIdea {
            title: "Vegetable Broth".into(),
            description: format!(
                "Freeze {} scraps and use them later to make homemade vegetable broth.",
                ingredient
            ),
        },
        ScrapIdea {
            title: "Compost".into(),
            description: format!(
                "Add {} scraps to your compost to create nutrient-rich soil amendments.",
                ingredient
            ),
        },
        ScrapIdea {
            title: "Creative Recipes".into(),
            description: format!(
                "Search for '{} scrap recipes' online for innovative ways to reduce waste.",
                ingredient
            ),
        },
    ]
}
