use super::dto::{Ingredient, Meal, Priority};

/// Which part of the prioritized ingredient list a template highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceRule {
    /// First `n` items, or all of them when the list is shorter.
    Leading(usize),
    /// Last `n` items, or all of them when the list is shorter.
    Trailing(usize),
    /// `len` items starting at `start`; only the last item when the window does not fit.
    Window { start: usize, len: usize },
}

impl SliceRule {
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let n = items.len();
        match *self {
            SliceRule::Leading(k) => &items[..k.min(n)],
            SliceRule::Trailing(k) => &items[n - k.min(n)..],
            SliceRule::Window { start, len } => {
                if n >= start + len {
                    &items[start..start + len]
                } else {
                    &items[n.saturating_sub(1)..]
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MealTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub cooking_time: &'static str,
    pub scrap_uses: &'static str,
    pub slice: SliceRule,
}

impl MealTemplate {
    pub fn instantiate(&self, prioritized: &[Ingredient]) -> Meal {
        Meal {
            name: self.name.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
            key_ingredients: self
                .slice
                .apply(prioritized)
                .iter()
                .map(|i| i.name.clone())
                .collect(),
            cooking_time: self.cooking_time.to_string(),
            scrap_uses: Some(self.scrap_uses.to_string()),
        }
    }
}

pub const CATALOG: [MealTemplate; 4] = [
    MealTemplate {
        name: "Creamy Vegetable Stir-Fry",
        description: "A vibrant, healthy stir-fry that uses your expiring vegetables at their peak flavor.",
        priority: Priority::High,
        cooking_time: "20 minutes",
        scrap_uses: "Save vegetable scraps for homemade broth",
        slice: SliceRule::Leading(2),
    },
    MealTemplate {
        name: "Sheet Pan Roasted Vegetables",
        description: "Simple, delicious roasted vegetables that bring out natural sweetness and minimize waste.",
        priority: Priority::Medium,
        cooking_time: "30 minutes",
        scrap_uses: "Blend leftover roasted veggies into soups",
        slice: SliceRule::Window { start: 1, len: 2 },
    },
    MealTemplate {
        name: "One-Pot Vegetable Soup",
        description: "A hearty, comforting soup that's perfect for using up multiple expiring ingredients together.",
        priority: Priority::High,
        cooking_time: "35 minutes",
        scrap_uses: "Make broth from vegetable stems and skins",
        slice: SliceRule::Leading(3),
    },
    MealTemplate {
        name: "Ingredient-Based Frittata",
        description: "A flexible egg dish that adapts to whatever vegetables you have on hand.",
        priority: Priority::Medium,
        cooking_time: "25 minutes",
        scrap_uses: "Finely chop vegetable scraps into filling",
        slice: SliceRule::Trailing(2),
    },
];
