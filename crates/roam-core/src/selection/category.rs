use serde::{Deserialize, Serialize};

/// One chip in the category strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    /// Icon name resolved by the host's icon set.
    pub icon: String,
}

impl Category {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// The stock category strip.
pub fn default_categories() -> Vec<Category> {
    [
        ("Tiny homes", "home"),
        ("Cabins", "house-siding"),
        ("Trending", "local-fire-department"),
        ("Play", "videogame-asset"),
        ("City", "apartment"),
        ("Beachfront", "beach-access"),
        ("Countryside", "nature-people"),
    ]
    .into_iter()
    .map(|(label, icon)| Category::new(label, icon))
    .collect()
}
