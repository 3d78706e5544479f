use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Kept as submitted, so `15` stays an integer and `12.5` a fraction.
    pub price: Number,
    pub image_url: String,
}

/// A validated dish body: every field except the server-owned id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl Dish {
    pub fn from_draft(id: String, draft: DishDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image_url: draft.image_url,
        }
    }

    /// Overwrite every field but `id`.
    pub fn apply(&mut self, draft: DishDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.image_url = draft.image_url;
    }
}
