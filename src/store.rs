//! In-memory record collections. Insertion order is preserved; lookups are linear scans.

use crate::error::ConfigError;
use crate::id::IdGenerator;
use crate::model::{Dish, DishDraft, Order, OrderDraft};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Startup contents for the store, read from `SEED_DIR`.
#[derive(Clone, Debug, Default)]
pub struct Seed {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

pub struct Store {
    dishes: Vec<Dish>,
    orders: Vec<Order>,
    ids: Arc<dyn IdGenerator>,
}

impl Store {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            dishes: Vec::new(),
            orders: Vec::new(),
            ids,
        }
    }

    /// Start from seeded records. Every seeded id is reserved with the generator, and an id
    /// repeated within one collection is rejected.
    pub fn with_seed(ids: Arc<dyn IdGenerator>, seed: Seed) -> Result<Self, ConfigError> {
        reserve_unique(ids.as_ref(), "dish", seed.dishes.iter().map(|d| d.id.as_str()))?;
        reserve_unique(ids.as_ref(), "order", seed.orders.iter().map(|o| o.id.as_str()))?;
        Ok(Self {
            dishes: seed.dishes,
            orders: seed.orders,
            ids,
        })
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn dish(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    pub fn dish_mut(&mut self, id: &str) -> Option<&mut Dish> {
        self.dishes.iter_mut().find(|d| d.id == id)
    }

    /// Assign a fresh id and append. Returns the stored record.
    pub fn insert_dish(&mut self, draft: DishDraft) -> &Dish {
        let dish = Dish::from_draft(self.ids.next_id(), draft);
        self.dishes.push(dish);
        &self.dishes[self.dishes.len() - 1]
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn order_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == id)
    }

    pub fn insert_order(&mut self, draft: OrderDraft) -> &Order {
        let order = Order::from_draft(self.ids.next_id(), draft);
        self.orders.push(order);
        &self.orders[self.orders.len() - 1]
    }

    pub fn remove_order(&mut self, id: &str) -> Option<Order> {
        let index = self.orders.iter().position(|o| o.id == id)?;
        Some(self.orders.remove(index))
    }
}

fn reserve_unique<'a>(
    ids: &dyn IdGenerator,
    kind: &'static str,
    seeded: impl Iterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in seeded {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateSeedId {
                kind,
                id: id.to_owned(),
            });
        }
        ids.reserve(id);
    }
    Ok(())
}

/// Read `dishes.json` and `orders.json` from `dir`. A missing file yields an empty collection.
pub async fn load_seed(dir: &Path) -> Result<Seed, ConfigError> {
    let dishes = read_records(&dir.join("dishes.json")).await?;
    let orders = read_records(&dir.join("orders.json")).await?;
    tracing::info!(
        dir = %dir.display(),
        dishes = dishes.len(),
        orders = orders.len(),
        "loaded seed data"
    );
    Ok(Seed { dishes, orders })
}

async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ConfigError> {
    let seed_err = |message: String| ConfigError::Seed {
        path: path.display().to_string(),
        message,
    };
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no seed file");
            return Ok(Vec::new());
        }
        Err(e) => return Err(seed_err(e.to_string())),
    };
    serde_json::from_str(&text).map_err(|e| seed_err(e.to_string()))
}
