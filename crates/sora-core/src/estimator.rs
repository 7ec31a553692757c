use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use sora_types::error::EstimateError;
use sora_types::estimate::LineItem;
use sora_types::plan::{self, PlanTier};

use crate::catalog::Catalog;

/// One interactive estimation session.
///
/// Owns the mutable list of line items; the catalog and plan table are
/// shared read-only. All operations are synchronous and either fully
/// succeed or reject the input before any mutation. Aggregates are
/// recomputed from the item list on every read, so they can never drift
/// out of sync with it.
pub struct Estimator {
    catalog: Arc<Catalog>,
    plans: Arc<Vec<PlanTier>>,
    items: Vec<LineItem>,
}

impl Estimator {
    pub fn new(catalog: Arc<Catalog>, plans: Arc<Vec<PlanTier>>) -> Self {
        Self {
            catalog,
            plans,
            items: Vec::new(),
        }
    }

    /// Validate and append a line item.
    ///
    /// The model name must resolve against the catalog and the quantity
    /// must be at least 1, checked in that order; the first violated
    /// condition determines the error and the item list is untouched.
    pub fn add_item(&mut self, gpu_model: &str, quantity: u32) -> Result<&LineItem, EstimateError> {
        let gpu = self
            .catalog
            .lookup(gpu_model)
            .ok_or_else(|| EstimateError::UnknownModel {
                name: gpu_model.to_string(),
            })?;
        if quantity < 1 {
            return Err(EstimateError::InvalidQuantity { quantity });
        }

        let item = LineItem::new(gpu, quantity);
        debug!(id = %item.id, gpu = %item.gpu_model, quantity, monthly_mgh = item.monthly_mgh, "added line item");
        self.items.push(item);
        Ok(self.items.last().expect("items is non-empty after push"))
    }

    /// Remove the item with the given id. Unknown ids are a no-op;
    /// remaining items keep their relative order.
    pub fn remove_item(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;
        if removed {
            debug!(%id, "removed line item");
        }
        removed
    }

    /// Drop every line item. Always succeeds.
    pub fn clear(&mut self) {
        debug!(count = self.items.len(), "cleared estimate");
        self.items.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Aggregate monthly usage, recomputed from the item list.
    pub fn total_monthly_mgh(&self) -> f64 {
        self.items.iter().map(|item| item.monthly_mgh).sum()
    }

    /// Plan recommended for the current aggregate usage.
    ///
    /// `None` while the estimate is empty: zero usage has no
    /// recommendation, which is distinct from fitting the smallest tier.
    pub fn recommended_plan(&self) -> Option<&PlanTier> {
        if self.items.is_empty() {
            return None;
        }
        plan::recommend(&self.plans, self.total_monthly_mgh())
    }
}
