use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::gpu::GpuModel;

/// Hours in a billing month: fixed 30-day month, no calendar variation.
pub const HOURS_PER_MONTH: u32 = 24 * 30;

/// One calculator entry pairing a GPU model with a quantity.
///
/// The rate is snapshotted from the catalog at creation time and
/// `monthly_mgh` is computed once; an item is never recomputed in place.
/// If the inputs change, the caller creates a new item instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: Uuid,
    /// Catalog name of the GPU model this item refers to.
    pub gpu_model: String,
    pub quantity: u32,
    /// Rate copied from the catalog when the item was created.
    pub mgh_per_hour: f64,
    /// `HOURS_PER_MONTH * mgh_per_hour * quantity`.
    pub monthly_mgh: f64,
    pub created_at: DateTime<Utc>,
}

impl LineItem {
    /// Build an item from a resolved catalog entry. Callers validate
    /// `quantity >= 1` before constructing.
    pub fn new(gpu: &GpuModel, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            gpu_model: gpu.name.clone(),
            quantity,
            mgh_per_hour: gpu.mgh_per_hour,
            monthly_mgh: f64::from(HOURS_PER_MONTH) * gpu.mgh_per_hour * f64::from(quantity),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_per_month_is_720() {
        assert_eq!(HOURS_PER_MONTH, 720);
    }

    #[test]
    fn monthly_mgh_for_one_a100() {
        // 24 * 30 * 4 * 1 = 2880
        let gpu = GpuModel::new("NVIDIA A100 80GB", 4.0);
        let item = LineItem::new(&gpu, 1);
        assert_eq!(item.monthly_mgh, 2880.0);
    }

    #[test]
    fn monthly_mgh_scales_with_quantity() {
        let gpu = GpuModel::new("NVIDIA T4", 0.5);
        let item = LineItem::new(&gpu, 4);
        assert_eq!(item.monthly_mgh, 720.0 * 0.5 * 4.0);
    }

    #[test]
    fn ids_are_unique() {
        let gpu = GpuModel::new("NVIDIA A10", 1.0);
        let a = LineItem::new(&gpu, 1);
        let b = LineItem::new(&gpu, 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn rate_is_snapshotted() {
        let mut gpu = GpuModel::new("NVIDIA L40S", 2.5);
        let item = LineItem::new(&gpu, 2);
        gpu.mgh_per_hour = 99.0;
        assert_eq!(item.mgh_per_hour, 2.5);
        assert_eq!(item.monthly_mgh, 720.0 * 2.5 * 2.0);
    }
}
