use sora_types::gpu::GpuModel;

/// Read-only table of GPU models offered by the platform.
///
/// Built once at startup (defaults or `pricing.toml`) and never mutated,
/// so it can be shared freely across estimator sessions.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<GpuModel>,
}

impl Catalog {
    pub fn new(entries: Vec<GpuModel>) -> Self {
        Self { entries }
    }

    /// Resolve a model by its exact name.
    pub fn lookup(&self, name: &str) -> Option<&GpuModel> {
        self.entries.iter().find(|gpu| gpu.name == name)
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[GpuModel] {
        &self.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(crate::config::PricingConfig::default().catalog)
    }
}
