use serde::{Deserialize, Serialize};

/// A GPU model offered by the platform, with its metered rate.
///
/// Rates are expressed in Managed GPU Hours (MGH) consumed per GPU-hour.
/// Entries are loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GpuModel {
    /// Unique display name, e.g. "NVIDIA H100 80GB".
    pub name: String,
    /// MGH consumed per hour for one GPU of this model. Strictly positive.
    pub mgh_per_hour: f64,
}

impl GpuModel {
    pub fn new(name: impl Into<String>, mgh_per_hour: f64) -> Self {
        Self {
            name: name.into(),
            mgh_per_hour,
        }
    }
}

impl std::fmt::Display for GpuModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} MGH/hr)", self.name, self.mgh_per_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_rate() {
        let gpu = GpuModel::new("NVIDIA T4", 0.5);
        assert_eq!(gpu.to_string(), "NVIDIA T4 (0.5 MGH/hr)");
    }
}
