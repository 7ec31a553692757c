use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use sora_types::gpu::GpuModel;
use sora_types::plan::{PlanPrice, PlanQuota, PlanTier};

/// The GPU catalog and plan table, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub catalog: Vec<GpuModel>,
    pub plans: Vec<PlanTier>,
}

/// Returns the SoraCloud home directory (~/.soracloud/)
pub fn sora_home() -> PathBuf {
    dirs::home_dir()
        .expect("Could not determine home directory")
        .join(".soracloud")
}

/// Returns the path to the pricing tables (~/.soracloud/pricing.toml)
pub fn pricing_path() -> PathBuf {
    sora_home().join("pricing.toml")
}

/// Load the pricing tables from disk, writing the defaults if no file
/// exists yet. The result is validated before it is handed out.
pub fn load_pricing() -> Result<PricingConfig> {
    let path = pricing_path();

    if !path.exists() {
        let home = sora_home();
        std::fs::create_dir_all(&home)
            .with_context(|| format!("Failed to create {}", home.display()))?;

        let default = PricingConfig::default();
        let toml_str = toml::to_string_pretty(&default)
            .context("Failed to serialize default pricing tables")?;
        std::fs::write(&path, &toml_str)
            .with_context(|| format!("Failed to write default pricing to {}", path.display()))?;
        info!(path = %path.display(), "wrote default pricing tables");

        return Ok(default);
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pricing from {}", path.display()))?;
    let config: PricingConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse pricing at {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid pricing tables at {}", path.display()))?;
    Ok(config)
}

impl PricingConfig {
    /// Check the table invariants: catalog names unique with strictly
    /// positive rates; plan quotas strictly ascending; exactly the final
    /// plan unbounded.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for gpu in &self.catalog {
            if !names.insert(gpu.name.as_str()) {
                bail!("duplicate catalog entry: {}", gpu.name);
            }
            if !(gpu.mgh_per_hour > 0.0 && gpu.mgh_per_hour.is_finite()) {
                bail!("rate for {} must be strictly positive", gpu.name);
            }
        }

        if self.plans.is_empty() {
            bail!("plan table is empty");
        }
        let mut previous_bound: Option<f64> = None;
        for (i, plan) in self.plans.iter().enumerate() {
            let last = i == self.plans.len() - 1;
            match plan.quota {
                PlanQuota::Limited(bound) => {
                    if last {
                        bail!("final plan {} must have an unbounded quota", plan.name);
                    }
                    if !(bound > 0.0 && bound.is_finite()) {
                        bail!("quota bound for {} must be strictly positive", plan.name);
                    }
                    if let Some(prev) = previous_bound {
                        if bound <= prev {
                            bail!("plan quotas must be strictly ascending ({} <= {})", bound, prev);
                        }
                    }
                    previous_bound = Some(bound);
                }
                PlanQuota::Unlimited => {
                    if !last {
                        bail!("only the final plan may be unbounded, {} is not last", plan.name);
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            catalog: vec![
                GpuModel::new("NVIDIA H100 80GB", 6.0),
                GpuModel::new("NVIDIA A100 80GB", 4.0),
                GpuModel::new("NVIDIA A100 40GB", 3.0),
                GpuModel::new("NVIDIA L40S", 2.5),
                GpuModel::new("NVIDIA A10", 1.0),
                GpuModel::new("NVIDIA T4", 0.5),
            ],
            plans: vec![
                PlanTier {
                    name: "Starter".to_string(),
                    price: PlanPrice::Free,
                    description: "Perfect for individuals and small teams just getting started with AI.".to_string(),
                    quota: PlanQuota::Limited(50.0),
                    overage_rate: None,
                    features: vec![
                        "Serverless Inference".to_string(),
                        "IDE Integrations".to_string(),
                        "API Access".to_string(),
                        "Community Support".to_string(),
                    ],
                },
                PlanTier {
                    name: "Business".to_string(),
                    price: PlanPrice::Monthly(499),
                    description: "For growing teams with serious AI workloads and production needs.".to_string(),
                    quota: PlanQuota::Limited(1500.0),
                    overage_rate: Some("$0.40 per MGH".to_string()),
                    features: vec![
                        "All Starter features".to_string(),
                        "Priority Scheduling".to_string(),
                        "Private Model Hosting".to_string(),
                        "Team Management".to_string(),
                        "24/7 Email Support".to_string(),
                        "99.9% SLA".to_string(),
                    ],
                },
                PlanTier {
                    name: "Enterprise".to_string(),
                    price: PlanPrice::Custom,
                    description: "For organizations with advanced needs and custom requirements.".to_string(),
                    quota: PlanQuota::Unlimited,
                    overage_rate: None,
                    features: vec![
                        "All Business features".to_string(),
                        "Custom Model Deployment".to_string(),
                        "On-Premises Option".to_string(),
                        "Advanced Security".to_string(),
                        "Dedicated Account Manager".to_string(),
                        "Custom SLAs".to_string(),
                    ],
                },
            ],
        }
    }
}
