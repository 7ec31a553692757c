use serde::{Deserialize, Serialize};

/// Monthly MGH quota included with a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PlanQuota {
    /// Usage at or below this bound is covered by the plan.
    Limited(f64),
    /// No upper bound (custom quotas negotiated per contract).
    Unlimited,
}

impl PlanQuota {
    /// Whether this quota covers the given monthly usage. The bound is
    /// inclusive: usage exactly at the bound stays in this plan.
    pub fn covers(&self, monthly_mgh: f64) -> bool {
        match self {
            Self::Limited(bound) => monthly_mgh <= *bound,
            Self::Unlimited => true,
        }
    }
}

impl std::fmt::Display for PlanQuota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limited(bound) => write!(f, "{} MGH included", bound),
            Self::Unlimited => write!(f, "Custom MGH quotas"),
        }
    }
}

/// Sticker price of a plan, in whole USD per month where it applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanPrice {
    Free,
    Monthly(u32),
    Custom,
}

impl std::fmt::Display for PlanPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "Free"),
            Self::Monthly(usd) => write!(f, "${}/month", usd),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

/// A pricing bracket selected by comparing aggregate monthly usage
/// against fixed thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanTier {
    pub name: String,
    pub price: PlanPrice,
    pub description: String,
    pub quota: PlanQuota,
    /// Per-MGH rate charged beyond the included quota, e.g. "$0.40 per MGH".
    #[serde(default)]
    pub overage_rate: Option<String>,
    pub features: Vec<String>,
}

/// Pick the plan recommended for the given monthly usage.
///
/// Scans the table in its declared order (ascending by quota bound, the
/// unbounded tier last) and returns the first tier that covers the usage.
/// Returns `None` only when no tier covers it, which a validated table
/// rules out. Callers decide what an empty estimate means; zero usage is
/// covered by the smallest tier here.
pub fn recommend(plans: &[PlanTier], monthly_mgh: f64) -> Option<&PlanTier> {
    plans.iter().find(|plan| plan.quota.covers(monthly_mgh))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(name: &str, quota: PlanQuota) -> PlanTier {
        PlanTier {
            name: name.to_string(),
            price: PlanPrice::Free,
            description: String::new(),
            quota,
            overage_rate: None,
            features: vec![],
        }
    }

    fn table() -> Vec<PlanTier> {
        vec![
            tier("Starter", PlanQuota::Limited(50.0)),
            tier("Business", PlanQuota::Limited(1500.0)),
            tier("Enterprise", PlanQuota::Unlimited),
        ]
    }

    #[test]
    fn usage_below_first_bound_picks_first_tier() {
        let plans = table();
        assert_eq!(recommend(&plans, 10.0).unwrap().name, "Starter");
    }

    #[test]
    fn bound_is_inclusive_on_the_lower_tier() {
        let plans = table();
        assert_eq!(recommend(&plans, 50.0).unwrap().name, "Starter");
        assert_eq!(recommend(&plans, 1500.0).unwrap().name, "Business");
    }

    #[test]
    fn usage_just_past_a_bound_moves_up() {
        let plans = table();
        assert_eq!(recommend(&plans, 50.1).unwrap().name, "Business");
    }

    #[test]
    fn usage_past_all_finite_bounds_picks_unbounded_tier() {
        let plans = table();
        assert_eq!(recommend(&plans, 1501.0).unwrap().name, "Enterprise");
    }

    #[test]
    fn empty_table_recommends_nothing() {
        assert!(recommend(&[], 10.0).is_none());
    }

    #[test]
    fn quota_serde_roundtrips() {
        for quota in [PlanQuota::Limited(50.0), PlanQuota::Unlimited] {
            let json = serde_json::to_string(&quota).unwrap();
            let parsed: PlanQuota = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, quota);
        }
    }
}
