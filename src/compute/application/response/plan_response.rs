use crate::core::domain::model::size::{Size, SizeExtra};
use serde::Deserialize;

/// Answer of `GET /plan`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlansResponse {
    pub plans: PlanList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanList {
    pub plan: Vec<Plan>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    pub name: String,
    pub core_number: u32,
    /// MiB.
    pub memory_amount: u64,
    /// GB.
    pub storage_size: u64,
    pub storage_tier: String,
    pub public_traffic_out: u64,
}

impl From<Plan> for Size {
    fn from(plan: Plan) -> Self {
        Size {
            id: plan.name.clone(),
            name: plan.name,
            ram: plan.memory_amount,
            disk: plan.storage_size,
            bandwidth: plan.public_traffic_out,
            price: None,
            extra: SizeExtra {
                core_number: plan.core_number,
                storage_tier: plan.storage_tier,
            },
        }
    }
}

impl PlansResponse {
    pub fn into_sizes(self) -> Vec<Size> {
        self.plans.plan.into_iter().map(Size::from).collect()
    }
}
