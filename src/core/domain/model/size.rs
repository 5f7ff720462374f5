//! Domain model for sizes (UpCloud plans).

use serde::{Deserialize, Serialize};

/// A fixed compute tier a node can be created with.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Size {
    /// Plan name (e.g., "1xCPU-1GB").
    pub id: String,
    /// Plan name, same as `id`.
    pub name: String,
    /// Memory in MiB.
    pub ram: u64,
    /// Disk size in GB.
    pub disk: u64,
    /// Public outbound traffic allowance in MiB.
    pub bandwidth: u64,
    /// Always `None`; the API exposes no pricing.
    pub price: Option<f64>,
    /// Plan-specific attributes.
    pub extra: SizeExtra,
}

/// Vendor-specific attributes of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SizeExtra {
    /// Number of CPU cores.
    pub core_number: u32,
    /// Storage tier used for disks created with this plan (e.g., "maxiops").
    pub storage_tier: String,
}
