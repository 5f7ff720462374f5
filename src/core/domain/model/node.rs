//! Domain model for nodes (UpCloud servers).

use serde::{Deserialize, Serialize};

/// A virtual machine instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Node {
    /// Server UUID.
    pub id: String,
    /// Server title.
    pub name: String,
    /// Generic lifecycle state.
    pub state: NodeState,
    /// Addresses with public access.
    pub public_ips: Vec<String>,
    /// Addresses with private access.
    pub private_ips: Vec<String>,
    /// Server attributes.
    pub extra: NodeExtra,
}

/// Vendor-specific attributes of a server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeExtra {
    /// Password for the server's VNC console.
    pub vnc_password: String,
    /// Generated login password; only reported by the create call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Provider-agnostic node lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    Running,
    Starting,
    Stopped,
    Reconfiguring,
    Error,
    Unknown,
}

impl NodeState {
    /// Maps a vendor server state to the generic state.
    pub fn from_vendor(state: &str) -> Self {
        match state {
            "started" => NodeState::Running,
            "stopped" => NodeState::Stopped,
            "maintenance" => NodeState::Reconfiguring,
            "error" => NodeState::Error,
            _ => NodeState::Unknown,
        }
    }
}
