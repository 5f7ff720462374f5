use crate::core::domain::model::node::{Node, NodeExtra, NodeState};
use serde::Deserialize;

/// Answer of `GET /server`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServersResponse {
    pub servers: ServerList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerList {
    pub server: Vec<ServerSummary>,
}

/// A server as listed by `GET /server`; only the UUID is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSummary {
    pub uuid: String,
}

impl ServersResponse {
    pub fn into_uuids(self) -> Vec<String> {
        self.servers.server.into_iter().map(|s| s.uuid).collect()
    }
}

/// Answer of `GET /server/{uuid}` and `POST /server`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerResponse {
    pub server: ServerDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerDetail {
    pub uuid: String,
    pub title: String,
    pub state: String,
    pub vnc_password: String,
    /// Only present in the answer to the create call.
    #[serde(default)]
    pub password: Option<String>,
    pub ip_addresses: IpAddressList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IpAddressList {
    pub ip_address: Vec<IpAddress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IpAddress {
    pub access: String,
    pub address: String,
}

impl ServerResponse {
    /// Maps the server with its reported state.
    pub fn into_node(self) -> Node {
        let state = NodeState::from_vendor(&self.server.state);
        self.server.into_node_with_state(state)
    }

    /// Maps a server returned by the create call.
    ///
    /// The API always reports a transitional state right after creation, so
    /// the node is reported as [`NodeState::Starting`].
    pub fn into_created_node(self) -> Node {
        self.server.into_node_with_state(NodeState::Starting)
    }
}

impl ServerDetail {
    fn into_node_with_state(self, state: NodeState) -> Node {
        let (public_ips, private_ips) = partition_addresses(self.ip_addresses.ip_address);
        Node {
            id: self.uuid,
            name: self.title,
            state,
            public_ips,
            private_ips,
            extra: NodeExtra {
                vnc_password: self.vnc_password,
                password: self.password,
            },
        }
    }
}

/// Splits addresses into (public, private) by their `access` value.
/// Other access kinds (e.g. `utility`) are dropped.
fn partition_addresses(addresses: Vec<IpAddress>) -> (Vec<String>, Vec<String>) {
    let mut public_ips = Vec::new();
    let mut private_ips = Vec::new();
    for ip in addresses {
        match ip.access.as_str() {
            "public" => public_ips.push(ip.address),
            "private" => private_ips.push(ip.address),
            _ => {}
        }
    }
    (public_ips, private_ips)
}
