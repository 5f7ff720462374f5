//! Provider-agnostic compute operations.

use crate::core::domain::{
    error::UpcloudResult,
    model::{
        create_node_params::CreateNodeParams, image::Image, location::Location, node::Node,
        size::Size,
    },
};
use async_trait::async_trait;

/// The compute operations every cloud driver exposes.
///
/// Each call is a direct translation to one or more API requests; nothing is
/// cached, batched or retried.
#[async_trait]
pub trait NodeDriver: Send + Sync {
    /// Short provider tag (e.g., "upcloud").
    fn name(&self) -> &'static str;

    /// Lists the locations nodes can be created in.
    async fn list_locations(&self) -> UpcloudResult<Vec<Location>>;

    /// Lists the sizes nodes can be created with.
    async fn list_sizes(&self) -> UpcloudResult<Vec<Size>>;

    /// Lists the images nodes can be created from.
    async fn list_images(&self) -> UpcloudResult<Vec<Image>>;

    /// Lists every node of the account.
    async fn list_nodes(&self) -> UpcloudResult<Vec<Node>>;

    /// Creates a node; the returned node is always in the starting state.
    async fn create_node(&self, params: &CreateNodeParams) -> UpcloudResult<Node>;

    /// Restarts a node.
    async fn reboot_node(&self, node: &Node) -> UpcloudResult<()>;
}
