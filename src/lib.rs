mod auth;
mod compute;
mod config;
mod core;


pub use crate::compute::{
    application::request::create_server_request::{CreateServerRequest, StorageDevice},
    driver::NodeDriver,
};
pub use crate::config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_TIMEOUT, RateLimitConfig};
pub use crate::core::domain::{
    error::{UpcloudError, UpcloudResult, ValidationError},
    model::{
        create_node_params::{CreateNodeParams, CreateNodeParamsBuilder, LoginAuth},
        image::{Image, ImageExtra, StorageType},
        location::{Location, PROVIDER_NAME},
        node::{Node, NodeExtra, NodeState},
        size::{Size, SizeExtra},
        upcloud_connection::UpcloudConnection,
    },
    value_object::{DEFAULT_API_URL, SshPublicKey, UpcloudPassword, UpcloudUrl, UpcloudUsername},
};

use crate::{
    compute::application::{
        request::restart_server_request::RestartServerRequest,
        response::{
            plan_response::PlansResponse,
            server_response::{ServerResponse, ServersResponse},
            storage_response::{StoragesResponse, merge_images},
            zone_response::ZonesResponse,
        },
    },
    core::infrastructure::api_client::ApiClient,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// A Client for the UpCloud compute API
///
/// This client provides a safe, ergonomic interface for:
/// - Listing zones, plans, storages and servers as generic
///   locations, sizes, images and nodes
/// - Creating servers from template or CD-ROM images
/// - Restarting servers
///
/// The operations live on the [`NodeDriver`] trait.
///
/// # Examples
///
/// ```no_run
/// use leeca_upcloud::{NodeDriver, UpcloudClient, UpcloudResult};
///
/// #[tokio::main]
/// async fn main() -> UpcloudResult<()> {
///     let client = UpcloudClient::builder()
///         .credentials("api-user", "api-password")
///         .build()?;
///
///     for location in client.list_locations().await? {
///         println!("{} ({})", location.name, location.country);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct UpcloudClient {
    pub(crate) api_client: ApiClient,
}

/// Builder for UpcloudClient configuration
#[derive(Debug, Default)]
pub struct UpcloudClientBuilder {
    username: Option<String>,
    password: Option<String>,
    base_url: Option<String>,
    api_version: Option<String>,
    timeout: Option<Duration>,
    rate_limit: Option<RateLimitConfig>,
}

impl UpcloudClientBuilder {
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Overrides the API host (defaults to [`DEFAULT_API_URL`]).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Overrides the API version path segment (defaults to [`DEFAULT_API_VERSION`]).
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Paces outgoing requests on the client side.
    pub fn rate_limit(mut self, requests_per_second: u32, burst_size: u32) -> Self {
        self.rate_limit = Some(RateLimitConfig {
            requests_per_second,
            burst_size,
        });
        self
    }

    pub fn build(self) -> UpcloudResult<UpcloudClient> {
        let username = UpcloudUsername::new(self.username.ok_or_else(|| ValidationError::Field {
            field: "username".to_string(),
            message: "Username is required".to_string(),
        })?)?;

        let password = UpcloudPassword::new(self.password.ok_or_else(|| ValidationError::Field {
            field: "password".to_string(),
            message: "Password is required".to_string(),
        })?)?;

        let base_url = match self.base_url {
            Some(url) => UpcloudUrl::new(&url)?,
            None => UpcloudUrl::default(),
        };

        let config = ClientConfig {
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            rate_limit: self.rate_limit,
        };

        let connection = UpcloudConnection::new(username, password, base_url);
        Ok(UpcloudClient {
            api_client: ApiClient::new(connection, config)?,
        })
    }
}

impl UpcloudClient {
    /// Creates a new builder for UpcloudClient configuration
    pub fn builder() -> UpcloudClientBuilder {
        UpcloudClientBuilder::default()
    }

    /// Builds a client from the environment, loading a `.env` file first if present.
    ///
    /// - `UPCLOUD_USERNAME` (required)
    /// - `UPCLOUD_PASSWORD` (required)
    /// - `UPCLOUD_API_URL` (optional, defaults to [`DEFAULT_API_URL`])
    pub fn from_env() -> UpcloudResult<Self> {
        dotenvy::dotenv().ok();

        let mut builder = Self::builder().credentials(
            required_env("UPCLOUD_USERNAME")?,
            required_env("UPCLOUD_PASSWORD")?,
        );
        if let Ok(url) = std::env::var("UPCLOUD_API_URL") {
            builder = builder.base_url(url);
        }
        builder.build()
    }

    /// Returns the connection details the client was built with.
    pub fn connection(&self) -> &UpcloudConnection {
        self.api_client.connection()
    }

    /// Returns the transport settings the client was built with.
    pub fn config(&self) -> &ClientConfig {
        self.api_client.config()
    }

    /// Fetches a single node by server UUID.
    pub async fn get_node(&self, id: &str) -> UpcloudResult<Node> {
        let response: ServerResponse = self.api_client.get(&["server", server_id(id)?]).await?;
        Ok(response.into_node())
    }
}

#[async_trait]
impl NodeDriver for UpcloudClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn list_locations(&self) -> UpcloudResult<Vec<Location>> {
        let response: ZonesResponse = self.api_client.get(&["zone"]).await?;
        Ok(response.into_locations())
    }

    async fn list_sizes(&self) -> UpcloudResult<Vec<Size>> {
        let response: PlansResponse = self.api_client.get(&["plan"]).await?;
        Ok(response.into_sizes())
    }

    async fn list_images(&self) -> UpcloudResult<Vec<Image>> {
        let templates: StoragesResponse = self.api_client.get(&["storage", "template"]).await?;
        let cdroms: StoragesResponse = self.api_client.get(&["storage", "cdrom"]).await?;
        Ok(merge_images(templates, cdroms))
    }

    async fn list_nodes(&self) -> UpcloudResult<Vec<Node>> {
        let response: ServersResponse = self.api_client.get(&["server"]).await?;
        let uuids = response.into_uuids();
        debug!(count = uuids.len(), "fetching server details");

        let mut nodes = Vec::with_capacity(uuids.len());
        for uuid in uuids {
            nodes.push(self.get_node(&uuid).await?);
        }
        Ok(nodes)
    }

    async fn create_node(&self, params: &CreateNodeParams) -> UpcloudResult<Node> {
        let body = CreateServerRequest::new(params)?;
        let response: ServerResponse = self.api_client.post(&["server"], &body).await?;
        let node = response.into_created_node();
        info!(node_id = %node.id, zone = %params.location().id, "server created");
        Ok(node)
    }

    async fn reboot_node(&self, node: &Node) -> UpcloudResult<()> {
        let segments = ["server", server_id(&node.id)?, "restart"];
        self.api_client
            .post_discard(&segments, &RestartServerRequest::hard())
            .await?;
        info!(node_id = %node.id, "server restart requested");
        Ok(())
    }
}

/// Server UUIDs travel as a single path segment; dot segments would be
/// resolved away by the URL parser.
fn server_id(id: &str) -> UpcloudResult<&str> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ValidationError::Field {
            field: "id".to_string(),
            message: format!("'{}' is not a server UUID", id),
        }
        .into());
    }
    Ok(id)
}

fn required_env(name: &str) -> UpcloudResult<String> {
    std::env::var(name).map_err(|_| {
        ValidationError::Field {
            field: name.to_string(),
            message: format!("{} is not set", name),
        }
        .into()
    })
}
