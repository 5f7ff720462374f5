//! Body of `POST /server`.
//!
//! The document has a fixed shape:
//!
//! ```text
//! { "server": {
//!     "title": <name>, "hostname": "localhost", "plan": <size.id>, "zone": <location.id>,
//!     "login_user": {
//!         "username": ..,
//!         "create_password": "yes" | "ssh_keys": { "ssh_key": [..] }
//!     },
//!     "storage_devices": { "storage_device": [ .. ] }
//! }}
//! ```

use crate::core::domain::{
    error::{UpcloudError, UpcloudResult, ValidationError},
    model::{
        create_node_params::{CreateNodeParams, LoginAuth},
        image::{Image, StorageType},
        size::Size,
    },
    value_object::SshPublicKey,
};
use serde::Serialize;

/// Hostname every new server is created with.
const DEFAULT_HOSTNAME: &str = "localhost";

/// The create-server request document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateServerRequest {
    server: ServerSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ServerSpec {
    title: String,
    hostname: &'static str,
    plan: String,
    zone: String,
    login_user: LoginUser,
    storage_devices: StorageDevices,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct LoginUser {
    username: String,
    #[serde(flatten)]
    credential: LoginCredential,
}

/// Exactly one of the two forms ends up in `login_user`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum LoginCredential {
    CreatePassword { create_password: &'static str },
    SshKeys { ssh_keys: SshKeys },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct SshKeys {
    ssh_key: Vec<SshPublicKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct StorageDevices {
    storage_device: Vec<StorageDevice>,
}

/// One entry of `storage_devices.storage_device`.
///
/// The API provisions entries in array order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum StorageDevice {
    /// Copy an existing template into a new disk.
    Clone { title: String, storage: String },
    /// Create a blank disk.
    Create {
        title: String,
        size: u64,
        tier: String,
    },
    /// Attach an existing storage to the server.
    Attach {
        storage: String,
        #[serde(rename = "type")]
        device_type: &'static str,
    },
}

/// Picks the storage devices for a node booting from `image` on plan `size`.
///
/// - a template is cloned into the node's disk;
/// - a CD-ROM needs a blank disk sized and tiered by the plan first, then the
///   CD-ROM itself attached as the boot source.
///
/// # Errors
/// Returns `ValidationError::ConstraintViolation` for any other storage type.
pub fn storage_devices_for(
    image: &Image,
    size: &Size,
) -> Result<Vec<StorageDevice>, ValidationError> {
    match &image.extra.storage_type {
        StorageType::Template => Ok(vec![StorageDevice::Clone {
            title: image.name.clone(),
            storage: image.id.clone(),
        }]),
        StorageType::Cdrom => Ok(vec![
            StorageDevice::Create {
                title: image.name.clone(),
                size: size.disk,
                tier: size.extra.storage_tier.clone(),
            },
            StorageDevice::Attach {
                storage: image.id.clone(),
                device_type: "cdrom",
            },
        ]),
        StorageType::Other(other) => Err(ValidationError::ConstraintViolation(format!(
            "Cannot create a node from image '{}' of storage type '{}'",
            image.id, other
        ))),
    }
}

impl CreateServerRequest {
    /// Builds the request document for `params`.
    ///
    /// # Errors
    /// Returns `UpcloudError::Validation` when the image cannot be provisioned from.
    pub fn new(params: &CreateNodeParams) -> UpcloudResult<Self> {
        let storage_device = storage_devices_for(params.image(), params.size())?;

        let credential = match params.auth() {
            LoginAuth::Password => LoginCredential::CreatePassword {
                create_password: "yes",
            },
            LoginAuth::SshKey(key) => LoginCredential::SshKeys {
                ssh_keys: SshKeys {
                    ssh_key: vec![key.clone()],
                },
            },
        };

        Ok(Self {
            server: ServerSpec {
                title: params.name().to_string(),
                hostname: DEFAULT_HOSTNAME,
                plan: params.size().id.clone(),
                zone: params.location().id.clone(),
                login_user: LoginUser {
                    username: params.username().to_string(),
                    credential,
                },
                storage_devices: StorageDevices { storage_device },
            },
        })
    }

    /// Renders the document as a JSON string.
    pub fn to_json(&self) -> UpcloudResult<String> {
        serde_json::to_string(self).map_err(|e| UpcloudError::Serialization(e.to_string()))
    }
}
