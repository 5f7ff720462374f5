//! Domain model for images (UpCloud template and CD-ROM storages).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bootable image nodes can be created from.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Image {
    /// Storage UUID.
    pub id: String,
    /// Storage title.
    pub name: String,
    /// Storage attributes.
    pub extra: ImageExtra,
}

/// Vendor-specific attributes of a storage.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ImageExtra {
    /// Access scope ("public" or "private").
    pub access: String,
    /// License cost of the storage.
    pub license: f64,
    /// Storage size in GB.
    pub size: u64,
    /// Storage lifecycle state (e.g., "online").
    pub state: String,
    /// Kind of storage; decides how a node is provisioned from it.
    #[serde(rename = "type")]
    pub storage_type: StorageType,
}

/// The kind of storage behind an image.
///
/// Serializes to and from the vendor's literal `type` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum StorageType {
    /// A template that is cloned into the node's disk.
    Template,
    /// A CD-ROM image attached next to a freshly created blank disk.
    Cdrom,
    /// Any other storage type; nodes cannot be provisioned from it.
    Other(String),
}

impl StorageType {
    pub fn as_str(&self) -> &str {
        match self {
            StorageType::Template => "template",
            StorageType::Cdrom => "cdrom",
            StorageType::Other(other) => other,
        }
    }
}

impl From<String> for StorageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "template" => StorageType::Template,
            "cdrom" => StorageType::Cdrom,
            _ => StorageType::Other(value),
        }
    }
}

impl From<StorageType> for String {
    fn from(value: StorageType) -> Self {
        match value {
            StorageType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
