use crate::core::domain::model::image::{Image, ImageExtra, StorageType};
use serde::Deserialize;

/// Answer of `GET /storage/template` and `GET /storage/cdrom`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoragesResponse {
    pub storages: StorageList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageList {
    pub storage: Vec<Storage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
    pub uuid: String,
    pub title: String,
    pub access: String,
    pub license: f64,
    /// GB.
    pub size: u64,
    pub state: String,
    #[serde(rename = "type")]
    pub storage_type: StorageType,
}

impl From<Storage> for Image {
    fn from(storage: Storage) -> Self {
        Image {
            id: storage.uuid,
            name: storage.title,
            extra: ImageExtra {
                access: storage.access,
                license: storage.license,
                size: storage.size,
                state: storage.state,
                storage_type: storage.storage_type,
            },
        }
    }
}

impl StoragesResponse {
    pub fn into_images(self) -> Vec<Image> {
        self.storages.storage.into_iter().map(Image::from).collect()
    }
}

/// One image catalog: every template first, then every CD-ROM, each in API order.
pub fn merge_images(templates: StoragesResponse, cdroms: StoragesResponse) -> Vec<Image> {
    let mut images = templates.into_images();
    images.extend(cdroms.into_images());
    images
}
