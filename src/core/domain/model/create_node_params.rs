//! Parameters for creating a node.

use crate::core::domain::{
    error::{UpcloudResult, ValidationError},
    model::{image::Image, location::Location, size::Size},
    value_object::SshPublicKey,
};

/// Login user created on the server when no other name is given.
pub const DEFAULT_LOGIN_USER: &str = "root";

/// How the login user of a new node authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginAuth {
    /// The API generates a password and returns it with the created node.
    #[default]
    Password,
    /// The given public key is installed for the login user.
    SshKey(SshPublicKey),
}

/// Everything needed to create a node. Build it with [`CreateNodeParams::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct CreateNodeParams {
    pub(crate) name: String,
    pub(crate) image: Image,
    pub(crate) size: Size,
    pub(crate) location: Location,
    pub(crate) username: String,
    pub(crate) auth: LoginAuth,
}

impl CreateNodeParams {
    pub fn builder() -> CreateNodeParamsBuilder {
        CreateNodeParamsBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn size(&self) -> &Size {
        &self.size
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn auth(&self) -> &LoginAuth {
        &self.auth
    }
}

/// Builder for [`CreateNodeParams`]
#[derive(Debug, Default)]
pub struct CreateNodeParamsBuilder {
    name: Option<String>,
    image: Option<Image>,
    size: Option<Size>,
    location: Option<Location>,
    username: Option<String>,
    auth: LoginAuth,
}

impl CreateNodeParamsBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Name of the login user created on the server (defaults to `root`).
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Installs `key` for the login user instead of generating a password.
    pub fn ssh_key(mut self, key: SshPublicKey) -> Self {
        self.auth = LoginAuth::SshKey(key);
        self
    }

    pub fn auth(mut self, auth: LoginAuth) -> Self {
        self.auth = auth;
        self
    }

    pub fn build(self) -> UpcloudResult<CreateNodeParams> {
        let name = self.name.filter(|n| !n.is_empty()).ok_or_else(|| missing("name"))?;
        let image = self.image.ok_or_else(|| missing("image"))?;
        let size = self.size.ok_or_else(|| missing("size"))?;
        let location = self.location.ok_or_else(|| missing("location"))?;

        let username = self
            .username
            .unwrap_or_else(|| DEFAULT_LOGIN_USER.to_string());
        if username.is_empty() {
            return Err(ValidationError::Field {
                field: "username".to_string(),
                message: "Login username cannot be empty".to_string(),
            }
            .into());
        }

        Ok(CreateNodeParams {
            name,
            image,
            size,
            location,
            username,
            auth: self.auth,
        })
    }
}

fn missing(field: &str) -> ValidationError {
    ValidationError::Field {
        field: field.to_string(),
        message: format!("{} is required", field),
    }
}
