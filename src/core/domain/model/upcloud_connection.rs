use crate::core::domain::value_object::{UpcloudPassword, UpcloudUrl, UpcloudUsername};

/// Where and as whom the client talks to the API.
#[derive(Debug, Clone)]
pub struct UpcloudConnection {
    username: UpcloudUsername,
    password: UpcloudPassword,
    url: UpcloudUrl,
}

impl UpcloudConnection {
    pub fn new(username: UpcloudUsername, password: UpcloudPassword, url: UpcloudUrl) -> Self {
        Self {
            username,
            password,
            url,
        }
    }

    pub fn username(&self) -> &UpcloudUsername {
        &self.username
    }

    pub fn password(&self) -> &UpcloudPassword {
        &self.password
    }

    pub fn url(&self) -> &UpcloudUrl {
        &self.url
    }
}
