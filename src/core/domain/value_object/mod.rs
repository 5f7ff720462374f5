mod ssh_public_key;
mod upcloud_password;
mod upcloud_url;
mod upcloud_username;

pub use ssh_public_key::SshPublicKey;
pub use upcloud_password::UpcloudPassword;
pub use upcloud_url::{DEFAULT_API_URL, UpcloudUrl};
pub use upcloud_username::UpcloudUsername;
