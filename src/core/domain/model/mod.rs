pub mod create_node_params;
pub mod image;
pub mod location;
pub mod node;
pub mod size;
pub mod upcloud_connection;
