pub mod create_server_request;
pub mod restart_server_request;
