use serde::Serialize;

/// Body of `POST /server/{uuid}/restart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestartServerRequest {
    restart_server: RestartServer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct RestartServer {
    stop_type: &'static str,
}

impl RestartServerRequest {
    /// A restart that powers the server off immediately instead of asking the OS to shut down.
    pub fn hard() -> Self {
        Self {
            restart_server: RestartServer { stop_type: "hard" },
        }
    }
}
