//! Fixed JSON payloads returned by the plain endpoints.

use serde::Serialize;

/// Body of `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub health: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            health: "ok".to_string(),
        }
    }
}

/// Body of `/` and `/bye`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub msg: String,
}

impl Message {
    /// Greeting served from `/`.
    pub fn hello() -> Self {
        Self {
            msg: "Hello World".to_string(),
        }
    }

    /// Farewell served from `/bye`.
    pub fn bye() -> Self {
        Self {
            msg: "Bye Bye".to_string(),
        }
    }
}
