//! Development server configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Local dev server parameters, present in the final configuration only when
/// the build mode is development.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Open the browser when the server starts.
    #[serde(default)]
    pub open: bool,

    /// Directory containing static assets to serve in development.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open: false,
            static_dir: None,
        }
    }
}

impl DevServerOptions {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

fn default_host() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    8080
}
