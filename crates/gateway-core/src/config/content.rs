//! Static content, data file, and mock fixture settings.

use serde::{Deserialize, Serialize};

/// Admin UI static file serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Directory holding the admin UI assets.
    #[serde(default = "default_admin_directory")]
    pub directory: String,
    /// `Cache-Control` max-age for admin assets, in seconds.
    #[serde(default = "default_admin_max_age")]
    pub max_age_seconds: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            directory: default_admin_directory(),
            max_age_seconds: default_admin_max_age(),
        }
    }
}

/// JSON data files exposed under `/api/data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory searched for `<name>.json`.
    #[serde(default = "default_data_directory")]
    pub directory: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: default_data_directory(),
        }
    }
}

/// Addresses baked into the mock stream fixtures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// RTMP ingest base, room name is appended.
    #[serde(default = "default_rtmp_base")]
    pub rtmp_base_url: String,
    /// SRS playback base for FLV/HLS, room name is appended.
    #[serde(default = "default_play_base")]
    pub play_base_url: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            rtmp_base_url: default_rtmp_base(),
            play_base_url: default_play_base(),
        }
    }
}

fn default_admin_directory() -> String {
    "admin".to_string()
}

fn default_admin_max_age() -> u64 {
    86_400
}

fn default_data_directory() -> String {
    "data".to_string()
}

fn default_rtmp_base() -> String {
    "rtmp://192.168.31.189:1935/live".to_string()
}

fn default_play_base() -> String {
    "http://192.168.31.189:8086/live".to_string()
}
