use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::image::ImageRef;

/// rebuildr.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RebuildrConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub image: ImageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Working copy location (defaults to the invocation directory)
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Remote queried for staleness and pulled from
    #[serde(default = "default_remote")]
    pub remote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Image name
    #[serde(default = "default_name")]
    pub name: String,
    /// Image tag
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Registry prefix, e.g. "registry.example.com/homelab".
    /// When None the image is pushed under its bare name.
    pub registry: Option<String>,
    /// Dockerfile path, relative to the working copy
    #[serde(default = "default_dockerfile")]
    pub dockerfile: String,
    /// Build context, relative to the working copy
    #[serde(default = "default_context")]
    pub context: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            remote: default_remote(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tag: default_tag(),
            registry: None,
            dockerfile: default_dockerfile(),
            context: default_context(),
        }
    }
}

impl RebuildrConfig {
    /// Load from rebuildr.toml at the given path, or return defaults if not found.
    pub fn load(dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = dir.join("rebuildr.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// The fully qualified reference of the image this config builds.
    pub fn image_ref(&self) -> ImageRef {
        ImageRef {
            registry: self.image.registry.clone(),
            name: self.image.name.clone(),
            tag: self.image.tag.clone(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_remote() -> String {
    "origin".to_owned()
}

fn default_name() -> String {
    "mqtt-exporter".to_owned()
}

fn default_tag() -> String {
    "latest".to_owned()
}

fn default_dockerfile() -> String {
    "Dockerfile".to_owned()
}

fn default_context() -> String {
    ".".to_owned()
}
