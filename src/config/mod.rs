use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Locations relative to the repository root.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    #[serde(default = "default_template_dir")]
    pub template_dir: String,
    #[serde(default = "default_sessions_dir")]
    pub sessions_dir: String,
    #[serde(default = "default_slug_file")]
    pub slug_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            sessions_dir: default_sessions_dir(),
            slug_file: default_slug_file(),
        }
    }
}

/// File names inside the template directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateConfig {
    #[serde(default = "default_document")]
    pub document: String,
    #[serde(default = "default_bibliography")]
    pub bibliography: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_abstract_placeholder")]
    pub abstract_placeholder: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
            bibliography: default_bibliography(),
            assets_dir: default_assets_dir(),
            abstract_placeholder: default_abstract_placeholder(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_type")]
    pub default_type: String,
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_type: default_session_type(),
            title_prefix: default_title_prefix(),
        }
    }
}

fn default_template_dir() -> String {
    "templates/session".to_string()
}

fn default_sessions_dir() -> String {
    "sessions".to_string()
}

fn default_slug_file() -> String {
    ".session_slug".to_string()
}

fn default_document() -> String {
    "index.qmd".to_string()
}

fn default_bibliography() -> String {
    "paper.bib".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_abstract_placeholder() -> String {
    "_Paste the paper abstract here._".to_string()
}

fn default_session_type() -> String {
    "paper-discussion".to_string()
}

fn default_title_prefix() -> String {
    "[Session]".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file means "use the defaults".
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("paths.template_dir", &self.paths.template_dir),
            ("paths.sessions_dir", &self.paths.sessions_dir),
            ("paths.slug_file", &self.paths.slug_file),
            ("template.document", &self.template.document),
            ("template.bibliography", &self.template.bibliography),
            ("template.assets_dir", &self.template.assets_dir),
            ("session.default_type", &self.session.default_type),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                anyhow::bail!("{} must not be empty", key);
            }
        }
        Ok(())
    }

    pub fn template_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.template_dir)
    }

    pub fn sessions_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.sessions_dir)
    }

    pub fn slug_file(&self, root: &Path) -> PathBuf {
        root.join(&self.paths.slug_file)
    }
}
