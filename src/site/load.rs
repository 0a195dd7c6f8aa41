use anyhow::{bail, Context};
use std::path::Path;
use tracing::info;

use super::SiteConfig;

/// Serialization format of a site definition file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteFormat {
    Yaml,
    Json,
    Toml,
}

impl SiteFormat {
    /// Pick the format from the file extension (`yaml`/`yml`, `json`, `toml`)
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(SiteFormat::Yaml),
            Some("json") => Ok(SiteFormat::Json),
            Some("toml") => Ok(SiteFormat::Toml),
            _ => bail!(
                "unsupported site definition '{}': expected a .yaml, .yml, .json or .toml file",
                path.display()
            ),
        }
    }
}

/// Parse a site definition without validating it
pub fn parse_site(content: &str, format: SiteFormat) -> anyhow::Result<SiteConfig> {
    let site = match format {
        SiteFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML site definition")?,
        SiteFormat::Json => serde_json::from_str(content).context("invalid JSON site definition")?,
        SiteFormat::Toml => toml::from_str(content).context("invalid TOML site definition")?,
    };
    Ok(site)
}

/// Read and parse a site definition file without validating it
pub fn read_site(path: &Path) -> anyhow::Result<SiteConfig> {
    let format = SiteFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read site definition '{}'", path.display()))?;

    parse_site(&content, format)
        .with_context(|| format!("failed to parse site definition '{}'", path.display()))
}

/// Read, parse and validate a site definition file
pub fn load_site(path: &Path) -> anyhow::Result<SiteConfig> {
    let site = read_site(path)?;
    site.validate()
        .with_context(|| format!("invalid site definition '{}'", path.display()))?;

    info!(
        path = %path.display(),
        nav_count = site.nav.len(),
        routes_count = site.routes.len(),
        "Site definition loaded"
    );

    Ok(site)
}
