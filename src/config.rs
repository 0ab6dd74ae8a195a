use crate::utils::pager::{DEFAULT_PAGE_SIZE, MAXIMUM_PAGE_SIZE};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAXIMUM_PAGE_SIZE,
        }
    }
}

impl PagingConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, anyhow::Error> {
        let config: PagingConfig = toml::from_str(raw)?;
        if config.default_page_size == 0 || config.max_page_size == 0 {
            return Err(anyhow!("page sizes must be positive"));
        }
        if config.max_page_size > MAXIMUM_PAGE_SIZE {
            return Err(anyhow!(
                "max_page_size {} exceeds the hard limit {}",
                config.max_page_size,
                MAXIMUM_PAGE_SIZE
            ));
        }
        if config.default_page_size > config.max_page_size {
            return Err(anyhow!(
                "default_page_size {} exceeds max_page_size {}",
                config.default_page_size,
                config.max_page_size
            ));
        }
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read paging config {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}
