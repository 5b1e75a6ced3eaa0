pub mod config;
pub mod contact;
pub mod content;
pub mod scroll;
pub mod theme;
pub mod visibility;

use anyhow::Result;

use crate::{
    config::{SiteConfig, parse_config},
    content::{PORTFOLIO_DOC, TomlContent},
};

// everything the page needs at startup, read from the embedded document
pub fn load_embedded() -> Result<(SiteConfig, TomlContent)> {
    let config = parse_config(PORTFOLIO_DOC)?;
    let content = TomlContent::embedded()?;

    Ok((config, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let (config, _) = load_embedded().unwrap();

        assert_eq!(config, SiteConfig::default());
    }
}
