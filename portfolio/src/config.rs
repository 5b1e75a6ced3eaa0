use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::visibility::DEFAULT_THRESHOLD;

// portfolio site configuration
//
// these are the behavioral knobs of the page, as opposed to its content.  every field has a
// default, so any or all of them may be left out of the [config] table
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // height of the sticky header, subtracted from the anchor position when scrolling
    pub header_offset: f64,

    // simulated network latency of the contact form, in milliseconds
    pub submit_delay_ms: u32,

    // on-screen fraction a section needs before it animates in
    pub reveal_threshold: f64,

    // prefix for local storage keys
    pub storage_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            header_offset: 80.0,
            submit_delay_ms: 2000,
            reveal_threshold: DEFAULT_THRESHOLD,
            storage_prefix: String::from("portfolio"),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)?;

    if !(0.0..=1.0).contains(&data.config.reveal_threshold) {
        anyhow::bail!(
            "reveal_threshold must be within [0, 1], got {}",
            data.config.reveal_threshold
        );
    }

    debug!("successfully parsed site config");
    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_uses_defaults() {
        let config = parse_config("[profile]\nname = \"x\"\n").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.submit_delay_ms, 2000);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config = parse_config("[config]\nsubmit_delay_ms = 500\n").unwrap();

        assert_eq!(config.submit_delay_ms, 500);
        assert_eq!(config.reveal_threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.storage_prefix, "portfolio");
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        assert!(parse_config("[config]\nreveal_threshold = 1.5\n").is_err());
    }
}
