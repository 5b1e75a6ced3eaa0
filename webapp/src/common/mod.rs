pub mod observer;
pub mod storage;
pub mod style;
pub mod theme;
pub mod viewport;

use std::rc::Rc;

use chrono::{Datelike, Local};
use dioxus::prelude::*;
use tracing::error;

use api::ContentProvider;
use portfolio::{config::SiteConfig, content::TomlContent, visibility::Threshold};

// configuration and content shared by every section through context
#[derive(Clone)]
pub struct Site {
    pub config: Rc<SiteConfig>,
    pub content: Rc<dyn ContentProvider>,
}

impl Site {
    // a broken document should not take the page down, so fall back to an empty one
    pub fn load() -> Self {
        match portfolio::load_embedded() {
            Ok((config, content)) => Site {
                config: Rc::new(config),
                content: Rc::new(content),
            },
            Err(err) => {
                error!("failed to load portfolio content: {err:#}");
                Site {
                    config: Rc::new(SiteConfig::default()),
                    content: Rc::new(TomlContent::default()),
                }
            }
        }
    }

    pub fn threshold(&self) -> Threshold {
        Threshold::new(self.config.reveal_threshold)
    }
}

pub fn use_site() -> Site {
    use_context::<Site>()
}

// classes for an element that animates in once its section has been seen
pub fn reveal_class(visible: bool) -> &'static str {
    if visible { "reveal revealed" } else { "reveal" }
}

pub fn animation_delay(index: usize, step_ms: usize) -> String {
    format!("animation-delay: {}ms;", index * step_ms)
}

pub fn current_year() -> i32 {
    Local::now().year()
}
