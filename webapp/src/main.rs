#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
use common::{Site, theme::use_theme_provider};

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod sections;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// sections are reached by scrolling, not by routing, so there is a single page
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
}

#[component]
pub fn App() -> Element {
    let site = use_context_provider(Site::load);
    let theme = use_theme_provider(&site.config.storage_prefix);

    rsx! {
        style { "{common::style::PORTFOLIO_STYLES}" }
        div { class: "app {theme().class()}",
            Router::<Route> { config: RouterConfig::default }
        }
    }
}
