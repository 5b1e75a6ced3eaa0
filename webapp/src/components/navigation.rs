use dioxus::prelude::*;
use dioxus_router::prelude::*;

use portfolio::scroll::Anchor;

use crate::{
    Route,
    common::{
        theme::{toggle_theme, use_theme},
        use_site,
        viewport::scroll_to_anchor,
    },
    components::icons::{Icon, IconKind},
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    anchor: Anchor,
    menu_open: Signal<bool>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let site = use_site();
    let header_offset = site.config.header_offset;
    let anchor = props.anchor;
    let mut menu_open = props.menu_open;

    rsx! {
        button {
            class: "nav-link",
            onclick: move |_| {
                menu_open.set(false);
                scroll_to_anchor(anchor.id(), header_offset);
            },
            "{anchor.label()}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let site = use_site();
    let header_offset = site.config.header_offset;
    let prefix = site.config.storage_prefix.clone();
    let name = site.content.profile().name.clone();

    let theme = use_theme();
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "nav-bar",
            div { class: "container nav-container",
                button {
                    class: "nav-brand",
                    onclick: move |_| {
                        menu_open.set(false);
                        scroll_to_anchor(Anchor::Home.id(), header_offset);
                    },
                    "{name}"
                }

                nav { class: "nav-links",
                    for anchor in Anchor::sections() {
                        NavBarButton { key: "{anchor.id()}", anchor, menu_open }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "theme-toggle",
                        aria_label: theme().toggle_label(),
                        onclick: move |_| toggle_theme(theme, &prefix),
                        if theme().is_dark() {
                            Icon { kind: IconKind::Sun, size: 20 }
                        } else {
                            Icon { kind: IconKind::Moon, size: 20 }
                        }
                    }
                    button {
                        class: "menu-toggle",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() {
                            Icon { kind: IconKind::X, size: 20 }
                        } else {
                            Icon { kind: IconKind::Menu, size: 20 }
                        }
                    }
                }
            }

            if menu_open() {
                nav { class: "mobile-menu",
                    for anchor in Anchor::sections() {
                        NavBarButton { key: "{anchor.id()}", anchor, menu_open }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
