use dioxus::prelude::*;

use api::profile::SocialKind;
use portfolio::scroll::Anchor;

use crate::{
    common::{
        current_year, use_site,
        viewport::{back_to_top, scroll_to_anchor},
    },
    components::{
        icons::{Icon, IconKind},
        social::SocialIcon,
    },
};

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let header_offset = site.config.header_offset;
    let profile = site.content.profile().clone();
    let year = current_year();

    // the footer skips WhatsApp, it is reachable from the contact section
    let socials = profile
        .socials
        .iter()
        .filter(|s| s.kind != SocialKind::WhatsApp)
        .cloned()
        .collect::<Vec<_>>();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h3 { "{profile.name}" }
                        p {
                            "{profile.role} passionate about creating innovative digital solutions. Always learning, always building."
                        }
                        div {
                            for link in socials {
                                SocialIcon {
                                    key: "{link.name}",
                                    link,
                                    class: "footer-social",
                                    size: 20,
                                }
                            }
                        }
                    }

                    div {
                        h4 { "Quick Links" }
                        ul {
                            for anchor in Anchor::sections() {
                                li { key: "{anchor.id()}",
                                    button {
                                        class: "footer-link",
                                        onclick: move |_| scroll_to_anchor(anchor.id(), header_offset),
                                        "{anchor.label()}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 { "Services" }
                        ul {
                            for service in profile.services.iter() {
                                li { key: "{service}", "{service}" }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    div {
                        "© {year} {profile.name}. Made with "
                        span { class: "heart", Icon { kind: IconKind::Heart, size: 16 } }
                        " in {profile.location}"
                    }
                    button {
                        class: "back-to-top",
                        aria_label: "Back to top",
                        onclick: move |_| back_to_top(),
                        Icon { kind: IconKind::ArrowUp, size: 16 }
                        span { "Back to Top" }
                    }
                }
            }
        }
    }
}
