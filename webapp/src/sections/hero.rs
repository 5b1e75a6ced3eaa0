use dioxus::prelude::*;

use portfolio::scroll::Anchor;

use crate::{
    common::{observer::use_visibility, reveal_class, use_site, viewport::scroll_to_anchor},
    components::{
        icons::{Icon, IconKind},
        social::SocialIcon,
    },
};

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let visible = use_visibility(Anchor::Home.content_id(), site.threshold());
    let header_offset = site.config.header_offset;
    let profile = site.content.profile().clone();

    rsx! {
        section { id: Anchor::Home.id(), class: "hero",
            div { class: "container",
                div { id: Anchor::Home.content_id(), class: reveal_class(visible()),
                    div { class: "avatar", "{profile.initials}" }

                    h1 { class: "hero-title",
                        "Hi, I'm "
                        span { class: "gradient-text", "{profile.name}" }
                    }
                    p { class: "hero-role", "{profile.role}" }
                    p { class: "hero-tagline", "{profile.tagline}" }

                    div { class: "hero-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| scroll_to_anchor(Anchor::About.id(), header_offset),
                            "View Portfolio"
                            Icon { kind: IconKind::ArrowDown, size: 20 }
                        }
                        a {
                            class: "btn btn-outline",
                            href: "{profile.resume_url}",
                            download: "",
                            Icon { kind: IconKind::Download, size: 20 }
                            "Download Resume"
                        }
                    }

                    div { class: "social-row",
                        for link in profile.socials.iter().cloned() {
                            SocialIcon { key: "{link.name}", link, class: "icon-button" }
                        }
                    }
                }

                div { class: "scroll-indicator",
                    Icon { kind: IconKind::ArrowDown, size: 24 }
                }
            }
        }
    }
}
