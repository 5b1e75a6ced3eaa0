use dioxus::prelude::*;

use api::profile::SocialLink;

use crate::components::icons::{Icon, IconKind};

#[derive(Clone, PartialEq, Props)]
pub struct SocialIconProps {
    link: SocialLink,
    class: &'static str,
    #[props(default = 24)]
    size: u32,
}

// an icon-only profile link
//
// mail-to links open in place, everything else in a new tab
#[component]
pub fn SocialIcon(props: SocialIconProps) -> Element {
    let link = props.link;
    let kind = IconKind::social(link.kind);

    rsx! {
        if link.opens_new_tab() {
            a {
                class: props.class,
                href: "{link.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "{link.name}",
                Icon { kind, size: props.size }
            }
        } else {
            a {
                class: props.class,
                href: "{link.url}",
                aria_label: "{link.name}",
                Icon { kind, size: props.size }
            }
        }
    }
}
