use dioxus::prelude::*;

use api::{
    profile::SocialKind,
    project::{Project, partition_featured},
};
use portfolio::scroll::Anchor;

use crate::{
    common::{animation_delay, observer::use_visibility, reveal_class, use_site},
    components::icons::{Icon, IconKind},
};

// tags shown on a compact card before collapsing into "+N"
const PREVIEW_TAGS: usize = 3;

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
    index: usize,
    visible: bool,
}

#[component]
fn FeaturedCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        div {
            class: "card card-grow {reveal_class(props.visible)}",
            style: animation_delay(props.index, 200),
            div { class: "project-image",
                img { src: "{project.image}", alt: "{project.title}" }
                div { class: "project-overlay",
                    a {
                        class: "overlay-link",
                        href: "{project.github_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "View GitHub repository",
                        Icon { kind: IconKind::GitHub, size: 20 }
                    }
                    a {
                        class: "overlay-link",
                        href: "{project.live_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "View live demo",
                        Icon { kind: IconKind::ExternalLink, size: 20 }
                    }
                }
            }

            div { class: "project-body",
                h4 { "{project.title}" }
                p { "{project.description}" }
                div { class: "chip-row",
                    for tech in project.technologies.iter() {
                        span { key: "{tech}", class: "chip", "{tech}" }
                    }
                }
                div { class: "project-links",
                    a {
                        class: "text-link",
                        href: "{project.github_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { kind: IconKind::GitHub, size: 16 }
                        span { "Code" }
                    }
                    a {
                        class: "text-link",
                        href: "{project.live_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { kind: IconKind::ExternalLink, size: 16 }
                        span { "Live Demo" }
                    }
                }
            }
        }
    }
}

#[component]
fn CompactCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let (shown, hidden) = project.tag_preview(PREVIEW_TAGS);
    let shown = shown.to_vec();

    rsx! {
        div {
            class: "card compact {reveal_class(props.visible)}",
            // the compact cards start after the two featured ones
            style: animation_delay(props.index + 2, 100),
            div { class: "project-image",
                img { src: "{project.image}", alt: "{project.title}" }
            }

            div { class: "project-body",
                h4 { "{project.title}" }
                p { "{project.description}" }
                div { class: "chip-row",
                    for tech in shown.iter() {
                        span { key: "{tech}", class: "chip chip-sm", "{tech}" }
                    }
                    if hidden > 0 {
                        span { class: "chip chip-sm chip-muted", "+{hidden}" }
                    }
                }
                div { class: "compact-footer",
                    div { class: "project-links", style: "margin-top: 0;",
                        a {
                            class: "text-link",
                            href: "{project.github_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "View GitHub repository",
                            Icon { kind: IconKind::GitHub, size: 16 }
                        }
                        a {
                            class: "text-link",
                            href: "{project.live_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "View live demo",
                            Icon { kind: IconKind::ExternalLink, size: 16 }
                        }
                    }
                    span { class: "text-link", Icon { kind: IconKind::ArrowRight, size: 16 } }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let site = use_site();
    let visible = use_visibility(Anchor::Projects.content_id(), site.threshold());

    let (featured, other) = partition_featured(site.content.projects());
    let featured: Vec<Project> = featured.into_iter().cloned().collect();
    let other: Vec<Project> = other.into_iter().cloned().collect();

    let github = site
        .content
        .profile()
        .social(SocialKind::GitHub)
        .map(|s| s.url.clone());

    rsx! {
        section { id: Anchor::Projects.id(), class: "page-section",
            div { class: "container",
                div { id: Anchor::Projects.content_id(), class: reveal_class(visible()),
                    div { class: "section-header",
                        h2 { class: "section-title", "Featured Projects" }
                        p { class: "section-subtitle",
                            "A showcase of my recent work and personal projects demonstrating various technologies and solutions"
                        }
                    }

                    if !featured.is_empty() {
                        div { class: "project-group",
                            h3 { class: "subsection-title", "Highlighted Work" }
                            div { class: "card-grid",
                                for (index, project) in featured.into_iter().enumerate() {
                                    FeaturedCard {
                                        key: "{project.id}",
                                        project,
                                        index,
                                        visible: visible(),
                                    }
                                }
                            }
                        }
                    }

                    if !other.is_empty() {
                        div {
                            h3 { class: "subsection-title", "Other Projects" }
                            div { class: "card-grid three",
                                for (index, project) in other.into_iter().enumerate() {
                                    CompactCard {
                                        key: "{project.id}",
                                        project,
                                        index,
                                        visible: visible(),
                                    }
                                }
                            }
                        }
                    }

                    if let Some(url) = github {
                        div { class: "centered-action",
                            a {
                                class: "btn btn-primary",
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                Icon { kind: IconKind::GitHub, size: 20 }
                                "View More on GitHub"
                            }
                        }
                    }
                }
            }
        }
    }
}
