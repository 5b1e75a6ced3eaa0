use dioxus::prelude::*;

use portfolio::scroll::Anchor;

use crate::{
    common::{observer::use_visibility, reveal_class, use_site},
    components::icons::{Icon, IconKind},
};

#[component]
pub fn About() -> Element {
    let site = use_site();
    let visible = use_visibility(Anchor::About.content_id(), site.threshold());
    let profile = site.content.profile().clone();

    rsx! {
        section { id: Anchor::About.id(), class: "page-section",
            div { class: "container",
                div { id: Anchor::About.content_id(), class: reveal_class(visible()),
                    div { class: "section-header",
                        h2 { class: "section-title", "About Me" }
                        p { class: "section-subtitle", "{profile.headline}" }
                    }

                    div { class: "two-column",
                        // portrait and stats
                        div {
                            div { class: "portrait",
                                div { class: "avatar large", "{profile.initials}" }
                            }
                            div { class: "stats-grid",
                                div { class: "stat-card",
                                    div { class: "stat-value", "{profile.years_experience}+" }
                                    div { class: "stat-label", "Years Experience" }
                                }
                                div { class: "stat-card",
                                    div { class: "stat-value", "{profile.projects_completed}+" }
                                    div { class: "stat-label", "Projects Completed" }
                                }
                            }
                        }

                        div { class: "about-copy",
                            h3 { "{profile.role}" }
                            for paragraph in profile.summary.iter() {
                                p { "{paragraph}" }
                            }

                            div { class: "info-list",
                                div { class: "info-item",
                                    Icon { kind: IconKind::MapPin, size: 20 }
                                    span { "{profile.location}" }
                                }
                                div { class: "info-item",
                                    Icon { kind: IconKind::Calendar, size: 20 }
                                    span { "{profile.availability}" }
                                }
                                div { class: "info-item",
                                    Icon { kind: IconKind::Award, size: 20 }
                                    span { "{profile.education}" }
                                }
                            }

                            h4 { "Core Competencies" }
                            div { class: "chip-row",
                                for competency in profile.competencies.iter() {
                                    span { key: "{competency}", class: "chip", "{competency}" }
                                }
                            }

                            div { style: "padding-top: var(--space-6);",
                                a {
                                    class: "btn btn-primary",
                                    href: "{profile.resume_url}",
                                    download: "",
                                    Icon { kind: IconKind::Download, size: 20 }
                                    "Download Resume"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
