use dioxus::prelude::*;

use api::skill::Skill;
use portfolio::scroll::Anchor;

use crate::{
    common::{animation_delay, observer::use_visibility, reveal_class, use_site},
    components::icons::{Icon, IconKind},
};

#[derive(Clone, PartialEq, Props)]
struct SkillBarProps {
    skill: Skill,
    index: usize,
    visible: bool,
}

#[component]
fn SkillBar(props: SkillBarProps) -> Element {
    let skill = props.skill;
    let width = skill.bar_width(props.visible);
    let delay = props.index * 100;

    rsx! {
        div { class: "skill-bar",
            div { class: "skill-meta",
                span { "{skill.name}" }
                span { "{skill.level}%" }
            }
            div { class: "skill-track",
                div {
                    class: "skill-fill",
                    style: "width: {width}; transition-delay: {delay}ms;",
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    let site = use_site();
    let visible = use_visibility(Anchor::Skills.content_id(), site.threshold());
    let categories = site.content.skill_categories().to_vec();
    let technologies = site.content.additional_technologies().to_vec();

    rsx! {
        section { id: Anchor::Skills.id(), class: "page-section alt",
            div { class: "container",
                div { id: Anchor::Skills.content_id(), class: reveal_class(visible()),
                    div { class: "section-header",
                        h2 { class: "section-title", "Skills & Technologies" }
                        p { class: "section-subtitle",
                            "A comprehensive overview of my technical expertise and proficiency levels"
                        }
                    }

                    div { class: "card-grid",
                        for (category_index, category) in categories.iter().enumerate() {
                            div {
                                key: "{category.title}",
                                class: "card skill-card {reveal_class(visible())}",
                                style: animation_delay(category_index, 200),
                                div { class: "card-heading",
                                    Icon { kind: IconKind::skill(category.icon), size: 24 }
                                    h3 { "{category.title}" }
                                }
                                for (skill_index, skill) in category.skills.iter().enumerate() {
                                    SkillBar {
                                        key: "{skill.name}",
                                        skill: skill.clone(),
                                        index: category.bar_index(category_index, skill_index),
                                        visible: visible(),
                                    }
                                }
                            }
                        }
                    }

                    if !technologies.is_empty() {
                        div { class: "extra-skills",
                            h3 { class: "subsection-title", "Additional Technologies" }
                            div { class: "chip-row",
                                for tech in technologies.iter() {
                                    span { key: "{tech}", class: "chip-outline chip", "{tech}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
