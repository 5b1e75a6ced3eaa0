use dioxus::prelude::*;

use api::blog::BlogPost;
use portfolio::scroll::Anchor;

use crate::{
    common::{animation_delay, observer::use_visibility, reveal_class, use_site},
    components::icons::{Icon, IconKind},
};

#[derive(Clone, PartialEq, Props)]
struct PostCardProps {
    post: BlogPost,
    index: usize,
    visible: bool,
}

#[component]
fn PostCard(props: PostCardProps) -> Element {
    let post = props.post;

    rsx! {
        article {
            class: "card card-grow post-card {reveal_class(props.visible)}",
            style: animation_delay(props.index, 200),
            div { class: "project-image",
                img { src: "{post.image}", alt: "{post.title}" }
            }

            div { class: "project-body",
                div { class: "post-meta",
                    span {
                        Icon { kind: IconKind::Calendar, size: 14 }
                        "{post.display_date()}"
                    }
                    span {
                        Icon { kind: IconKind::Clock, size: 14 }
                        "{post.read_time()}"
                    }
                }
                h4 { "{post.title}" }
                p { "{post.excerpt}" }
                div { class: "chip-row", style: "margin-bottom: var(--space-4);",
                    for tag in post.tags.iter() {
                        span { key: "{tag}", class: "chip chip-sm", "{tag}" }
                    }
                }
                button { class: "btn btn-link",
                    span { "Read More" }
                    Icon { kind: IconKind::ArrowRight, size: 16 }
                }
            }
        }
    }
}

#[component]
pub fn Blog() -> Element {
    let site = use_site();
    let visible = use_visibility(Anchor::Blog.content_id(), site.threshold());
    let posts = site.content.posts().to_vec();

    rsx! {
        section { id: Anchor::Blog.id(), class: "page-section alt",
            div { class: "container",
                div { id: Anchor::Blog.content_id(), class: reveal_class(visible()),
                    div { class: "section-header",
                        h2 { class: "section-title", "Latest Blog Posts" }
                        p { class: "section-subtitle",
                            "Sharing insights about web development, best practices, and the latest technologies"
                        }
                    }

                    div { class: "card-grid three",
                        for (index, post) in posts.into_iter().enumerate() {
                            PostCard {
                                key: "{post.id}",
                                post,
                                index,
                                visible: visible(),
                            }
                        }
                    }

                    div { class: "centered-action",
                        button { class: "btn btn-outline",
                            span { "View All Posts" }
                            Icon { kind: IconKind::ArrowRight, size: 20 }
                        }
                    }

                    // the signup is presentational only
                    div { class: "card newsletter",
                        h3 { "Stay Updated" }
                        p {
                            "Subscribe to my newsletter to get the latest articles about web development, programming tips, and industry insights delivered to your inbox."
                        }
                        div { class: "newsletter-form",
                            input {
                                class: "form-input",
                                r#type: "email",
                                placeholder: "Enter your email",
                            }
                            button { class: "btn btn-primary", style: "padding: var(--space-3) var(--space-6);",
                                "Subscribe"
                            }
                        }
                    }
                }
            }
        }
    }
}
