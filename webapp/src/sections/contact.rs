use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, info, warn};

use api::profile::ChannelKind;
use portfolio::{
    contact::{ContactForm, Field, SubmitRejected, SubmitState},
    scroll::Anchor,
};

use crate::{
    common::{observer::use_visibility, reveal_class, use_site},
    components::{
        icons::{Icon, IconKind},
        social::SocialIcon,
    },
};

fn channel_icon(kind: ChannelKind) -> IconKind {
    match kind {
        ChannelKind::Email => IconKind::Mail,
        ChannelKind::Phone => IconKind::Phone,
        ChannelKind::Location => IconKind::MapPin,
    }
}

#[derive(Clone, PartialEq, Props)]
struct FormFieldProps {
    field: Field,
    form: Signal<ContactForm>,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let field = props.field;
    let mut form = props.form;
    let value = form.read().get(field).to_owned();
    let input_type = if field == Field::Email { "email" } else { "text" };

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: field.key(), "{field.label()} *" }
            match field {
                Field::Message => rsx! {
                    textarea {
                        class: "form-input",
                        id: field.key(),
                        name: field.key(),
                        rows: "6",
                        required: true,
                        placeholder: field.placeholder(),
                        value: "{value}",
                        oninput: move |evt: FormEvent| form.write().set(field, evt.value()),
                    }
                },
                _ => rsx! {
                    input {
                        class: "form-input",
                        r#type: input_type,
                        id: field.key(),
                        name: field.key(),
                        required: true,
                        placeholder: field.placeholder(),
                        value: "{value}",
                        oninput: move |evt: FormEvent| form.write().set(field, evt.value()),
                    }
                },
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let visible = use_visibility(Anchor::Contact.content_id(), site.threshold());
    let mut form = use_signal(ContactForm::new);

    let profile = site.content.profile().clone();
    let channels = profile.contact_channels();
    let delay_ms = site.config.submit_delay_ms;

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        // bind first so the write guard is released before anything else reads the form
        let begun = form.write().begin_submit();
        match begun {
            Ok(message) => {
                info!(from = %message.email, subject = %message.subject, "contact message submitted");
                spawn(async move {
                    TimeoutFuture::new(delay_ms).await;
                    let acknowledgement = form.write().finish_submit();

                    match web_sys::window() {
                        Some(window) => {
                            if let Err(err) = window.alert_with_message(acknowledgement) {
                                warn!("failed to show acknowledgement: {err:?}");
                            }
                        }
                        None => warn!("no window to acknowledge the message in"),
                    }
                });
            }
            Err(SubmitRejected::InFlight) => debug!("ignoring submit while a message is in flight"),
            Err(err) => warn!("contact form rejected: {err}"),
        }
    };

    let state = form.read().state();

    rsx! {
        section { id: Anchor::Contact.id(), class: "page-section",
            div { class: "container",
                div { id: Anchor::Contact.content_id(), class: reveal_class(visible()),
                    div { class: "section-header",
                        h2 { class: "section-title", "Get In Touch" }
                        p { class: "section-subtitle",
                            "Have a project in mind or want to collaborate? I'd love to hear from you. Let's create something amazing together!"
                        }
                    }

                    div { class: "two-column",
                        div {
                            h3 { class: "subsection-title", "Contact Information" }

                            for channel in channels.into_iter() {
                                div { key: "{channel.title}", class: "channel",
                                    div { class: "channel-icon",
                                        Icon { kind: channel_icon(channel.kind), size: 24 }
                                    }
                                    div {
                                        h4 { "{channel.title}" }
                                        a { href: "{channel.link}", "{channel.value}" }
                                    }
                                }
                            }

                            div { style: "margin-bottom: var(--space-8);",
                                h4 { class: "form-label", "Follow Me" }
                                div { class: "social-row",
                                    for link in profile.socials.iter().cloned() {
                                        SocialIcon {
                                            key: "{link.name}",
                                            link,
                                            class: "icon-button",
                                            size: 20,
                                        }
                                    }
                                }
                            }

                            div { class: "availability",
                                h4 { "Let's Work Together" }
                                p {
                                    "I'm currently available for freelance work and full-time opportunities. Whether you need a new website, web application, or want to improve an existing project, I'm here to help."
                                }
                                div { class: "availability-badge",
                                    span { class: "availability-dot" }
                                    "Available for new projects"
                                }
                            }
                        }

                        div { class: "card form-card",
                            h3 { class: "subsection-title", "Send Me a Message" }

                            form { onsubmit: submit,
                                div { class: "form-row",
                                    FormField { field: Field::Name, form }
                                    FormField { field: Field::Email, form }
                                }
                                FormField { field: Field::Subject, form }
                                FormField { field: Field::Message, form }

                                button {
                                    class: "btn btn-primary btn-block",
                                    r#type: "submit",
                                    disabled: state == SubmitState::Submitting,
                                    match state {
                                        SubmitState::Submitting => rsx! {
                                            span { class: "spinner" }
                                            span { "Sending..." }
                                        },
                                        SubmitState::Idle => rsx! {
                                            Icon { kind: IconKind::Send, size: 20 }
                                            span { "Send Message" }
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
