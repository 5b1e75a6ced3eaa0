use dioxus::prelude::*;

use api::{profile::SocialKind, skill::SkillIcon};

// stroke icons, drawn on a 24x24 grid and styled through the .icon class
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowDown,
    ArrowRight,
    ArrowUp,
    Award,
    Calendar,
    Clock,
    Code,
    Database,
    Download,
    ExternalLink,
    GitHub,
    Globe,
    Heart,
    LinkedIn,
    Mail,
    MapPin,
    Menu,
    Message,
    Moon,
    Phone,
    Send,
    Server,
    Smartphone,
    Sun,
    Wrench,
    X,
}

impl IconKind {
    fn paths(self) -> &'static str {
        match self {
            IconKind::ArrowDown => r#"<path d="M12 5v14"/><path d="m19 12-7 7-7-7"/>"#,
            IconKind::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            IconKind::ArrowUp => r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#,
            IconKind::Award => {
                r#"<circle cx="12" cy="8" r="6"/><path d="M15.5 12.9 17 22l-5-3-5 3 1.5-9.1"/>"#
            }
            IconKind::Calendar => {
                r#"<rect x="3" y="4" width="18" height="18" rx="2"/><path d="M16 2v4M8 2v4M3 10h18"/>"#
            }
            IconKind::Clock => r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#,
            IconKind::Code => r#"<path d="m16 18 6-6-6-6"/><path d="m8 6-6 6 6 6"/>"#,
            IconKind::Database => {
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/><path d="M3 5v14c0 1.7 4 3 9 3s9-1.3 9-3V5"/><path d="M3 12c0 1.7 4 3 9 3s9-1.3 9-3"/>"#
            }
            IconKind::Download => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="m7 10 5 5 5-5"/><path d="M12 15V3"/>"#
            }
            IconKind::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            IconKind::GitHub => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.1-1.3-.3-2.5-1-3.5.3-1.2.3-2.4 0-3.5 0 0-1 0-3 1.5-2.6-.5-5.4-.5-8 0C6 2 5 2 5 2c-.3 1.1-.3 2.3 0 3.5-.7 1-1.1 2.2-1 3.5 0 3.5 3 5.5 6 5.5-.4.5-.7 1-.8 1.6-.2.6-.3 1.3-.2 1.9v4"/><path d="M9 18c-4.5 2-5-2-7-2"/>"#
            }
            IconKind::Globe => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M2 12h20"/><path d="M12 2a15 15 0 0 1 0 20 15 15 0 0 1 0-20"/>"#
            }
            IconKind::Heart => {
                r#"<path fill="currentColor" d="M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7Z"/>"#
            }
            IconKind::LinkedIn => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/>"#
            }
            IconKind::Mail => {
                r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/>"#
            }
            IconKind::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            IconKind::Menu => r#"<path d="M4 6h16M4 12h16M4 18h16"/>"#,
            IconKind::Message => {
                r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#
            }
            IconKind::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
            IconKind::Phone => {
                r#"<path d="M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1.9.4 1.9.7 2.8a2 2 0 0 1-.5 2.1L8 9.9a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.8.7a2 2 0 0 1 1.7 2z"/>"#
            }
            IconKind::Send => r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
            IconKind::Server => {
                r#"<rect x="2" y="2" width="20" height="8" rx="2"/><rect x="2" y="14" width="20" height="8" rx="2"/><path d="M6 6h.01M6 18h.01"/>"#
            }
            IconKind::Smartphone => {
                r#"<rect x="5" y="2" width="14" height="20" rx="2"/><path d="M12 18h.01"/>"#
            }
            IconKind::Sun => {
                r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M6.3 17.7l-1.4 1.4M19.1 4.9l-1.4 1.4"/>"#
            }
            IconKind::Wrench => {
                r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.8-3.8a6 6 0 0 1-7.9 7.9l-6.9 6.9a2.1 2.1 0 0 1-3-3l6.9-6.9a6 6 0 0 1 7.9-7.9l-3.8 3.8z"/>"#
            }
            IconKind::X => r#"<path d="M18 6 6 18M6 6l12 12"/>"#,
        }
    }

    pub fn social(kind: SocialKind) -> IconKind {
        match kind {
            SocialKind::GitHub => IconKind::GitHub,
            SocialKind::LinkedIn => IconKind::LinkedIn,
            SocialKind::WhatsApp => IconKind::Message,
            SocialKind::Email => IconKind::Mail,
        }
    }

    pub fn skill(icon: SkillIcon) -> IconKind {
        match icon {
            SkillIcon::Frontend => IconKind::Globe,
            SkillIcon::Backend => IconKind::Server,
            SkillIcon::Database => IconKind::Database,
            SkillIcon::Tools => IconKind::Wrench,
            SkillIcon::Mobile => IconKind::Smartphone,
            SkillIcon::Code => IconKind::Code,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    kind: IconKind,
    #[props(default = 24)]
    size: u32,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true">{}</svg>"#,
        props.kind.paths()
    );

    rsx! {
        span {
            class: "icon",
            style: "width: {props.size}px; height: {props.size}px;",
            dangerous_inner_html: "{svg}",
        }
    }
}
