use serde::{Deserialize, Serialize};

// structs and types

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub tagline: String,
    pub headline: String,
    pub summary: Vec<String>,
    pub location: String,
    pub availability: String,
    pub education: String,
    pub years_experience: u32,
    pub projects_completed: u32,
    pub competencies: Vec<String>,
    pub email: String,
    pub phone: String,
    pub resume_url: String,
    pub socials: Vec<SocialLink>,
    pub services: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    WhatsApp,
    Email,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub kind: SocialKind,
}

impl SocialLink {
    // mail-to links stay in the current tab, everything else opens a new one
    pub fn opens_new_tab(&self) -> bool {
        !self.url.starts_with("mailto:")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Email,
    Phone,
    Location,
}

// one row of the "Contact Information" list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub title: &'static str,
    pub value: String,
    pub link: String,
}

impl Profile {
    pub fn contact_channels(&self) -> Vec<ContactChannel> {
        let dialable: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();

        vec![
            ContactChannel {
                kind: ChannelKind::Email,
                title: "Email",
                value: self.email.clone(),
                link: format!("mailto:{}", self.email),
            },
            ContactChannel {
                kind: ChannelKind::Phone,
                title: "Phone",
                value: self.phone.clone(),
                link: format!("tel:{dialable}"),
            },
            ContactChannel {
                kind: ChannelKind::Location,
                title: "Location",
                value: self.location.clone(),
                link: String::from("#"),
            },
        ]
    }

    pub fn social(&self, kind: SocialKind) -> Option<&SocialLink> {
        self.socials.iter().find(|s| s.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Ada Example".into(),
            initials: "AE".into(),
            role: "Developer".into(),
            tagline: "Builds things".into(),
            headline: "Developer".into(),
            summary: vec![],
            location: "Lahore, Pakistan".into(),
            availability: "Available".into(),
            education: "Graduate".into(),
            years_experience: 5,
            projects_completed: 50,
            competencies: vec![],
            email: "ada@example.com".into(),
            phone: "+92 300 1234567".into(),
            resume_url: "/resume.pdf".into(),
            socials: vec![
                SocialLink {
                    name: "GitHub".into(),
                    url: "https://github.com/ada".into(),
                    kind: SocialKind::GitHub,
                },
                SocialLink {
                    name: "Email".into(),
                    url: "mailto:ada@example.com".into(),
                    kind: SocialKind::Email,
                },
            ],
            services: vec![],
        }
    }

    #[test]
    fn phone_channel_strips_spaces() {
        let channels = profile().contact_channels();
        let phone = channels
            .iter()
            .find(|c| c.kind == ChannelKind::Phone)
            .unwrap();

        assert_eq!(phone.value, "+92 300 1234567");
        assert_eq!(phone.link, "tel:+923001234567");
    }

    #[test]
    fn channels_keep_display_order() {
        let kinds: Vec<_> = profile()
            .contact_channels()
            .into_iter()
            .map(|c| c.kind)
            .collect();

        assert_eq!(
            kinds,
            vec![ChannelKind::Email, ChannelKind::Phone, ChannelKind::Location]
        );
    }

    #[test]
    fn mailto_links_stay_in_tab() {
        let profile = profile();

        assert!(profile.social(SocialKind::GitHub).unwrap().opens_new_tab());
        assert!(!profile.social(SocialKind::Email).unwrap().opens_new_tab());
        assert!(profile.social(SocialKind::WhatsApp).is_none());
    }
}
