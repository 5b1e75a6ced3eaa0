use std::collections::HashSet;

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::{
    ContentProvider,
    blog::BlogPost,
    profile::Profile,
    project::Project,
    skill::{MAX_LEVEL, SkillCategory},
};

// the document compiled into the site
pub const PORTFOLIO_DOC: &str = include_str!("../content/portfolio.toml");

// content provider backed by a toml document
//
// the [config] table of the same document is read separately by config::parse_config, so
// it is simply ignored here
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TomlContent {
    #[serde(default)]
    profile: Profile,

    #[serde(default)]
    skills: Vec<SkillCategory>,

    #[serde(default)]
    technologies: Vec<String>,

    #[serde(default)]
    projects: Vec<Project>,

    #[serde(default)]
    posts: Vec<BlogPost>,
}

impl TomlContent {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn parse(doc: &str) -> anyhow::Result<Self> {
        debug!("parsing portfolio content");

        let content: TomlContent =
            toml::from_str(doc).context("failed to parse portfolio content")?;

        content.validate()?;

        debug!(
            categories = content.skills.len(),
            projects = content.projects.len(),
            posts = content.posts.len(),
            "successfully parsed portfolio content"
        );
        Ok(content)
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::parse(PORTFOLIO_DOC)
    }

    // identifiers are unique within their collection and levels are percentages
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut project_ids = HashSet::new();
        for project in &self.projects {
            ensure!(
                project_ids.insert(project.id),
                "duplicate project id {} ({})",
                project.id,
                project.title
            );
        }

        let mut post_ids = HashSet::new();
        for post in &self.posts {
            ensure!(
                post_ids.insert(post.id),
                "duplicate blog post id {} ({})",
                post.id,
                post.title
            );
        }

        let mut titles = HashSet::new();
        for category in &self.skills {
            ensure!(
                titles.insert(category.title.as_str()),
                "duplicate skill category {}",
                category.title
            );

            let mut names = HashSet::new();
            for skill in &category.skills {
                ensure!(
                    names.insert(skill.name.as_str()),
                    "duplicate skill {} in {}",
                    skill.name,
                    category.title
                );
                ensure!(
                    skill.level <= MAX_LEVEL,
                    "skill {} in {} has level {}, expected 0-{MAX_LEVEL}",
                    skill.name,
                    category.title,
                    skill.level
                );
            }
        }

        Ok(())
    }
}

impl ContentProvider for TomlContent {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn skill_categories(&self) -> &[SkillCategory] {
        &self.skills
    }

    fn additional_technologies(&self) -> &[String] {
        &self.technologies
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn posts(&self) -> &[BlogPost] {
        &self.posts
    }
}

#[cfg(test)]
mod tests {
    use api::{profile::SocialKind, project::partition_featured};

    use super::*;

    #[test]
    fn embedded_document_loads() {
        let content = TomlContent::embedded().unwrap();

        assert_eq!(content.profile().initials, "JA");
        assert_eq!(content.skill_categories().len(), 4);
        assert_eq!(content.additional_technologies().len(), 15);
        assert_eq!(content.projects().len(), 6);
        assert_eq!(content.posts().len(), 3);
        assert!(content.profile().social(SocialKind::GitHub).is_some());
    }

    #[test]
    fn embedded_featured_projects() {
        let content = TomlContent::embedded().unwrap();

        let (featured, other) = partition_featured(content.projects());

        assert_eq!(featured.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(other.len(), 4);
    }

    #[test]
    fn embedded_post_dates() {
        let content = TomlContent::embedded().unwrap();

        assert_eq!(content.posts()[0].display_date(), "January 15, 2024");
        assert_eq!(content.posts()[2].read_time(), "12 min read");
    }

    const PROJECT: &str = r#"
[[projects]]
id = 7
title = "a"
description = ""
image = ""
technologies = []
github_url = ""
live_url = ""
"#;

    #[test]
    fn rejects_duplicate_project_ids() {
        let doc = format!("{PROJECT}{PROJECT}");

        let err = TomlContent::parse(&doc).unwrap_err();
        assert!(err.to_string().contains("duplicate project id 7"));
    }

    #[test]
    fn rejects_duplicate_post_ids() {
        let post = r#"
[[posts]]
id = 1
title = "a"
excerpt = ""
image = ""
date = "2024-01-01"
read_minutes = 1
tags = []
"#;
        let doc = format!("{post}{post}");

        assert!(TomlContent::parse(&doc).is_err());
    }

    #[test]
    fn rejects_level_above_hundred() {
        let doc = r#"
[[skills]]
title = "Backend"
icon = "Backend"
skills = [{ name = "Rust", level = 101 }]
"#;

        let err = TomlContent::parse(doc).unwrap_err();
        assert!(err.to_string().contains("level 101"));
    }

    #[test]
    fn empty_document_is_empty_content() {
        let content = TomlContent::parse("").unwrap();

        assert_eq!(content, TomlContent::default());
        assert!(content.projects().is_empty());
    }
}
