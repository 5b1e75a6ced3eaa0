use serde::{Deserialize, Serialize};

// structs and types

pub type ProjectId = u32;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    // the leading technologies plus the number left off
    pub fn tag_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.technologies.len().min(limit);

        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

// split a listing into the highlighted group and everything else
//
// the featured group is always rendered first; both groups keep the order of the source
pub fn partition_featured(projects: &[Project]) -> (Vec<&Project>, Vec<&Project>) {
    projects.iter().partition(|p| p.featured)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: ProjectId, featured: bool) -> Project {
        Project {
            id,
            title: format!("project {id}"),
            description: String::new(),
            image: String::new(),
            technologies: vec![],
            github_url: String::new(),
            live_url: String::new(),
            featured,
        }
    }

    fn ids(projects: &[&Project]) -> Vec<ProjectId> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn featured_come_first_in_source_order() {
        let projects = vec![project(1, true), project(2, false), project(3, true)];

        let (featured, other) = partition_featured(&projects);

        assert_eq!(ids(&featured), vec![1, 3]);
        assert_eq!(ids(&other), vec![2]);
    }

    #[test]
    fn partition_without_featured() {
        let projects = vec![project(4, false), project(5, false)];

        let (featured, other) = partition_featured(&projects);

        assert!(featured.is_empty());
        assert_eq!(ids(&other), vec![4, 5]);
    }

    #[test]
    fn tag_preview_counts_hidden() {
        let mut p = project(1, false);
        p.technologies = ["React", "Node.js", "MongoDB", "Socket.io", "AWS"]
            .into_iter()
            .map(String::from)
            .collect();

        let (shown, hidden) = p.tag_preview(3);
        assert_eq!(shown, &p.technologies[..3]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = p.tag_preview(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(hidden, 0);
    }
}
