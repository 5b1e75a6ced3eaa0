use serde::{Deserialize, Serialize};

pub const MAX_LEVEL: u8 = 100;

// structs and types

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillIcon {
    Frontend,
    Backend,
    Database,
    Tools,
    Mobile,
    Code,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: SkillIcon,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    // css width of the proficiency bar
    //
    // the bar stays collapsed until its section has been revealed, then transitions out to
    // the recorded level
    pub fn bar_width(&self, visible: bool) -> String {
        if visible {
            format!("{}%", self.level.min(MAX_LEVEL))
        } else {
            String::from("0%")
        }
    }
}

impl SkillCategory {
    // position of a bar across the whole grid, used to stagger the fill transitions
    pub fn bar_index(&self, category_index: usize, skill_index: usize) -> usize {
        category_index * self.skills.len() + skill_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: u8) -> Skill {
        Skill {
            name: "Rust".into(),
            level,
        }
    }

    #[test]
    fn bar_width_tracks_level() {
        assert_eq!(skill(0).bar_width(true), "0%");
        assert_eq!(skill(42).bar_width(true), "42%");
        assert_eq!(skill(100).bar_width(true), "100%");
    }

    #[test]
    fn bar_collapsed_until_visible() {
        assert_eq!(skill(100).bar_width(false), "0%");
    }

    #[test]
    fn bar_index_spans_categories() {
        let category = SkillCategory {
            title: "Backend".into(),
            icon: SkillIcon::Backend,
            skills: vec![skill(1), skill(2), skill(3)],
        };

        assert_eq!(category.bar_index(0, 2), 2);
        assert_eq!(category.bar_index(2, 1), 7);
    }
}
