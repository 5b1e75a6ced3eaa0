pub mod blog;
pub mod profile;
pub mod project;
pub mod skill;

use crate::{blog::BlogPost, profile::Profile, project::Project, skill::SkillCategory};

// read-only content source
//
// every section of the page renders from one of these accessors, so the content can move
// from the embedded document to some other store without the components noticing
pub trait ContentProvider {
    fn profile(&self) -> &Profile;

    fn skill_categories(&self) -> &[SkillCategory];

    // the chips listed under the proficiency grid
    fn additional_technologies(&self) -> &[String];

    fn projects(&self) -> &[Project];

    fn posts(&self) -> &[BlogPost];
}
