mod about;
mod blog;
mod contact;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use blog::Blog;
pub use contact::Contact;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;
