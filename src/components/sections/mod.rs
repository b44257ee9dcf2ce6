//! Page sections, top to bottom.

mod about;
mod contact;
mod footer;
mod hero;
mod projects;
mod transparency;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
pub use transparency::Transparency;
