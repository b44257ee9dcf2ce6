//! UI Components for the APAC page.

mod icons;
mod mobile_nav;
mod nav_header;
mod page_section;
pub mod sections;

pub use icons::{IconSize, LucideIcon};
pub use nav_header::{BrandMark, NavHeader};
pub use page_section::{PageSection, SectionHeader};
