//! Page components for the APAC site.

mod landing;

pub use landing::Landing;
