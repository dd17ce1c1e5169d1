//! Application pages
//!
//! - Landing page (`/`)
//! - Not found page (every other path)

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
