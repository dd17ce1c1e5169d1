//! Page sections, top to bottom

mod features;
mod footer;
mod header;
mod hero;
mod products;
mod testimonials;

pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use products::Products;
pub use testimonials::Testimonials;
