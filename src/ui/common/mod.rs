//! Pieces shared by several sections

pub mod logo;
pub mod section_heading;

pub use logo::{LOGO_SRC, Logo};
pub use section_heading::{SectionHeading, TitleLine};
