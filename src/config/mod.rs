//! Configuration module

mod site;

pub use site::HighlightConfig;
pub use site::Role;
pub use site::RoleDate;
pub use site::SiteConfig;
