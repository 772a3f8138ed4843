//! Static application data

pub mod site;

pub use site::{NavItem, SiteConfig, SITE};
