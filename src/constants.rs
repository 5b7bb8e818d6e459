use super::models::{Catalog, Grant};

pub static APP_CATALOG: Catalog = include!(concat!(env!("OUT_DIR"), "/catalog.rs"));
pub const APP_RESOURCES: &[u8] = include_bytes!(env!("APP_RESOURCES"));
pub const APP_ID: &str = env!("APP_ID");
pub const APP_NAME: &str = env!("APP_NAME");
pub const APP_VERSION: &str = env!("APP_VERSION");
pub const APP_PREFIX: &str = env!("APP_PREFIX");
pub const APP_TITLE: &str = env!("APP_TITLE");
pub const APP_DESCRIPTION: &str = env!("APP_DESCRIPTION");
pub const APP_AUTHORS: &str = env!("APP_AUTHORS");
pub const APP_WEBSITE: &str = env!("APP_WEBSITE");
pub const APP_ABOUT: &str = "This directory compiles art grants from various sources across the US, Canada and the UK. \
    Its goal is to help artists find funding opportunities more easily. \
    Details can change between funding rounds, always verify them on the official grant websites.";

pub const REQUIREMENTS_PREVIEW_LENGTH: usize = 60;
pub const REQUIREMENTS_PLACEHOLDER: &str = "View details for requirements";
pub const NOT_SPECIFIED: &str = "Not specified";
