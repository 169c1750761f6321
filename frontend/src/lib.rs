pub mod capabilities;
pub mod cli;
pub mod config;
pub mod content;
pub mod icons;
pub mod motion;
pub mod self_check;
pub mod theme;

pub mod components {
    pub mod cards;
    pub mod faq;
    pub mod icon;
    pub mod quote_form;
}
pub mod pages {
    pub mod landing;
}

pub use content::{brands, gallery, BrandEntry, GalleryEntry};
pub use self_check::{run_checks, CheckResult, Report, Severity};
