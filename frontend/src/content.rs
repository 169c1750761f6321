//! Static page content. Every grid on the landing page is a plain map over
//! one of these slices, and the self-check reads the same data.

use serde::Serialize;

use crate::config::{Business, BUSINESS};
use crate::icons::IconKind;

/// One dash cam brand the shop installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandEntry {
    pub name: &'static str,
    pub href: &'static str,
    pub img: &'static str,
    pub alt: &'static str,
}

/// A brand photo reused in the install gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryEntry {
    pub src: &'static str,
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: IconKind,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageTier {
    pub tier: &'static str,
    pub bullets: &'static [&'static str],
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectField {
    pub label: &'static str,
    pub options: &'static [&'static str],
}

static BRANDS: &[BrandEntry] = &[
    BrandEntry {
        name: "Momento",
        href: "https://www.momentocam.com/dash-cams",
        img: "https://blue.firstechllc.com/wp-content/uploads/M8-Max-w-Box-copy.jpg",
        alt: "Momento M8 Max product photo",
    },
    BrandEntry {
        name: "DroneMobile XC",
        href: "https://www.dronemobile.com/xc-lte-dash-cam",
        img: "https://blue.firstechllc.com/wp-content/uploads/Group-4532.jpg",
        alt: "DroneMobile XC dash cam product photo",
    },
    BrandEntry {
        name: "THINKWARE",
        href: "https://thinkwaredashcam.eu/product/thinkware-dash-cam-f790/",
        img: "https://thinkwaredashcam.eu/wp-content/uploads/2022/05/F790-Main-Image-v3.jpg",
        alt: "Thinkware F790 product photo",
    },
    BrandEntry {
        name: "GNET",
        href: "https://gnet.cam/gnet-g-on2-dash-cam/",
        img: "https://gnet.cam/wp-content/uploads/2023/05/GON2-INstall.png",
        alt: "GNET G-ON2 dash cam product photo",
    },
];

static STATS: &[Stat] = &[
    Stat { icon: IconKind::Shield, label: "Parking\u{2011}mode experts" },
    Stat { icon: IconKind::Wrench, label: "Factory\u{2011}style wiring" },
    Stat { icon: IconKind::Camera, label: "Single & dual\u{2011}channel" },
    Stat { icon: IconKind::Cloud, label: "Cloud\u{2011}connected options" },
];

static WHY_POINTS: &[&str] = &[
    "Accident & insurance evidence",
    "Parking incidents captured",
    "Front\u{2011}only or front + rear",
    "1080p to 4K clarity",
];

static FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Camera,
        title: "Single vs Dual",
        desc: "Front\u{2011}only for basics, or add a rear camera for complete coverage.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Parking Mode",
        desc: "Hardwire for parked recording with safe low\u{2011}voltage cutoff or add a battery pack.",
    },
    Feature {
        icon: IconKind::Cloud,
        title: "Cloud / Live View",
        desc: "Optional cloud features for alerts, viewing, and clips from anywhere.",
    },
];

static PACKAGES: &[PackageTier] = &[
    PackageTier {
        tier: "Good",
        bullets: &["Front camera + pro hardwire", "Parking\u{2011}mode ready", "Fuse\u{2011}tap integration"],
        badge: None,
    },
    PackageTier {
        tier: "Better",
        bullets: &["Front + rear higher resolution", "Parking mode kit included", "Calibrated mounting angle"],
        badge: None,
    },
    PackageTier {
        tier: "Best",
        bullets: &["4K front + 2K rear", "Buffered parking mode + cutoff", "Optional cloud / live alerts"],
        badge: Some("Most Popular"),
    },
];

static ADD_ONS: &[&str] = &[
    "Low\u{2011}profile mirror mount",
    "parking battery",
    "interior cam (rideshare)",
    "cable concealment for specific models",
];

static INSTALL_DIFFERENCE: &[&str] = &[
    "Hidden wiring & factory\u{2011}style routing",
    "Fuse\u{2011}tap integration (no dangling cords)",
    "Calibrated angle & exposure tuning",
    "Same\u{2011}day drop\u{2011}off and pickup in most cases",
];

static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does the install take?",
        answer: "Most installs are same\u{2011}day: morning drop\u{2011}off and afternoon pickup.",
    },
    FaqEntry {
        question: "Do you hide all wires?",
        answer: "Yes\u{2014}wiring is routed behind trim and to the fuse panel.",
    },
    FaqEntry {
        question: "Do I need a hardwire kit?",
        answer: "Yes for parking mode and cleaner operation.",
    },
    FaqEntry {
        question: "Can you install my existing dash cam?",
        answer: "Yes, with the customer\u{2011}supplied note above.",
    },
    FaqEntry {
        question: "Will this drain my battery?",
        answer: "We set low\u{2011}voltage cutoffs or recommend a dedicated battery.",
    },
    FaqEntry {
        question: "Do you support 4K dual\u{2011}channel?",
        answer: "Absolutely; we\u{2019}ll match the camera to your needs.",
    },
];

static QUOTE_SELECTS: &[SelectField] = &[
    SelectField {
        label: "Setup",
        options: &["Front Only", "Front + Rear", "Front + Interior"],
    },
    SelectField {
        label: "Parking Mode",
        options: &["Yes", "No", "Not Sure"],
    },
    SelectField {
        label: "New purchase or customer\u{2011}supplied?",
        options: &["Purchase from Tunes", "Customer\u{2011}supplied unit"],
    },
];

pub fn brands() -> &'static [BrandEntry] {
    BRANDS
}

pub fn gallery() -> Vec<GalleryEntry> {
    gallery_of(brands())
}

/// Projects brand photos into gallery cards, keeping order and count.
pub fn gallery_of(brands: &[BrandEntry]) -> Vec<GalleryEntry> {
    brands
        .iter()
        .map(|b| GalleryEntry {
            src: b.img,
            alt: format!("{} dash cam product photo", b.name),
        })
        .collect()
}

pub fn stats() -> &'static [Stat] {
    STATS
}

pub fn why_points() -> &'static [&'static str] {
    WHY_POINTS
}

pub fn features() -> &'static [Feature] {
    FEATURES
}

pub fn packages() -> &'static [PackageTier] {
    PACKAGES
}

pub fn add_ons() -> &'static [&'static str] {
    ADD_ONS
}

pub fn install_difference() -> &'static [&'static str] {
    INSTALL_DIFFERENCE
}

pub fn faqs() -> &'static [FaqEntry] {
    FAQS
}

pub fn quote_selects() -> &'static [SelectField] {
    QUOTE_SELECTS
}

pub fn business() -> &'static Business {
    &BUSINESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brands_use_https_and_carry_images_and_alt_text() {
        for b in brands() {
            assert!(!b.name.is_empty());
            assert!(b.href.starts_with("https://"), "{} link: {}", b.name, b.href);
            assert!(!b.img.is_empty(), "{} image", b.name);
            assert!(!b.alt.is_empty(), "{} alt", b.name);
        }
    }

    #[test]
    fn gallery_mirrors_brand_images_in_order() {
        let gallery = gallery();
        assert_eq!(gallery.len(), brands().len());
        for (entry, brand) in gallery.iter().zip(brands()) {
            assert_eq!(entry.src, brand.img);
        }
        assert_eq!(gallery[1].alt, "DroneMobile XC dash cam product photo");
    }

    #[test]
    fn registry_is_stable_across_calls() {
        assert_eq!(brands(), brands());
        assert_eq!(gallery(), gallery());
    }

    #[test]
    fn gallery_of_an_empty_registry_is_empty() {
        assert!(gallery_of(&[]).is_empty());
    }

    #[test]
    fn only_the_best_package_is_badged() {
        let badged: Vec<_> = packages().iter().filter(|p| p.badge.is_some()).collect();
        assert_eq!(badged.len(), 1);
        assert_eq!(badged[0].tier, "Best");
        assert!(packages().iter().all(|p| p.bullets.len() == 3));
    }

    #[test]
    fn quote_selects_have_options() {
        assert!(quote_selects().iter().all(|s| !s.options.is_empty()));
        assert_eq!(faqs().len(), 6);
    }
}
