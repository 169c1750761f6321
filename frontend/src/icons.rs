use std::fmt;

use serde::Serialize;

/// Outline icons the page draws. Each one must be registered in the
/// [`IconTable`] before it can be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IconKind {
    Phone,
    MapPin,
    Shield,
    Camera,
    Cloud,
    CarFront,
    CheckCircle2,
    Wrench,
    Star,
}

impl IconKind {
    pub const REQUIRED: [IconKind; 9] = [
        IconKind::Phone,
        IconKind::MapPin,
        IconKind::Shield,
        IconKind::Camera,
        IconKind::Cloud,
        IconKind::CarFront,
        IconKind::CheckCircle2,
        IconKind::Wrench,
        IconKind::Star,
    ];
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// 24x24 viewBox, stroke-only path data.
static REGISTERED: &[(IconKind, &[&str])] = &[
    (IconKind::Phone, &[
        "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
    ]),
    (IconKind::MapPin, &[
        "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
        "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z",
    ]),
    (IconKind::Shield, &[
        "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
    ]),
    (IconKind::Camera, &[
        "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z",
        "M15 13a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z",
    ]),
    (IconKind::Cloud, &[
        "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z",
    ]),
    (IconKind::CarFront, &[
        "m21 8-2 2-1.5-3.7A2 2 0 0 0 15.646 5H8.4a2 2 0 0 0-1.903 1.257L5 10 3 8",
        "M7 14h.01",
        "M17 14h.01",
        "M5 10h14a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2Z",
        "M5 18v2",
        "M19 18v2",
    ]),
    (IconKind::CheckCircle2, &[
        "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0Z",
        "m9 12 2 2 4-4",
    ]),
    (IconKind::Wrench, &[
        "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
    ]),
    (IconKind::Star, &[
        "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
    ]),
];

/// Registered icon symbols, resolved once when capabilities are detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTable {
    entries: Vec<(IconKind, &'static [&'static str])>,
}

impl IconTable {
    pub fn registered() -> Self {
        IconTable { entries: REGISTERED.to_vec() }
    }

    #[cfg(test)]
    fn from_entries(entries: Vec<(IconKind, &'static [&'static str])>) -> Self {
        IconTable { entries }
    }

    pub fn without(mut self, kind: IconKind) -> Self {
        self.entries.retain(|(k, _)| *k != kind);
        self
    }

    pub fn lookup(&self, kind: IconKind) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, paths)| *paths)
    }

    /// An icon counts as drawable when it has path data and none of it is empty.
    pub fn is_drawable(&self, kind: IconKind) -> bool {
        self.lookup(kind)
            .map(|paths| !paths.is_empty() && paths.iter().all(|d| !d.is_empty()))
            .unwrap_or(false)
    }

    pub fn missing(&self) -> Vec<IconKind> {
        IconKind::REQUIRED
            .iter()
            .copied()
            .filter(|kind| !self.is_drawable(*kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_required_icon_is_registered() {
        assert!(IconTable::registered().missing().is_empty());
    }

    #[test]
    fn removed_and_empty_icons_are_reported() {
        let table = IconTable::registered().without(IconKind::Star);
        assert_eq!(table.missing(), vec![IconKind::Star]);

        let table = IconTable::from_entries(vec![(IconKind::Phone, &[""][..])]);
        assert!(!table.is_drawable(IconKind::Phone));
        assert_eq!(table.missing().len(), IconKind::REQUIRED.len());
    }
}
