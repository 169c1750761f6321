use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Contact details of the shop, shared by every call and directions link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Business {
    pub name: &'static str,
    pub city: &'static str,
    pub phone_display: &'static str,
    pub phone_digits: &'static str,
    pub maps_query: &'static str,
}

pub const BUSINESS: Business = Business {
    name: "Tunes Car Stereo",
    city: "Concord, NC",
    phone_display: "(704) 610\u{2011}6023",
    phone_digits: "17046106023",
    maps_query: "Tunes Car Stereo Concord NC",
};

impl Business {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_digits)
    }

    pub fn directions_href(&self) -> String {
        format!("https://maps.google.com/?q={}", urlencoding::encode(self.maps_query))
    }

    pub fn map_embed_src(&self) -> String {
        format!(
            "https://www.google.com/maps?q={}&output=embed",
            self.maps_query.replace(' ', "+")
        )
    }

    pub fn tagline(&self) -> String {
        format!("{} \u{2022} {}", self.name, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_match_the_published_page() {
        assert_eq!(BUSINESS.tel_href(), "tel:17046106023");
        assert_eq!(
            BUSINESS.directions_href(),
            "https://maps.google.com/?q=Tunes%20Car%20Stereo%20Concord%20NC"
        );
        assert_eq!(
            BUSINESS.map_embed_src(),
            "https://www.google.com/maps?q=Tunes+Car+Stereo+Concord+NC&output=embed"
        );
        assert_eq!(BUSINESS.tagline(), "Tunes Car Stereo \u{2022} Concord, NC");
    }
}
