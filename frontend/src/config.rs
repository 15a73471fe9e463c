pub const CONTACT_EMAIL: &str = "info@veralyaconsulting.com";
pub const PHONE_DISPLAY: &str = "+34 646 18 11 50";
pub const PHONE_TEL: &str = "+34646181150";
pub const ADDRESS: &str = "C. Marie Curie, 9, 28521 Rivas-Vaciamadrid, Madrid";
pub const MAPS_URL: &str = "https://maps.google.com/?q=C.+Marie+Curie,+9,+28521+Rivas-Vaciamadrid";
pub const OFFICE_HOURS: &str = "Lunes a Viernes: 9:00 - 18:00";

// Past this many pixels the nav bar switches to its solid background
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;

const DEFAULT_SCHEDULING_URL: &str = "https://calendly.com/descubre-veralyaconsulting";

/// Booking page for the free diagnosis call. Can be swapped at build time
/// with `VERALYA_SCHEDULING_URL`.
pub fn scheduling_url() -> &'static str {
    match option_env!("VERALYA_SCHEDULING_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_SCHEDULING_URL,
    }
}

pub fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub fn tel() -> String {
    format!("tel:{}", PHONE_TEL)
}

#[cfg(debug_assertions)]
pub fn log_resolved() {
    log::info!("scheduling url: {}", scheduling_url());
    log::info!("contact: {} / {}", CONTACT_EMAIL, PHONE_TEL);
}

#[cfg(not(debug_assertions))]
pub fn log_resolved() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links_use_their_schemes() {
        assert_eq!(mailto(), "mailto:info@veralyaconsulting.com");
        assert_eq!(tel(), "tel:+34646181150");
        assert!(scheduling_url().starts_with("https://"));
    }
}
