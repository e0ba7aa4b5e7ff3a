use log::Level;

pub const SITE_NAME: &str = "מסעדה גמא";

/// Scroll offset (px) past which the navbar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of the page scroll applied to the hero background.
pub const HERO_PARALLAX_FACTOR: f64 = 0.2;

pub const CAROUSEL_AUTOPLAY_MS: u32 = 5_000;
pub const CONTACT_SUCCESS_DISPLAY_MS: u32 = 3_000;

// Viewport widths (px) where the testimonial window grows.
pub const BREAKPOINT_SM: f64 = 640.0;
pub const BREAKPOINT_LG: f64 = 1024.0;

pub const CONTACT_PHONE_DISPLAY: &str = "03-1234567";
pub const CONTACT_PHONE_HREF: &str = "tel:+972-3-1234567";
pub const CONTACT_EMAIL: &str = "info@gamma-restaurant.co.il";
pub const CONTACT_ADDRESS: &str = "רחוב דיזנגוף 123, תל אביב";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3380.5775562582507!2d34.77541491520177!3d32.08004742746456!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x151d4b82a6148a07%3A0x9f5e6e5e6f8b38a0!2z15PXmdeb16DXkteV15kg124sINeq15wg15DXkdeZ15E!5e0!3m2!1siw!2sil!4v1652345678901!5m2!1siw!2sil";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
