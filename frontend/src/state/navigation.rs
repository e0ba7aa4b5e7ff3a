use crate::config::{HERO_PARALLAX_FACTOR, NAV_SCROLL_THRESHOLD};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = is_scrolled(offset);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > NAV_SCROLL_THRESHOLD
}

/// Vertical translation (px) of the hero background for a page offset.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * HERO_PARALLAX_FACTOR
}

/// Smooth-scrolls to the element with `id`. Returns false when the page has
/// no such anchor.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("No section with id '{}' on the page", id);
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let mut nav = NavState::default();
        nav.on_scroll(50.0);
        assert!(!nav.scrolled);
        nav.on_scroll(51.0);
        assert!(nav.scrolled);
        nav.on_scroll(0.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.close_menu();
        assert!(!nav.menu_open);
        nav.close_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn parallax_follows_scroll() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(500.0), 100.0);
    }
}
