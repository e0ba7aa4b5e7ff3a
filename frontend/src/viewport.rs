use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{BREAKPOINT_LG, BREAKPOINT_SM};

/// Window measurements sampled once per page and handed to sections as props.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: BREAKPOINT_LG,
            scroll_y: 0.0,
        }
    }
}

impl Viewport {
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.width)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width < BREAKPOINT_SM {
            Breakpoint::Narrow
        } else if width < BREAKPOINT_LG {
            Breakpoint::Medium
        } else {
            Breakpoint::Wide
        }
    }

    /// Testimonials shown side by side.
    pub fn visible_testimonials(self) -> usize {
        match self {
            Breakpoint::Narrow => 1,
            Breakpoint::Medium => 2,
            Breakpoint::Wide => 3,
        }
    }
}

#[hook]
pub fn use_viewport() -> Viewport {
    let (width, _height) = use_window_size();
    let (_x, scroll_y) = use_window_scroll();
    Viewport { width, scroll_y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        assert_eq!(Breakpoint::from_width(320.0).visible_testimonials(), 1);
        assert_eq!(Breakpoint::from_width(639.0).visible_testimonials(), 1);
        assert_eq!(Breakpoint::from_width(640.0).visible_testimonials(), 2);
        assert_eq!(Breakpoint::from_width(1023.0).visible_testimonials(), 2);
        assert_eq!(Breakpoint::from_width(1024.0).visible_testimonials(), 3);
        assert_eq!(Viewport::default().breakpoint(), Breakpoint::Wide);
    }
}
