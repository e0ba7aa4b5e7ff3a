use std::rc::Rc;
use yew::Reducible;

/// Full-screen selection over a gallery of `len` images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    selected: Option<usize>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { len, selected: None }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Selects `index`; out-of-range indexes are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Pointer went down somewhere on the page while the lightbox was up.
    pub fn pointer_down(&mut self, inside_content: bool) {
        if self.is_open() && !inside_content {
            self.close();
        }
    }

    pub fn key(&mut self, key: &str) -> bool {
        if self.is_open() && key == "Escape" {
            self.close();
            return true;
        }
        false
    }

    /// Value for `body.style.overflow` while this selection is shown.
    pub fn body_overflow(&self) -> &'static str {
        if self.is_open() {
            "hidden"
        } else {
            "auto"
        }
    }
}

/// How a gallery `<img>` finished: fired `load` or `error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
}

/// Tracks how many gallery images have settled. Broken images count too,
/// otherwise one bad URL would keep the progress bar up forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryLoad {
    loaded: usize,
    failed: usize,
    total: usize,
}

impl GalleryLoad {
    pub fn new(total: usize) -> Self {
        Self {
            loaded: 0,
            failed: 0,
            total,
        }
    }

    pub fn settle(self, outcome: ImageOutcome) -> Self {
        if self.complete() {
            return self;
        }
        match outcome {
            ImageOutcome::Loaded => Self {
                loaded: self.loaded + 1,
                ..self
            },
            ImageOutcome::Failed => Self {
                failed: self.failed + 1,
                ..self
            },
        }
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    fn settled(&self) -> usize {
        self.loaded + self.failed
    }

    pub fn complete(&self) -> bool {
        self.settled() >= self.total
    }

    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        ((self.settled() as f64 / self.total as f64) * 100.0).round() as u32
    }
}

pub enum LightboxAction {
    Open(usize),
    Close,
    PointerDown { inside_content: bool },
    Key(String),
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LightboxAction::Open(index) => {
                next.open(index);
            }
            LightboxAction::Close => next.close(),
            LightboxAction::PointerDown { inside_content } => next.pointer_down(inside_content),
            LightboxAction::Key(key) => {
                next.key(&key);
            }
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

impl Reducible for GalleryLoad {
    type Action = ImageOutcome;

    fn reduce(self: Rc<Self>, outcome: ImageOutcome) -> Rc<Self> {
        Rc::new(self.settle(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_close() {
        let mut lb = Lightbox::new(8);
        assert!(lb.open(2));
        assert_eq!(lb.selected(), Some(2));
        lb.close();
        assert_eq!(lb.selected(), None);
    }

    #[test]
    fn open_replaces_selection() {
        let mut lb = Lightbox::new(8);
        lb.open(1);
        lb.open(5);
        assert_eq!(lb.selected(), Some(5));
    }

    #[test]
    fn rejects_missing_image() {
        let mut lb = Lightbox::new(3);
        assert!(!lb.open(3));
        assert!(!lb.is_open());
    }

    #[test]
    fn click_outside_closes_but_inside_does_not() {
        let mut lb = Lightbox::new(3);
        lb.open(0);
        lb.pointer_down(true);
        assert!(lb.is_open());
        lb.pointer_down(false);
        assert!(!lb.is_open());
    }

    #[test]
    fn escape_closes() {
        let mut lb = Lightbox::new(3);
        assert!(!lb.key("Escape"));
        lb.open(1);
        assert!(!lb.key("a"));
        assert!(lb.key("Escape"));
        assert!(!lb.is_open());
    }

    #[test]
    fn scroll_is_locked_only_while_open() {
        let mut lb = Lightbox::new(3);
        assert_eq!(lb.body_overflow(), "auto");
        lb.open(0);
        assert_eq!(lb.body_overflow(), "hidden");
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let lb = Rc::new(Lightbox::new(2));
        let same = lb.clone().reduce(LightboxAction::Key("Escape".into()));
        assert!(Rc::ptr_eq(&lb, &same));
        let opened = same.reduce(LightboxAction::Open(1));
        assert_eq!(opened.selected(), Some(1));
    }

    #[test]
    fn load_progress() {
        let load = GalleryLoad::new(8);
        assert_eq!(load.percent(), 0);
        let load = (0..3).fold(load, |l, _| l.settle(ImageOutcome::Loaded));
        assert_eq!(load.percent(), 38);
        assert!(!load.complete());
        let load = (0..10).fold(load, |l, _| l.settle(ImageOutcome::Loaded));
        assert!(load.complete());
        assert_eq!(load.percent(), 100);
    }

    #[test]
    fn broken_images_still_finish_loading() {
        let load = Rc::new(GalleryLoad::new(3));
        let load = load
            .reduce(ImageOutcome::Loaded)
            .reduce(ImageOutcome::Failed)
            .reduce(ImageOutcome::Loaded);
        assert!(load.complete());
        assert_eq!(load.percent(), 100);
        assert_eq!(load.failed(), 1);

        let all_broken = (0..3).fold(GalleryLoad::new(3), |l, _| l.settle(ImageOutcome::Failed));
        assert!(all_broken.complete());
    }
}
