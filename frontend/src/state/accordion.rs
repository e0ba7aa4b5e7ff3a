/// Mutually exclusive expand state: zero or one entry open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    #[cfg(test)]
    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }
}

/// Keys that activate a focused entry the same way a click does.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_same_id_twice_closes() {
        let mut acc = Accordion::default();
        acc.toggle("faq-1");
        assert!(acc.is_open("faq-1"));
        acc.toggle("faq-1");
        assert_eq!(acc.open_id(), None);
    }

    #[test]
    fn opening_another_closes_the_first() {
        let mut acc = Accordion::default();
        acc.toggle("faq-1");
        acc.toggle("faq-3");
        assert!(!acc.is_open("faq-1"));
        assert!(acc.is_open("faq-3"));
    }

    #[test]
    fn activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }
}
