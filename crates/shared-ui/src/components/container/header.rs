use dioxus::prelude::*;

/// One navigable tab in a [`Container`](crate::Container) header.
///
/// `destination` doubles as the tab's link target and its render key, so it
/// must be unique among the tabs of one container. Duplicates are not
/// rejected; they only make the strip ambiguous.
#[derive(Clone, PartialEq)]
pub struct TabDescriptor {
    pub label: Element,
    pub destination: String,
    pub icon: Option<Element>,
    pub is_beta: bool,
    pub is_loading: bool,
    pub right_content: Option<Element>,
}

impl TabDescriptor {
    pub fn new(label: Element, destination: impl Into<String>) -> Self {
        Self {
            label,
            destination: destination.into(),
            icon: None,
            is_beta: false,
            is_loading: false,
            right_content: None,
        }
    }

    pub fn icon(mut self, icon: Element) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn beta(mut self, is_beta: bool) -> Self {
        self.is_beta = is_beta;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn right_content(mut self, content: Element) -> Self {
        self.right_content = Some(content);
        self
    }
}

/// What a container draws above its content region.
#[derive(Clone, PartialEq)]
pub enum HeaderMode {
    None,
    Static(Element),
    Tabs(Vec<TabDescriptor>),
}

impl HeaderMode {
    /// Pick the header from the raw optional props.
    ///
    /// A non-empty tab list wins over a static label; an empty list counts
    /// as absent.
    pub fn resolve(label: Option<Element>, labels: Option<Vec<TabDescriptor>>) -> Self {
        match (labels, label) {
            (Some(tabs), _) if !tabs.is_empty() => HeaderMode::Tabs(tabs),
            (_, Some(label)) => HeaderMode::Static(label),
            _ => HeaderMode::None,
        }
    }

    /// Value of the `data-header-mode` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderMode::None => "none",
            HeaderMode::Static(_) => "static",
            HeaderMode::Tabs(_) => "tabs",
        }
    }

    pub fn has_header(&self) -> bool {
        !matches!(self, HeaderMode::None)
    }

    /// Destinations that appear more than once, each reported once, in
    /// first-repeat order.
    pub fn duplicate_destinations(&self) -> Vec<&str> {
        let HeaderMode::Tabs(tabs) = self else {
            return Vec::new();
        };
        let mut seen: Vec<&str> = Vec::with_capacity(tabs.len());
        let mut duplicates: Vec<&str> = Vec::new();
        for tab in tabs {
            let destination = tab.destination.as_str();
            if seen.contains(&destination) {
                if !duplicates.contains(&destination) {
                    duplicates.push(destination);
                }
            } else {
                seen.push(destination);
            }
        }
        duplicates
    }
}

/// Render keys for a tab strip, one per tab, in order.
///
/// A destination's first occurrence is keyed by the destination itself;
/// later repeats get `#1`, `#2`, ... so keyed siblings stay unique.
pub fn tab_keys(tabs: &[TabDescriptor]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(tabs.len());
    for tab in tabs {
        let mut key = tab.destination.clone();
        let mut repeat = 0;
        while keys.contains(&key) {
            repeat += 1;
            key = format!("{}#{repeat}", tab.destination);
        }
        keys.push(key);
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tab(destination: &str) -> TabDescriptor {
        TabDescriptor::new(VNode::empty(), destination)
    }

    #[test]
    fn tabs_take_precedence_over_label() {
        let mode = HeaderMode::resolve(Some(VNode::empty()), Some(vec![tab("/a")]));
        assert_eq!(mode.as_str(), "tabs");
        assert!(matches!(mode, HeaderMode::Tabs(ref tabs) if tabs.len() == 1));
    }

    #[test]
    fn empty_tab_list_falls_back_to_label() {
        let mode = HeaderMode::resolve(Some(VNode::empty()), Some(Vec::new()));
        assert_eq!(mode.as_str(), "static");
    }

    #[test]
    fn nothing_supplied_means_no_header() {
        assert!(!HeaderMode::resolve(None, None).has_header());
        assert!(!HeaderMode::resolve(None, Some(Vec::new())).has_header());
    }

    #[test]
    fn label_alone_is_static() {
        let mode = HeaderMode::resolve(Some(VNode::empty()), None);
        assert!(mode.has_header());
        assert_eq!(mode.as_str(), "static");
    }

    #[test]
    fn builder_sets_optional_fields() {
        let descriptor = tab("/jobs").beta(true).loading(true);
        assert_eq!(descriptor.destination, "/jobs");
        assert!(descriptor.is_beta);
        assert!(descriptor.is_loading);
        assert!(descriptor.icon.is_none());
        assert!(descriptor.right_content.is_none());
    }

    #[test]
    fn duplicate_destinations_reported_once() {
        let mode = HeaderMode::resolve(
            None,
            Some(vec![tab("/a"), tab("/b"), tab("/a"), tab("/a"), tab("/b")]),
        );
        assert_eq!(mode.duplicate_destinations(), vec!["/a", "/b"]);
    }

    #[test]
    fn keys_are_destinations_when_unique() {
        assert_eq!(tab_keys(&[tab("/a"), tab("/b")]), vec!["/a", "/b"]);
    }

    #[test]
    fn repeated_destinations_get_suffixed_keys() {
        assert_eq!(
            tab_keys(&[tab("/a"), tab("/a"), tab("/b"), tab("/a")]),
            vec!["/a", "/a#1", "/b", "/a#2"]
        );
    }

    #[test]
    fn suffixed_key_skips_a_real_destination() {
        assert_eq!(
            tab_keys(&[tab("/a#1"), tab("/a"), tab("/a")]),
            vec!["/a#1", "/a", "/a#2"]
        );
    }

    #[test]
    fn unique_destinations_report_nothing() {
        let mode = HeaderMode::resolve(None, Some(vec![tab("/a"), tab("/b")]));
        assert!(mode.duplicate_destinations().is_empty());
        assert!(HeaderMode::None.duplicate_destinations().is_empty());
    }
}
