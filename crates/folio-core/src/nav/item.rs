use serde::{Deserialize, Serialize};

use super::NavTarget;

/// One entry in the navbar, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub target: NavTarget,
    /// Destination for links that are not page sections
    #[serde(default)]
    pub href: Option<String>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, target: NavTarget) -> Self {
        Self {
            label: label.into(),
            target,
            href: None,
        }
    }

    /// Build from navbar link text. Text that names no section keeps its
    /// link and falls back to the home target for highlighting purposes.
    pub fn from_link(text: &str, href: Option<String>) -> Self {
        let label = if text.trim().is_empty() {
            NavTarget::Home.label().to_string()
        } else {
            text.trim().to_string()
        };
        match NavTarget::from_label(text) {
            Some(target) => Self {
                label,
                target,
                href: None,
            },
            None => Self {
                label,
                target: NavTarget::Home,
                href,
            },
        }
    }

    /// Whether this item scrolls within the page
    pub fn is_section_link(&self) -> bool {
        self.href.is_none()
    }

    pub fn is_active(&self, active: NavTarget) -> bool {
        self.is_section_link() && self.target == active
    }

    /// Items shown for the current viewport; compact viewports keep only the
    /// tab-bar targets
    pub fn visible(items: &[NavItem], compact: bool) -> Vec<&NavItem> {
        items
            .iter()
            .filter(|item| !compact || (item.is_section_link() && item.target.is_compact_tab()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<NavItem> {
        ["Home", "About", "Services", "Projects", "Blogs", "Contact"]
            .iter()
            .map(|t| NavItem::from_link(t, None))
            .collect()
    }

    #[test]
    fn test_compact_filter_keeps_tab_targets_in_order() {
        let items = items();
        let visible: Vec<_> = NavItem::visible(&items, true)
            .into_iter()
            .map(|i| i.target)
            .collect();
        assert_eq!(
            visible,
            vec![
                NavTarget::Home,
                NavTarget::About,
                NavTarget::Projects,
                NavTarget::Contact
            ]
        );
        assert_eq!(NavItem::visible(&items, false).len(), 6);
    }

    #[test]
    fn test_external_link_never_active() {
        let item = NavItem::from_link("Resume", Some("https://example.com/cv.pdf".into()));
        assert!(!item.is_section_link());
        assert!(!item.is_active(NavTarget::Home));
    }

    #[test]
    fn test_active_highlight() {
        let items = items();
        let active: Vec<_> = items
            .iter()
            .filter(|i| i.is_active(NavTarget::Blogs))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Blogs");
    }
}
