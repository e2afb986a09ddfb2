use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A navigation destination
///
/// Each target has a nav label (what the navbar shows and matches on) and a
/// section tag (the slice type of the page section it scrolls to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    #[default]
    Home,
    About,
    Projects,
    Blogs,
    Contact,
    Exp,
    Services,
}

impl NavTarget {
    pub const ALL: [NavTarget; 7] = [
        NavTarget::Home,
        NavTarget::About,
        NavTarget::Projects,
        NavTarget::Blogs,
        NavTarget::Contact,
        NavTarget::Exp,
        NavTarget::Services,
    ];

    /// Tabs kept on the compact tab bar
    pub const COMPACT_TABS: [NavTarget; 4] = [
        NavTarget::Home,
        NavTarget::About,
        NavTarget::Projects,
        NavTarget::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Home => "home",
            NavTarget::About => "about",
            NavTarget::Projects => "projects",
            NavTarget::Blogs => "blogs",
            NavTarget::Contact => "contact",
            NavTarget::Exp => "exp",
            NavTarget::Services => "services",
        }
    }

    pub fn section_tag(self) -> &'static str {
        match self {
            NavTarget::Home => "hero",
            NavTarget::About => "about_me",
            NavTarget::Projects => "projects",
            NavTarget::Blogs => "blog",
            NavTarget::Contact => "contact",
            NavTarget::Exp => "experience",
            NavTarget::Services => "services",
        }
    }

    /// Nav target for a section's slice type. Unknown types map to home.
    pub fn from_section_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.section_tag() == tag)
            .unwrap_or_default()
    }

    /// Nav target for a link's display text (trimmed, case-insensitive)
    pub fn from_label(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return Some(NavTarget::Home);
        }
        Self::ALL.into_iter().find(|t| t.label() == text)
    }

    pub fn is_compact_tab(self) -> bool {
        Self::COMPACT_TABS.contains(&self)
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NavTarget {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::from_label(s).ok_or_else(|| crate::Error::SectionNotFound(s.to_string()))
    }
}
