use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::nav::{NavItem, NavTarget};

/// Everything the site renders, in page order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub meta: PageMeta,
    #[serde(default)]
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
}

/// A content block, tagged by its slice type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "slice_type", rename_all = "snake_case")]
pub enum Slice {
    Navbar(NavbarSlice),
    Hero(HeroSlice),
    AboutMe(AboutMeSlice),
    Services(ServicesSlice),
    Projects(ListSlice),
    Experience(ListSlice),
    Blog(BlogSlice),
    Contact(ContactSlice),
}

impl Slice {
    /// Slice type, as used for section tags
    pub fn slice_type(&self) -> &'static str {
        match self {
            Slice::Navbar(_) => "navbar",
            Slice::Hero(_) => "hero",
            Slice::AboutMe(_) => "about_me",
            Slice::Services(_) => "services",
            Slice::Projects(_) => "projects",
            Slice::Experience(_) => "experience",
            Slice::Blog(_) => "blog",
            Slice::Contact(_) => "contact",
        }
    }

    /// The navbar floats above the page; everything else is a section
    pub fn is_section(&self) -> bool {
        !matches!(self, Slice::Navbar(_))
    }

    pub fn nav_target(&self) -> NavTarget {
        NavTarget::from_section_tag(self.slice_type())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavbarSlice {
    #[serde(default)]
    pub logotext: String,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavLink {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroSlice {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    /// Words separated by `" | "`, cycled by the typing effect
    #[serde(default)]
    pub expertise: String,
    #[serde(default)]
    pub cta: Option<NavLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutMeSlice {
    #[serde(default)]
    pub my_journey: String,
    #[serde(default)]
    pub journey_detail: String,
    #[serde(default)]
    pub tech_expertise: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tech_skills: Vec<String>,
    #[serde(default)]
    pub techareas: Vec<TechArea>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechArea {
    pub title: String,
    /// Display string such as `"85%"`
    #[serde(default)]
    pub percentage: String,
}

impl TechArea {
    /// Numeric percentage clamped to [0, 100], if the string holds one
    pub fn percent(&self) -> Option<u8> {
        let digits = self.percentage.trim().trim_end_matches('%').trim();
        digits
            .parse::<f64>()
            .ok()
            .map(|p| p.clamp(0.0, 100.0).round() as u8)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicesSlice {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub items: Vec<Service>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Icon family for a service card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Web,
    Mobile,
    Ai,
}

impl Service {
    /// Derived from the title: web, mobile or ai, defaulting to web
    pub fn kind(&self) -> ServiceKind {
        let title = self.title.to_lowercase();
        if title.contains("web") {
            ServiceKind::Web
        } else if title.contains("mobile") {
            ServiceKind::Mobile
        } else if title.contains("ai") {
            ServiceKind::Ai
        } else {
            ServiceKind::Web
        }
    }
}

/// Projects and experience share a heading plus a list of entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSlice {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub items: Vec<ListEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<Url>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogSlice {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<BlogPost>,
}

/// One card in the blog carousel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub post_thumbnail: Option<String>,
    #[serde(default)]
    pub post_category: String,
    pub post_title: String,
    #[serde(default)]
    pub post_excerpt: String,
    /// Publication date, `YYYY-MM-DD`
    #[serde(default)]
    pub post_date: Option<NaiveDate>,
    /// Minutes
    #[serde(default)]
    pub reading_time: u32,
    #[serde(default)]
    pub post_link: Option<Url>,
    #[serde(default)]
    pub author_name: String,
}

impl BlogPost {
    pub fn formatted_date(&self) -> Option<String> {
        self.post_date.map(|d| d.format("%b %-d, %Y").to_string())
    }

    pub fn reading_time_label(&self) -> String {
        format!("{} min read", self.reading_time)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSlice {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub social_links: Vec<SocialLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedln: Option<Url>,
    #[serde(default)]
    pub github: Option<Url>,
    #[serde(default)]
    pub twitter: Option<Url>,
}

impl PageContent {
    /// Slices rendered as page sections, in order
    pub fn sections(&self) -> impl Iterator<Item = &Slice> {
        self.slices.iter().filter(|s| s.is_section())
    }

    pub fn navbar(&self) -> Option<&NavbarSlice> {
        self.slices.iter().find_map(|s| match s {
            Slice::Navbar(n) => Some(n),
            _ => None,
        })
    }

    pub fn hero(&self) -> Option<&HeroSlice> {
        self.slices.iter().find_map(|s| match s {
            Slice::Hero(h) => Some(h),
            _ => None,
        })
    }

    pub fn blog(&self) -> Option<&BlogSlice> {
        self.slices.iter().find_map(|s| match s {
            Slice::Blog(b) => Some(b),
            _ => None,
        })
    }

    pub fn contact(&self) -> Option<&ContactSlice> {
        self.slices.iter().find_map(|s| match s {
            Slice::Contact(c) => Some(c),
            _ => None,
        })
    }

    /// Blog posts in carousel order (empty when there is no blog)
    pub fn blog_posts(&self) -> &[BlogPost] {
        self.blog().map(|b| b.items.as_slice()).unwrap_or(&[])
    }

    /// Navbar entries in display order. Without a navbar slice one entry is
    /// generated per section.
    pub fn nav_items(&self) -> Vec<NavItem> {
        match self.navbar() {
            Some(navbar) => navbar
                .links
                .iter()
                .map(|link| NavItem::from_link(&link.text, link.url.clone()))
                .collect(),
            None => {
                let mut items: Vec<NavItem> = Vec::new();
                for section in self.sections() {
                    let target = section.nav_target();
                    if !items.iter().any(|i| i.target == target) {
                        items.push(NavItem::new(target.label(), target));
                    }
                }
                items
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_tagging_from_json() {
        let content: PageContent = serde_json::from_str(
            r#"{
                "slices": [
                    {"slice_type": "hero", "name": "Ada", "expertise": "Rust | Web"},
                    {"slice_type": "about_me", "my_journey": "Started early"},
                    {"slice_type": "blog", "items": [
                        {"post_title": "One", "post_date": "2024-03-05", "reading_time": 7}
                    ]}
                ]
            }"#,
        )
        .unwrap();

        let tags: Vec<_> = content.slices.iter().map(Slice::slice_type).collect();
        assert_eq!(tags, vec!["hero", "about_me", "blog"]);

        let post = &content.blog_posts()[0];
        assert_eq!(post.formatted_date().as_deref(), Some("Mar 5, 2024"));
        assert_eq!(post.reading_time_label(), "7 min read");
    }

    #[test]
    fn test_unknown_slice_type_is_rejected() {
        let result: Result<PageContent, _> =
            serde_json::from_str(r#"{"slices": [{"slice_type": "carousel3d"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_navbar_is_not_a_section() {
        let content = PageContent {
            meta: PageMeta::default(),
            slices: vec![
                Slice::Navbar(NavbarSlice::default()),
                Slice::Hero(HeroSlice::default()),
            ],
        };
        assert_eq!(content.sections().count(), 1);
    }

    #[test]
    fn test_nav_items_from_navbar_links() {
        let content = PageContent {
            meta: PageMeta::default(),
            slices: vec![Slice::Navbar(NavbarSlice {
                logotext: "ada.dev".into(),
                links: vec![
                    NavLink { text: "Home".into(), url: None },
                    NavLink { text: "Blogs".into(), url: None },
                    NavLink {
                        text: "CV".into(),
                        url: Some("https://example.com/cv".into()),
                    },
                ],
            })],
        };
        let items = content.nav_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].target, NavTarget::Blogs);
        assert!(!items[2].is_section_link());
    }

    #[test]
    fn test_nav_items_generated_without_navbar() {
        let content = PageContent {
            meta: PageMeta::default(),
            slices: vec![
                Slice::Hero(HeroSlice::default()),
                Slice::Blog(BlogSlice::default()),
                Slice::Contact(ContactSlice::default()),
            ],
        };
        let targets: Vec<_> = content.nav_items().into_iter().map(|i| i.target).collect();
        assert_eq!(
            targets,
            vec![NavTarget::Home, NavTarget::Blogs, NavTarget::Contact]
        );
    }

    #[test]
    fn test_service_kind_from_title() {
        let kind = |t: &str| {
            Service {
                title: t.into(),
                description: String::new(),
            }
            .kind()
        };
        assert_eq!(kind("Web Development"), ServiceKind::Web);
        assert_eq!(kind("Mobile Apps"), ServiceKind::Mobile);
        assert_eq!(kind("AI Integration"), ServiceKind::Ai);
        assert_eq!(kind("Consulting"), ServiceKind::Web);
    }

    #[test]
    fn test_tech_area_percent() {
        let area = |p: &str| TechArea {
            title: "x".into(),
            percentage: p.into(),
        };
        assert_eq!(area("85%").percent(), Some(85));
        assert_eq!(area(" 120 ").percent(), Some(100));
        assert_eq!(area("lots").percent(), None);
    }

    #[test]
    fn test_empty_page_degrades() {
        let content = PageContent::default();
        assert!(content.blog_posts().is_empty());
        assert!(content.nav_items().is_empty());
        assert!(content.hero().is_none());
    }
}
