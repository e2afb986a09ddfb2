use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::PageContent;
use crate::{Error, Result};

/// Demo page written by `folio init` and used when no content file exists
pub const DEMO_CONTENT: &str = include_str!("../../assets/demo.toml");

/// Read-only provider of page content
pub trait ContentSource {
    fn load(&self) -> Result<PageContent>;
}

/// Content stored on disk as TOML or JSON, chosen by file extension
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }
}

impl ContentSource for FileContentSource {
    fn load(&self) -> Result<PageContent> {
        let raw = std::fs::read_to_string(&self.path)?;
        let content = if self.is_json() {
            parse_json(&raw)?
        } else {
            parse_toml(&raw)?
        };
        info!(
            "Loaded {} slices from {}",
            content.slices.len(),
            self.path.display()
        );
        Ok(content)
    }
}

/// The bundled demo page
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedContentSource;

impl ContentSource for EmbeddedContentSource {
    fn load(&self) -> Result<PageContent> {
        debug!("Loading embedded demo content");
        parse_toml(DEMO_CONTENT)
    }
}

fn parse_toml(raw: &str) -> Result<PageContent> {
    let content: PageContent = toml::from_str(raw)?;
    check(content)
}

fn parse_json(raw: &str) -> Result<PageContent> {
    let content: PageContent = serde_json::from_str(raw)?;
    check(content)
}

fn check(content: PageContent) -> Result<PageContent> {
    let navbars = content
        .slices
        .iter()
        .filter(|s| !s.is_section())
        .count();
    if navbars > 1 {
        return Err(Error::Content(format!(
            "expected at most one navbar slice, found {}",
            navbars
        )));
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Slice;
    use crate::nav::NavTarget;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("folio-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_demo_content_parses() {
        let content = EmbeddedContentSource.load().unwrap();
        assert!(content.navbar().is_some());
        assert!(content.hero().is_some());
        assert!(content.blog_posts().len() >= 3);
        assert!(content
            .blog_posts()
            .iter()
            .all(|p| p.post_date.is_some() && p.reading_time > 0));
    }

    #[test]
    fn test_demo_sections_map_to_nav_targets() {
        let content = EmbeddedContentSource.load().unwrap();
        let targets: Vec<_> = content.sections().map(Slice::nav_target).collect();
        assert_eq!(targets.first(), Some(&NavTarget::Home));
        assert!(targets.contains(&NavTarget::Blogs));
        assert!(targets.contains(&NavTarget::Contact));
    }

    #[test]
    fn test_json_file_by_extension() {
        let path = temp_path("page.json");
        std::fs::write(
            &path,
            r#"{"meta": {"meta_title": "Ada"}, "slices": [{"slice_type": "contact", "email": "ada@example.com"}]}"#,
        )
        .unwrap();

        let content = FileContentSource::new(&path).load().unwrap();
        assert_eq!(content.meta.meta_title, "Ada");
        assert_eq!(content.contact().map(|c| c.email.as_str()), Some("ada@example.com"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_toml_file_round_trips_demo() {
        let path = temp_path("page.toml");
        std::fs::write(&path, DEMO_CONTENT).unwrap();

        let content = FileContentSource::new(&path).load().unwrap();
        assert!(!content.slices.is_empty());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FileContentSource::new(temp_path("missing.toml"))
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_second_navbar_is_rejected() {
        let raw = r#"
            [[slices]]
            slice_type = "navbar"

            [[slices]]
            slice_type = "navbar"
        "#;
        assert!(matches!(parse_toml(raw), Err(Error::Content(_))));
    }
}
