pub mod carousel;
pub mod content;
pub mod init;
pub mod probe;
pub mod run;
pub mod send;
pub mod validate;

use anyhow::Result;
use tracing::info;

use folio_core::content::{ContentSource, EmbeddedContentSource, FileContentSource, PageContent};
use folio_core::AppConfig;

/// Page content from the configured file, or the bundled demo when there is none
pub fn load_content(config: &AppConfig) -> Result<PageContent> {
    let path = config.content_path();
    if path.exists() {
        Ok(FileContentSource::new(path).load()?)
    } else {
        info!(path = %path.display(), "No content file, using the demo page");
        Ok(EmbeddedContentSource.load()?)
    }
}
