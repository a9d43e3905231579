use std::sync::Arc;

use crate::config::Config;
use crate::extraction::sections::SectionExtractor;
use crate::extraction::text_source::TextSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document text source. Default: `PdfTextSource`. Tests swap
    /// in canned sources.
    pub text_source: Arc<dyn TextSource>,
    /// Section classifier carrying the built-in header vocabulary.
    pub extractor: SectionExtractor,
}
