use crate::document::Document;
use crate::event::{Event, EventResult};

pub const ROW_CONTENT_VISIBILITY: &str = "--row-content-visibility";

/// Rows start out lazily rendered (`content-visibility: auto`). The first
/// scroll inside the host switches them to eager rendering for good.
#[derive(Debug)]
pub struct ScrollableVisibilityController {
    host: String,
    eager: bool,
}

impl ScrollableVisibilityController {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            eager: false,
        }
    }

    pub fn is_eager(&self) -> bool {
        self.eager
    }

    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        let Event::Scroll { target } = event else {
            return EventResult::Ignored;
        };
        if self.eager || !doc.is_within(&self.host, target) {
            return EventResult::Ignored;
        }
        if doc.set_style_property(&self.host, ROW_CONTENT_VISIBILITY, "visible") {
            log::debug!("[visibility] {} rows now render eagerly", self.host);
            self.eager = true;
        }
        EventResult::Ignored
    }
}
