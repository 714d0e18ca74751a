//! Scripted browsing sessions stored as RON.

use std::fs;
use std::path::{Path, PathBuf};

use newsdesk_core::{PageConfig, WindowSize};
use page_logging::{page_info, page_warn};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::document::DomQuery;
use super::headless::{ElementSpec, HeadlessDocument};
use super::runtime::PageRuntime;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read session file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse session file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid page location {location:?}: {source}")]
    Location {
        location: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ViewportSpec {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportSpec {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Optional timing overrides; omitted fields keep the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub ad_load_delay_ms: Option<u64>,
    pub load_more_delay_ms: Option<u64>,
    pub scroll_throttle_ms: Option<u64>,
    pub share_window: Option<(u32, u32)>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: PageConfig) -> PageConfig {
        if let Some(ms) = self.ad_load_delay_ms {
            config.ad_load_delay_ms = ms;
        }
        if let Some(ms) = self.load_more_delay_ms {
            config.load_more_delay_ms = ms;
        }
        if let Some(ms) = self.scroll_throttle_ms {
            config.scroll_throttle_ms = ms;
        }
        if let Some((width, height)) = self.share_window {
            config.share_window = WindowSize { width, height };
        }
        config
    }
}

/// One step of a scripted session. Elements are referenced by `id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum SessionEvent {
    Ready,
    Click(String),
    Submit(String),
    Type { id: String, value: String },
    KeyPress { id: String, key: String },
    Scroll,
    Advance(u64),
    /// Moves an element, e.g. to emulate the page scrolling under the viewport.
    SetRect {
        id: String,
        rect: (f64, f64, f64, f64),
    },
    ToggleMenu,
    TrackAdClick { ad_id: String, position: String },
    CheckVisibility,
    LoadMore(String),
    Share {
        platform: String,
        url: String,
        title: String,
    },
    BreakingNews(Vec<String>),
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionFile {
    pub location: String,
    #[serde(default)]
    pub viewport: ViewportSpec,
    #[serde(default)]
    pub config: ConfigOverrides,
    pub page: Vec<ElementSpec>,
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

impl SessionFile {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let session = Self::parse(&content)?;
        page_info!(
            "Loaded session from {:?}: {} element(s), {} event(s)",
            path,
            session.page.len(),
            session.events.len()
        );
        Ok(session)
    }

    pub fn parse(content: &str) -> Result<Self, FixtureError> {
        Ok(ron::from_str(content)?)
    }

    pub fn page_config(&self) -> PageConfig {
        self.config.apply(PageConfig::default())
    }

    pub fn build_document(&self) -> Result<HeadlessDocument, FixtureError> {
        let location = Url::parse(&self.location).map_err(|source| FixtureError::Location {
            location: self.location.clone(),
            source,
        })?;
        let mut document = HeadlessDocument::new(location);
        document.set_window_size(self.viewport.width, self.viewport.height);
        for spec in &self.page {
            document.insert(None, spec.clone());
        }
        Ok(document)
    }

    /// Builds the page and plays every scripted event against it.
    pub fn replay(&self) -> Result<PageRuntime<HeadlessDocument>, FixtureError> {
        let mut runtime = PageRuntime::with_config(self.build_document()?, self.page_config());
        for event in &self.events {
            play(&mut runtime, event);
        }
        Ok(runtime)
    }
}

fn play(runtime: &mut PageRuntime<HeadlessDocument>, event: &SessionEvent) {
    let lookup = |runtime: &PageRuntime<HeadlessDocument>, id: &str| {
        let node = runtime.document().element_by_id(id);
        if node.is_none() {
            page_warn!("Session event {:?} targets missing element #{}", event, id);
        }
        node
    };

    match event {
        SessionEvent::Ready => runtime.page_ready(),
        SessionEvent::Click(id) => {
            if let Some(node) = lookup(&*runtime, id) {
                runtime.click(node);
            }
        }
        SessionEvent::Submit(id) => {
            if let Some(node) = lookup(&*runtime, id) {
                runtime.submit(node);
            }
        }
        SessionEvent::Type { id, value } => {
            if let Some(node) = lookup(&*runtime, id) {
                if let Err(err) = runtime.document_mut().set_value(node, value.as_str()) {
                    page_warn!("Cannot type into #{}: {}", id, err);
                }
            }
        }
        SessionEvent::KeyPress { id, key } => {
            if let Some(node) = lookup(&*runtime, id) {
                runtime.key_press(node, key);
            }
        }
        SessionEvent::Scroll => runtime.scroll(),
        SessionEvent::Advance(ms) => runtime.advance_time(*ms),
        SessionEvent::SetRect { id, rect } => {
            if let Some(node) = lookup(&*runtime, id) {
                let (top, left, bottom, right) = *rect;
                let rect = newsdesk_core::Rect::new(top, left, bottom, right);
                if let Err(err) = runtime.document_mut().set_rect(node, rect) {
                    page_warn!("Cannot move #{}: {}", id, err);
                }
            }
        }
        SessionEvent::ToggleMenu => runtime.toggle_mobile_menu(),
        SessionEvent::TrackAdClick { ad_id, position } => runtime.track_ad_click(ad_id, position),
        SessionEvent::CheckVisibility => runtime.check_ad_visibility(),
        SessionEvent::LoadMore(category) => runtime.load_more_news(category),
        SessionEvent::Share {
            platform,
            url,
            title,
        } => runtime.share_news(platform, url, title),
        SessionEvent::BreakingNews(items) => runtime.update_breaking_news(items.iter().cloned()),
        SessionEvent::Search(query) => runtime.search_news(query),
    }
}
