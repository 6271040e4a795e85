//! HTML rendering of API results.
//!
//! Renderers are pure functions from payloads to HTML fragments. Where the
//! fragment ends up is decided by a [`RenderTarget`].

pub mod food;
pub mod lifestyle;
pub mod placeholder;

use std::collections::HashMap;
use std::sync::Mutex;

use askama_escape::{escape, Html};

pub use food::{render_demo_results, render_food_results, FoodSummary};
pub use lifestyle::render_lifestyle_results;
pub use placeholder::{render_error, render_loading, render_no_results, render_validation_alert};

/// Named display area whose content is replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    FoodResults,
    LifestyleResults,
    DemoResults,
}

impl Region {
    pub const ALL: [Region; 3] = [
        Region::FoodResults,
        Region::LifestyleResults,
        Region::DemoResults,
    ];

    /// Element id in the page.
    pub fn id(&self) -> &'static str {
        match self {
            Region::FoodResults => "food-results",
            Region::LifestyleResults => "lifestyle-results",
            Region::DemoResults => "demo-results",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Region::FoodResults => 0,
            Region::LifestyleResults => 1,
            Region::DemoResults => 2,
        }
    }
}

/// Capability to replace the displayed content of a region.
pub trait RenderTarget: Send + Sync {
    fn replace(&self, region: Region, html: String);
}

/// In-memory target; keeps the latest content per region.
#[derive(Debug, Default)]
pub struct RegionBuffer {
    regions: Mutex<HashMap<Region, String>>,
}

impl RegionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: Region) -> Option<String> {
        self.lock().get(&region).cloned()
    }

    pub fn take(&self, region: Region) -> Option<String> {
        self.lock().remove(&region)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Region, String>> {
        self.regions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RenderTarget for RegionBuffer {
    fn replace(&self, region: Region, html: String) {
        self.lock().insert(region, html);
    }
}

impl<T: RenderTarget> RenderTarget for std::sync::Arc<T> {
    fn replace(&self, region: Region, html: String) {
        (**self).replace(region, html)
    }
}

/// Escape text for interpolation into HTML.
pub(crate) fn esc(text: &str) -> String {
    escape(text, Html).to_string()
}

const PAGE_STYLE: &str = "\
:root { --primary: #264653; --primary-dark: #1d3557; --success: #2a9d8f; --warning: #e9c46a; \
--danger: #e76f51; --bg: #f8f5f0; --border: #d8d2c4; --text-light: #6c757d; \
--shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
body { font-family: 'Merriweather', Georgia, serif; max-width: 900px; margin: 40px auto; padding: 20px; line-height: 1.6; background: var(--bg); }
.results-container { margin-top: 20px; }
.error-message { background: #f8d7da; border-left: 4px solid var(--danger); padding: 15px; border-radius: 4px; }
.loading { text-align: center; color: var(--text-light); }
.nutrition-info { display: grid; grid-template-columns: repeat(auto-fit, minmax(100px, 1fr)); gap: 15px; }
.nutrition-item { text-align: center; padding: 10px; background: var(--bg); border-radius: 4px; }
.nutrition-value { font-size: 1.2rem; font-weight: 700; color: var(--primary); }
.nutrition-label { font-size: 0.9rem; color: var(--text-light); }
.food-result, .disease-risk-card { margin-bottom: 25px; padding: 20px; background: white; border-radius: 4px; border: 1px solid var(--border); box-shadow: var(--shadow); }
.food-name { font-size: 1.3rem; font-weight: 600; color: var(--primary-dark); margin-bottom: 15px; }
.alternatives-list { display: flex; flex-wrap: wrap; gap: 8px; }
.alternative-item { padding: 6px 12px; background: white; border-radius: 4px; border: 1px solid var(--success); color: var(--success); font-size: 0.9rem; }
.stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 15px; text-align: center; }
.stat-value { font-size: 1.5rem; font-weight: bold; }
.stat-label { color: var(--text-light); }
";

/// Wrap a fragment in a standalone document with embedded CSS.
pub fn render_page(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 4096);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", esc(title)));
    html.push_str("<style>\n");
    html.push_str(PAGE_STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}
