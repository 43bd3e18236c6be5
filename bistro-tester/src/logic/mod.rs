pub mod reports;
pub mod seeds;
pub mod tester;

pub use seeds::parse_seeds;
pub use tester::{LogicTester, ScenarioResult};

use anyhow::{Context, Result};
use bistro_core::{Catalog, ContentLoader, JsonContent, SlideDeck};

const MENU_JSON: &str = include_str!("../../../bistro-web/static/assets/data/menu.json");
const SLIDES_JSON: &str = include_str!("../../../bistro-web/static/assets/data/slides.json");

/// Site content shared by every scenario run.
#[derive(Debug, Clone)]
pub struct TesterContent {
    pub catalog: Catalog,
    pub slides: SlideDeck,
}

impl TesterContent {
    /// Load the content bundled with the web crate.
    ///
    /// # Errors
    ///
    /// Fails if either JSON file does not parse.
    pub fn load_bundled() -> Result<Self> {
        Self::load(&JsonContent {
            menu: MENU_JSON,
            slides: SLIDES_JSON,
        })
    }

    /// # Errors
    ///
    /// Propagates loader failures with context.
    pub fn load<L: ContentLoader>(loader: &L) -> Result<Self>
    where
        L::Error: Send + Sync,
    {
        let catalog = loader.load_catalog().context("loading menu catalog")?;
        let slides = loader.load_slides().context("loading slide deck")?;
        Ok(Self { catalog, slides })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads() {
        let content = TesterContent::load_bundled().unwrap();
        assert!(!content.catalog.is_empty());
        assert!(content.slides.page("home").is_ok());
    }

    #[test]
    fn broken_menu_reports_context() {
        let err = TesterContent::load(&JsonContent {
            menu: "{",
            slides: "{}",
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("loading menu catalog"));
    }
}
