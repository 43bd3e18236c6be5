//! Carousel slide definitions
use crate::catalog::ContentError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Media carried by a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Media {
    Image,
    Video {
        #[serde(default)]
        poster: Option<String>,
    },
}

/// Where a call-to-action points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaTarget<'a> {
    /// Path handled by the in-app router.
    Internal(&'a str),
    /// Anything the browser must open itself (`https:`, `tel:`, `mailto:`).
    External(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

impl Cta {
    #[must_use]
    pub fn target(&self) -> CtaTarget<'_> {
        if self.href.starts_with('/') && !self.href.starts_with("//") {
            CtaTarget::Internal(&self.href)
        } else {
            CtaTarget::External(&self.href)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    #[serde(flatten)]
    pub media: Media,
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub cta: Option<Cta>,
}

impl Slide {
    #[must_use]
    pub const fn is_video(&self) -> bool {
        matches!(self.media, Media::Video { .. })
    }

    #[must_use]
    pub fn poster(&self) -> Option<&str> {
        match &self.media {
            Media::Video { poster } => poster.as_deref(),
            Media::Image => None,
        }
    }

    /// Image to show when the slide is not actively playing.
    #[must_use]
    pub fn still_src(&self) -> Option<&str> {
        match &self.media {
            Media::Image => Some(&self.src),
            Media::Video { poster } => poster.as_deref(),
        }
    }
}

/// Slide lists keyed by page name (`home`, `promos`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideDeck {
    pages: BTreeMap<String, Vec<Slide>>,
}

impl SlideDeck {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns [`ContentError::UnknownPage`] when no list exists for `page`.
    pub fn page(&self, page: &str) -> Result<&[Slide], ContentError> {
        self.pages
            .get(page)
            .map(Vec::as_slice)
            .ok_or_else(|| ContentError::UnknownPage(page.to_string()))
    }

    pub fn pages(&self) -> impl Iterator<Item = (&str, &[Slide])> {
        self.pages.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK: &str = r#"{
        "home": [
            {"id": "a", "kind": "image", "src": "/img/a.webp", "alt": "A", "cta": {"label": "Menu", "href": "/menu"}},
            {"id": "b", "kind": "video", "src": "/vid/b.mp4", "poster": "/img/b.webp"}
        ]
    }"#;

    #[test]
    fn parses_image_and_video_slides() {
        let deck = SlideDeck::from_json(DECK).unwrap();
        let slides = deck.page("home").unwrap();
        assert_eq!(slides.len(), 2);
        assert!(!slides[0].is_video());
        assert!(slides[1].is_video());
        assert_eq!(slides[1].poster(), Some("/img/b.webp"));
        assert_eq!(slides[1].still_src(), Some("/img/b.webp"));
        assert_eq!(slides[0].still_src(), Some("/img/a.webp"));
    }

    #[test]
    fn unknown_page_is_an_error() {
        let deck = SlideDeck::from_json(DECK).unwrap();
        assert!(matches!(deck.page("contact"), Err(ContentError::UnknownPage(_))));
    }

    #[test]
    fn cta_target_distinguishes_routes_from_links() {
        let internal = Cta {
            label: String::from("Menu"),
            href: String::from("/menu"),
        };
        let external = Cta {
            label: String::from("Call"),
            href: String::from("tel:+15550100"),
        };
        let protocol_relative = Cta {
            label: String::from("Map"),
            href: String::from("//maps.example.com"),
        };
        assert_eq!(internal.target(), CtaTarget::Internal("/menu"));
        assert_eq!(external.target(), CtaTarget::External("tel:+15550100"));
        assert!(matches!(protocol_relative.target(), CtaTarget::External(_)));
    }
}
