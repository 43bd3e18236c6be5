use anyhow::{Result, bail, ensure};
use bistro_core::{Category, CtaTarget, DisplayMode, Slide, query_param};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::logic::TesterContent;

const PAGES: [&str; 2] = ["home", "promos"];
const ROUTES: [&str; 5] = ["/", "/menu", "/promos", "/contact", "/cart"];

/// Everything the site renders from must resolve: items, slides and CTAs.
pub fn content_integrity(content: &TesterContent, rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = &content.catalog;
    ensure!(!catalog.is_empty(), "menu catalog is empty");

    for item in catalog.items() {
        ensure!(!item.image.src.is_empty(), "{} has no image", item.id);
        ensure!(!item.image.alt.is_empty(), "{} has no alt text", item.id);
        if let Some(amount) = item.price.amount() {
            ensure!(amount.is_finite(), "{} has a non-finite price", item.id);
        }
    }

    let Some(item) = catalog.items().choose(rng) else {
        bail!("menu catalog is empty");
    };
    ensure!(
        catalog.find(&item.id) == Some(item),
        "lookup of {} returned a different item",
        item.id
    );

    for page in PAGES {
        let slides = content.slides.page(page)?;
        ensure!(!slides.is_empty(), "page {page} has no slides");
        for slide in slides {
            check_slide(page, slide)?;
        }
    }

    let kiosk = if rng.gen_bool(0.5) { "?display=qr" } else { "?kiosk=1" };
    ensure!(
        !DisplayMode::from_query(kiosk).shows_chrome(),
        "{kiosk} should hide chrome"
    );
    Ok(())
}

fn check_slide(page: &str, slide: &Slide) -> Result<()> {
    ensure!(!slide.src.is_empty(), "{page}/{} has no source", slide.id);
    if !slide.is_video() {
        ensure!(
            slide.alt.as_deref().is_some_and(|alt| !alt.is_empty()),
            "{page}/{} image has no alt text",
            slide.id
        );
    }
    let Some(cta) = slide.cta.as_ref() else {
        return Ok(());
    };
    if let CtaTarget::Internal(href) = cta.target() {
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        ensure!(
            ROUTES.contains(&path),
            "{page}/{} links to unknown route {path}",
            slide.id
        );
        if let Some(slug) = query_param(query, "category") {
            ensure!(
                Category::from_slug(slug).is_some(),
                "{page}/{} links to unknown category {slug}",
                slide.id
            );
        }
    }
    Ok(())
}
