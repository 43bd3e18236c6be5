use anyhow::{Result, ensure};
use bistro_core::carousel::SWIPE_THRESHOLD_PX;
use bistro_core::{
    Carousel, CategoryFilter, MediaEnv, Presentation, Slide, Swipe, SwipeTracker, catalog_view,
    count_for, presentation,
};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::logic::TesterContent;

/// Views contain exactly the matching items, promoted ones first, catalog order within each group.
pub fn filter_order(content: &TesterContent, rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = &content.catalog;
    let choices = CategoryFilter::choices();
    let Some(&filter) = choices.choose(rng) else {
        anyhow::bail!("no category filters");
    };

    let view = catalog_view(catalog, filter);
    ensure!(
        view.len() == count_for(catalog.items(), filter),
        "{filter:?}: view has {} items, count says {}",
        view.len(),
        count_for(catalog.items(), filter)
    );
    ensure!(
        view.iter().all(|item| filter.matches(item.category)),
        "{filter:?}: view leaks other categories"
    );

    let first_plain = view.iter().position(|item| !item.is_promoted());
    if let Some(split) = first_plain {
        ensure!(
            view[split..].iter().all(|item| !item.is_promoted()),
            "{filter:?}: promoted item after a plain one"
        );
    }
    for pair in view.windows(2) {
        if pair[0].is_promoted() == pair[1].is_promoted() {
            ensure!(
                catalog.position(&pair[0].id) < catalog.position(&pair[1].id),
                "{filter:?}: {} and {} out of catalog order",
                pair[0].id,
                pair[1].id
            );
        }
    }

    ensure!(
        catalog_view(catalog, filter) == view,
        "{filter:?}: view is not deterministic"
    );
    Ok(())
}

/// Random navigation lands where modular arithmetic says it should.
pub fn carousel_wrap(content: &TesterContent, rng: &mut ChaCha8Rng) -> Result<()> {
    let page = if rng.gen_bool(0.5) { "home" } else { "promos" };
    let slides = content.slides.page(page)?;
    let mut carousel = Carousel::new(slides);
    let len = i64::try_from(slides.len())?;
    let mut expected: i64 = 0;
    let mut tracker = SwipeTracker::default();

    for step in 0..40 {
        match rng.gen_range(0..5) {
            0 => {
                carousel.next();
                expected += 1;
            }
            1 => {
                carousel.prev();
                expected -= 1;
            }
            2 => {
                let target = rng.gen_range(-10..10);
                carousel.go_to(target);
                expected = target;
            }
            3 => {
                let key = if rng.gen_bool(0.5) { "ArrowLeft" } else { "ArrowRight" };
                carousel.on_key(key);
                expected += if key == "ArrowLeft" { -1 } else { 1 };
            }
            _ => {
                let dx: f64 = rng.gen_range(-120.0..120.0);
                tracker.start(200.0);
                tracker.track(200.0 + dx);
                match tracker.end() {
                    Some(swipe) => {
                        carousel.apply_swipe(swipe);
                        expected += if swipe == Swipe::Left { 1 } else { -1 };
                    }
                    None => ensure!(
                        dx.abs() <= SWIPE_THRESHOLD_PX + 1e-9,
                        "step {step}: swipe of {dx} ignored"
                    ),
                }
            }
        }
        let want = usize::try_from(expected.rem_euclid(len))?;
        ensure!(
            carousel.active() == want,
            "step {step}: active {} expected {want}",
            carousel.active()
        );
        check_playback(slides, &carousel, step)?;
    }

    carousel.set_paused(true);
    ensure!(carousel.dwell_ms().is_none(), "paused carousel still advances");
    carousel.set_paused(false);
    carousel.set_reduced_motion(true);
    ensure!(carousel.dwell_ms().is_none(), "reduced motion still advances");
    Ok(())
}

fn check_playback(slides: &[Slide], carousel: &Carousel, step: usize) -> Result<()> {
    let constrained = MediaEnv {
        reduced_motion: true,
        save_data: false,
    };
    for (index, slide) in slides.iter().enumerate() {
        let active = index == carousel.active();
        ensure!(
            carousel.should_play(index) == (active && slide.is_video()),
            "step {step}: slide {index} playback flag wrong"
        );
        let still = presentation(slide, active, constrained);
        ensure!(
            !matches!(still, Presentation::Video { .. }),
            "step {step}: video rendered under reduced motion"
        );
    }
    Ok(())
}
