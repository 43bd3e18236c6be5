use anyhow::{Result, ensure};
use bistro_core::{
    AfterClose, FlightDeck, FrameGate, LockChange, Overlay, OverlayState, Point, PreloadCache,
    ScrollLock, ScrollThresholds, ScrollVisibility,
};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::logic::TesterContent;

fn random_overlay(content: &TesterContent, rng: &mut ChaCha8Rng) -> Overlay {
    match rng.gen_range(0..5) {
        0 => Overlay::CategorySheet,
        1 => Overlay::CategoryPanel,
        2 => Overlay::CartPanel,
        3 => Overlay::CartPage,
        _ => content
            .catalog
            .items()
            .choose(rng)
            .map_or(Overlay::CartPage, |item| Overlay::Lightbox(item.id.clone())),
    }
}

/// Random overlay traffic: one surface at a time, Escape always closes, and the
/// page comes back to the offset it had when scrolling was first suspended
/// without the restore jump hiding the chrome.
pub fn overlay_lock(content: &TesterContent, rng: &mut ChaCha8Rng) -> Result<()> {
    let mut state = OverlayState::default();
    let mut lock = ScrollLock::default();
    let mut chrome = ScrollVisibility::default();
    let mut offset: f64 = 0.0;
    let mut captured: Option<f64> = None;

    for step in 0..50 {
        if !lock.is_locked() {
            offset = rng.gen_range(0.0..4_000.0);
        }
        match rng.gen_range(0..6) {
            0 | 1 => state.open(random_overlay(content, rng)),
            2 => state.toggle(random_overlay(content, rng)),
            3 => {
                state.escape();
                ensure!(!state.active().is_open(), "step {step}: escape left an overlay open");
            }
            4 => {
                let was_picker = state.active().is_category_picker();
                let handled = state.category_selected();
                ensure!(handled == was_picker, "step {step}: category selection mismatch");
                if handled {
                    ensure!(state.has_pending(), "step {step}: scroll-to-top not deferred");
                }
            }
            _ => {
                let pending = state.has_pending();
                let after = state.finish_close();
                ensure!(
                    after.is_some() == pending,
                    "step {step}: deferred work lost on finish"
                );
                if after == Some(AfterClose::ScrollToTop) && !lock.is_locked() {
                    offset = 0.0;
                }
                ensure!(state.leaving().is_none(), "step {step}: exit surface kept");
            }
        }

        if let Some(leaving) = state.leaving() {
            ensure!(leaving != state.active(), "step {step}: surface both open and leaving");
        }

        match lock.sync(state.active().locks_scroll(), offset) {
            LockChange::Engage => {
                captured = Some(offset);
                chrome.disable();
            }
            LockChange::Release { restore_to } => {
                ensure!(
                    Some(restore_to) == captured,
                    "step {step}: restored {restore_to}, captured {captured:?}"
                );
                offset = restore_to;
                captured = None;
                chrome.enable(restore_to);
                ensure!(
                    !chrome.sample(restore_to),
                    "step {step}: restoring to {restore_to} hid the chrome"
                );
            }
            LockChange::Unchanged => {}
        }
        ensure!(
            lock.is_locked() == state.active().locks_scroll(),
            "step {step}: lock out of sync with {:?}",
            state.active()
        );
    }
    Ok(())
}

/// Near the top the header always shows; elsewhere it follows deliberate scroll deltas.
pub fn scroll_visibility(_content: &TesterContent, rng: &mut ChaCha8Rng) -> Result<()> {
    let thresholds = ScrollThresholds::default();
    let mut visibility = ScrollVisibility::new(thresholds);
    let mut gate = FrameGate::default();
    let mut last: f64 = 0.0;
    let mut expected = false;

    for step in 0..80 {
        let offset = (last + rng.gen_range(-120.0..160.0)).max(0.0);
        ensure!(gate.request(), "step {step}: frame gate stuck");
        ensure!(!gate.request(), "step {step}: second frame scheduled");
        let hidden = visibility.sample(offset);
        gate.complete();

        let delta = offset - last;
        if offset <= thresholds.top {
            expected = false;
        } else if delta > thresholds.hide {
            expected = true;
        } else if -delta > thresholds.show {
            expected = false;
        }
        ensure!(
            hidden == expected,
            "step {step}: offset {last} -> {offset} gave hidden={hidden}"
        );
        last = offset;
    }

    visibility.disable();
    ensure!(!visibility.hidden(), "disabling left the header hidden");
    ensure!(!visibility.sample(10_000.0), "disabled tracker hid the header");
    Ok(())
}

/// Flights stay within their path and are swept once landed; preloads are claimed once.
pub fn flights_and_preload(_content: &TesterContent, rng: &mut ChaCha8Rng) -> Result<()> {
    let mut deck = FlightDeck::default();
    let now = 1_000.0;
    let count: u32 = rng.gen_range(1..5);
    for i in 0..count {
        deck.launch(
            format!("static/img/menu/{i}.webp"),
            Point::new(rng.gen_range(0.0..400.0), rng.gen_range(0.0..800.0)),
            Point::new(380.0, 20.0),
            now + f64::from(i) * 100.0,
        );
    }
    let sample_at: f64 = rng.gen_range(-500.0..5_000.0);
    for flight in deck.flights() {
        let progress = flight.progress(sample_at);
        ensure!((0.0..=1.0).contains(&progress), "flight progress {progress} out of range");
    }
    deck.sweep(f64::MAX);
    ensure!(deck.is_empty(), "finished flights were not swept");

    let mut cache = PreloadCache::new();
    let url = format!("static/img/hero/{}.webp", rng.gen_range(0..100));
    ensure!(cache.claim(&url), "first claim refused");
    ensure!(!cache.claim(&url), "second claim granted");
    ensure!(!cache.claim(""), "empty url claimed");
    Ok(())
}
