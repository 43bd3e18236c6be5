use anyhow::Result;
use rand_chacha::ChaCha8Rng;

use crate::logic::TesterContent;

pub mod browse;
pub mod cart;
pub mod chrome;
pub mod smoke;

/// One property check over the bundled content, driven by a seeded RNG.
pub type ScenarioCheck = fn(&TesterContent, &mut ChaCha8Rng) -> Result<()>;

#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub check: ScenarioCheck,
}

const SCENARIOS: &[TestScenario] = &[
    TestScenario {
        name: "smoke",
        description: "Bundled content loads and every reference resolves",
        check: smoke::content_integrity,
    },
    TestScenario {
        name: "cart-sweep",
        description: "Random cart operations keep quantities, totals and storage consistent",
        check: cart::random_operations,
    },
    TestScenario {
        name: "cart-persistence",
        description: "Corrupted storage payloads rehydrate to a valid cart",
        check: cart::corrupted_payloads,
    },
    TestScenario {
        name: "cart-clear",
        description: "Clearing needs a confirmed request",
        check: cart::two_step_clear,
    },
    TestScenario {
        name: "filter-order",
        description: "Category views are filtered, promoted first and stable",
        check: browse::filter_order,
    },
    TestScenario {
        name: "carousel-wrap",
        description: "Carousel navigation wraps and autoplay respects pause",
        check: browse::carousel_wrap,
    },
    TestScenario {
        name: "overlay-lock",
        description: "Overlays stay exclusive and the scroll lock restores its offset",
        check: chrome::overlay_lock,
    },
    TestScenario {
        name: "scroll-chrome",
        description: "Header visibility follows scroll thresholds",
        check: chrome::scroll_visibility,
    },
    TestScenario {
        name: "fly-to-cart",
        description: "Flight progress is clamped and landed flights are removed",
        check: chrome::flights_and_preload,
    },
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.name, s.description)).collect()
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<TestScenario> {
    SCENARIOS.iter().find(|s| s.name == name).copied()
}

/// Expand `all` into every registered scenario name.
#[must_use]
pub fn expand_scenarios(names: &[String]) -> Vec<String> {
    if names.iter().any(|n| n == "all") {
        return SCENARIOS.iter().map(|s| s.name.to_string()).collect();
    }
    names.to_vec()
}
