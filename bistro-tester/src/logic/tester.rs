use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::time::{Duration, Instant};

use super::TesterContent;
use crate::common::scenario::TestScenario;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(rename = "average_duration_us", with = "duration_micros")]
    pub average_duration: Duration,
}

pub struct LogicTester<'a> {
    content: &'a TesterContent,
    verbose: bool,
}

impl<'a> LogicTester<'a> {
    pub const fn new(content: &'a TesterContent, verbose: bool) -> Self {
        Self { content, verbose }
    }

    /// One result per seed.
    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {})",
                        scenario.name.bright_white(),
                        seed
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut total = Duration::ZERO;

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let mut rng = ChaCha8Rng::seed_from_u64(iteration_seed);
            let start = Instant::now();
            let outcome = (scenario.check)(self.content, &mut rng);
            total += start.elapsed();

            match outcome {
                Ok(()) => successes += 1,
                Err(err) => {
                    log::debug!("{} failed at seed {iteration_seed}: {err:#}", scenario.name);
                    failures.push(format!(
                        "Iteration {} (seed {iteration_seed}): {err:#}",
                        i + 1
                    ));
                }
            }
        }

        let average_duration = if iterations == 0 {
            Duration::ZERO
        } else {
            total / u32::try_from(iterations).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}

mod duration_micros {
    use serde::{Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        u64::try_from(duration.as_micros())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use rand::Rng;

    fn always_ok(_: &TesterContent, _: &mut ChaCha8Rng) -> Result<()> {
        Ok(())
    }

    fn always_fails(_: &TesterContent, rng: &mut ChaCha8Rng) -> Result<()> {
        if rng.gen_bool(1.0) {
            bail!("forced failure");
        }
        Ok(())
    }

    fn content() -> TesterContent {
        TesterContent::load_bundled().unwrap()
    }

    #[test]
    fn counts_successes_per_seed() {
        let content = content();
        let tester = LogicTester::new(&content, false);
        let scenario = TestScenario {
            name: "ok",
            description: "always passes",
            check: always_ok,
        };
        let results = tester.run_scenario(&scenario, &[1, 2], 3);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed && r.successful_iterations == 3));
    }

    #[test]
    fn failures_carry_iteration_seed() {
        let content = content();
        let tester = LogicTester::new(&content, false);
        let scenario = TestScenario {
            name: "broken",
            description: "always fails",
            check: always_fails,
        };
        let results = tester.run_scenario(&scenario, &[10], 2);
        assert!(!results[0].passed);
        assert_eq!(results[0].failures.len(), 2);
        assert!(results[0].failures[1].contains("seed 11"));
    }

    #[test]
    fn zero_iterations_pass_vacuously() {
        let content = content();
        let tester = LogicTester::new(&content, false);
        let scenario = TestScenario {
            name: "ok",
            description: "always passes",
            check: always_ok,
        };
        let result = &tester.run_scenario(&scenario, &[1], 0)[0];
        assert!(result.passed);
        assert_eq!(result.average_duration, Duration::ZERO);
    }
}
