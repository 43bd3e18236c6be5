use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use super::ScenarioResult;

#[allow(clippy::cast_precision_loss)]
fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    (passed as f64 / results.len() as f64) * 100.0
}

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "========================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();

    writeln!(out, "Total runs: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{} {} (seed {})",
            status,
            result.scenario_name.bold(),
            result.seed
        )?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    let fastest = results.iter().min_by_key(|r| r.average_duration);
    let slowest = results.iter().max_by_key(|r| r.average_duration);
    if let (Some(fastest), Some(slowest)) = (fastest, slowest) {
        writeln!(out, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(out, "{}", "=====================".yellow())?;
        writeln!(
            out,
            "Fastest: {} ({:?})",
            fastest.scenario_name.green(),
            fastest.average_duration
        )?;
        writeln!(
            out,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.average_duration
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    success_rate: f64,
    results: &'a [ScenarioResult],
}

pub fn generate_json_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
) -> Result<()> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        success_rate: success_rate(results),
        results,
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
) -> Result<()> {
    writeln!(out, "# Bistro Logic Test Results\n")?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total runs**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            out,
            "### {} {} (seed {})\n",
            status, result.scenario_name, result.seed
        )?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_csv_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
) -> Result<()> {
    writeln!(
        out,
        "scenario,seed,passed,iterations,successful,average_us,first_failure"
    )?;
    for result in results {
        let first_failure = result
            .failures
            .first()
            .map(|f| csv_field(f))
            .unwrap_or_default();
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            csv_field(&result.scenario_name),
            result.seed,
            result.passed,
            result.iterations_run,
            result.successful_iterations,
            result.average_duration.as_micros(),
            first_failure
        )?;
    }
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ScenarioResult> {
        vec![
            ScenarioResult {
                scenario_name: "smoke".into(),
                seed: 1337,
                passed: true,
                iterations_run: 2,
                successful_iterations: 2,
                failures: Vec::new(),
                average_duration: Duration::from_micros(40),
            },
            ScenarioResult {
                scenario_name: "cart-sweep".into(),
                seed: 7,
                passed: false,
                iterations_run: 2,
                successful_iterations: 1,
                failures: vec!["Iteration 2 (seed 8): total \"off\", by 0.01".into()],
                average_duration: Duration::from_micros(90),
            },
        ]
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn json_report_is_valid_and_complete() {
        let results = sample();
        let text = render(|out| generate_json_report(out, &results));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["results"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["results"][1]["average_duration_us"], 90);
        assert_eq!(value["success_rate"], 50.0);
    }

    #[test]
    fn markdown_lists_failures() {
        let results = sample();
        let text = render(|out| generate_markdown_report(out, &results));
        assert!(text.starts_with("# Bistro Logic Test Results"));
        assert!(text.contains("### ❌ cart-sweep (seed 7)"));
        assert!(text.contains("- **Success rate**: 50.0%"));
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let results = sample();
        let text = render(|out| generate_csv_report(out, &results));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "smoke,1337,true,2,2,40,");
        assert!(lines[2].ends_with("\"Iteration 2 (seed 8): total \"\"off\"\", by 0.01\""));
    }

    #[test]
    fn console_report_handles_empty_results() {
        let text = render(|out| generate_console_report(out, &[], Duration::ZERO));
        assert!(text.contains("Total runs: 0"));
        assert!(!text.contains("Performance Summary"));
    }
}
