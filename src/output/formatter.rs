use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::matching::{MatchResult, Registry};
use crate::scoring::AlgorithmResult;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a full analysis result as a multi-section report.
pub fn format_result_report(result: &AlgorithmResult, use_colors: bool) -> String {
    let mut out = String::new();

    let headline = format!(
        "Composite score: {}  |  {}  |  Confidence: {}",
        result.composite_score, result.investment_tier, result.confidence_level
    );
    if use_colors {
        out.push_str(&format!("{}\n", headline.bold()));
    } else {
        out.push_str(&headline);
        out.push('\n');
    }

    out.push_str("\nComponent scores:\n");
    for (name, score) in result.component_scores.entries() {
        out.push_str(&format_score_line(name, score, use_colors));
        out.push('\n');
    }

    out.push_str(&format!(
        "\nROI: {}% (interval {}), break-even {}\n",
        result.roi_projection.projected_roi,
        result.roi_projection.confidence_interval,
        result.roi_projection.break_even_time
    ));
    out.push_str(&format!(
        "Cost savings: {}M/year ({}%: operational {}, tax {}, labor {})\n",
        result.cost_savings.annual_savings,
        result.cost_savings.savings_percentage,
        result.cost_savings.breakdown.operational_savings,
        result.cost_savings.breakdown.tax_savings,
        result.cost_savings.breakdown.labor_savings
    ));

    out.push_str(&format!("\nRisk: {}\n", result.risk_assessment.risk_level));
    for factor in &result.risk_assessment.risk_factors {
        out.push_str(&format!("  - {}\n", factor));
    }
    if !result.risk_assessment.mitigation_strategies.is_empty() {
        out.push_str("Mitigations:\n");
        for strategy in &result.risk_assessment.mitigation_strategies {
            out.push_str(&format!("  - {}\n", strategy));
        }
    }

    if !result.recommendations.is_empty() {
        out.push_str("\nRecommendations:\n");
        for recommendation in &result.recommendations {
            out.push_str(&format!("  - {}\n", recommendation));
        }
    }

    out
}

/// One "  name  score" line, traffic-light colored when enabled.
fn format_score_line(name: &str, score: f64, use_colors: bool) -> String {
    let label = format!("  {:<20} {:>6.2}", name, score);
    if !use_colors {
        return label;
    }
    if score >= 70.0 {
        label.green().to_string()
    } else if score >= 40.0 {
        label.yellow().to_string()
    } else {
        label.red().to_string()
    }
}

/// Format ranked matches as one line per region:
/// "{rank}. {region_id} | {score} | {factors}"
pub fn format_match_table(matches: &[MatchResult], use_colors: bool) -> String {
    if matches.is_empty() {
        return "No matches above the score floor.".to_string();
    }

    let width = get_terminal_width();
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let score = format!("{:.1}%", m.match_score * 100.0);
            let factors = m.compatibility_factors.join("; ");
            if use_colors {
                format!(
                    "{}. {} | {} | {}",
                    i + 1,
                    m.region_id.bold(),
                    score.cyan(),
                    factors
                )
            } else {
                let line = format!("{}. {} | {} | {}", i + 1, m.region_id, score, factors);
                match width {
                    Some(w) => truncate_line(&line, w),
                    None => line,
                }
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format registry regions as one line per region.
pub fn format_region_list(registry: &Registry, use_colors: bool) -> String {
    if registry.region_count() == 0 {
        return "No regions registered.".to_string();
    }

    registry
        .regions()
        .iter()
        .map(|r| {
            if use_colors {
                format!(
                    "{} | {} | {} | {} opportunities",
                    r.region_id.bold(),
                    r.name,
                    r.development_tier.label().cyan(),
                    r.project_opportunities.len()
                )
            } else {
                format!(
                    "{} | {} | {} | {} opportunities",
                    r.region_id,
                    r.name,
                    r.development_tier.label(),
                    r.project_opportunities.len()
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a line to fit available width, accounting for Unicode
fn truncate_line(line: &str, max_width: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= max_width {
        line.to_string()
    } else if max_width > 3 {
        let truncated: String = chars[..max_width - 3].iter().collect();
        format!("{}...", truncated)
    } else {
        chars[..max_width.min(chars.len())].iter().collect()
    }
}
