//! Food analysis and demo result rendering.

use super::esc;
use super::placeholder::render_no_results;
use crate::classify::FoodRiskTier;
use crate::models::{DemoRun, FoodResult, Nutrition, RiskAssessment};

pub const NOT_FOUND_FALLBACK: &str = "Nutrition data not found for this food item.";

/// Counts over entries that carry nutrition data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FoodSummary {
    pub total: usize,
    pub risky: usize,
    pub safe: usize,
}

impl FoodSummary {
    /// `risky + safe` may be less than `total` when a found entry has no
    /// risk assessment.
    pub fn from_results(results: &[FoodResult]) -> Self {
        results
            .iter()
            .filter(|r| r.is_found())
            .fold(Self::default(), |mut summary, result| {
                summary.total += 1;
                match result.is_risky() {
                    Some(true) => summary.risky += 1,
                    Some(false) => summary.safe += 1,
                    None => {}
                }
                summary
            })
    }
}

/// Render `POST /analyze-foods` results.
pub fn render_food_results(results: &[FoodResult]) -> String {
    if results.is_empty() {
        return render_no_results();
    }

    let mut html = String::with_capacity(2048 * results.len());
    html.push_str("<div class=\"results-container\">\n");
    html.push_str("<h3 class=\"results-title\">Analysis Results</h3>\n");

    for result in results {
        match result {
            FoodResult::Found {
                nutrition,
                risk_assessment,
                ..
            } => html.push_str(&render_food_card(nutrition, risk_assessment.as_ref(), true)),
            FoodResult::NotFound { food_name, error } => {
                html.push_str(&render_not_found(food_name, error.as_deref()))
            }
        }
    }

    html.push_str(&render_summary(&FoodSummary::from_results(results)));
    html.push_str("</div>\n");
    html
}

/// Render `GET /demo/{type}` results. Entries without nutrition are skipped.
pub fn render_demo_results(run: &DemoRun) -> String {
    if run.results.is_empty() {
        return render_no_results();
    }

    let mut html = String::with_capacity(2048 * run.results.len());
    html.push_str("<div class=\"results-container\">\n");
    html.push_str(&format!(
        "<h3 class=\"results-title\">{} Demo Results</h3>\n",
        esc(&capitalize(&run.demo_type))
    ));

    for result in &run.results {
        if let FoodResult::Found {
            nutrition,
            risk_assessment,
            ..
        } = result
        {
            html.push_str(&render_food_card(nutrition, risk_assessment.as_ref(), false));
        }
    }

    html.push_str("</div>\n");
    html
}

fn render_food_card(
    nutrition: &Nutrition,
    risk: Option<&RiskAssessment>,
    show_source: bool,
) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str("<div class=\"food-result\">\n");
    html.push_str(&format!("<div class=\"food-name\">{}</div>\n", esc(&nutrition.name)));

    html.push_str("<div class=\"nutrition-info\">\n");
    html.push_str(&nutrition_item(&format!("{:.0}", nutrition.calories_per_100g), "Calories"));
    html.push_str(&nutrition_item(&format!("{:.1}g", nutrition.sugar_g), "Sugar"));
    html.push_str(&nutrition_item(&format!("{:.1}g", nutrition.saturated_fat_g), "Sat Fat"));
    html.push_str(&nutrition_item(&format!("{:.0}mg", nutrition.sodium_mg), "Sodium"));
    html.push_str("</div>\n");

    if let Some(risk) = risk {
        let tier = FoodRiskTier::from_score(risk.risk_score);
        let style = tier.style();

        html.push_str(&format!(
            "<div class=\"risk-badge {}\" style=\"margin: 15px 0; padding: 10px; background: {}; border-radius: 4px; border-left: 4px solid {};\">\n",
            tier.css_class(),
            style.background,
            style.color
        ));
        html.push_str(&format!(
            "<span style=\"font-weight: 600; color: {};\">{} Risk (Score: {})</span>\n",
            style.color,
            tier.as_str().to_uppercase(),
            risk.risk_score
        ));
        if show_source {
            html.push_str(&source_line(&nutrition.source, "span", "margin-left: 10px; "));
        }
        html.push_str("</div>\n");

        if !risk.risk_factors.is_empty() {
            html.push_str("<div class=\"risk-factors\">\n<strong>Risk Factors:</strong>\n<ul>\n");
            for (factor, level) in &risk.risk_factors {
                html.push_str(&format!(
                    "<li>{}: <span style=\"font-weight: 600;\">{}</span></li>\n",
                    esc(factor),
                    esc(level)
                ));
            }
            html.push_str("</ul>\n</div>\n");
        }

        if !risk.alternatives.is_empty() {
            html.push_str("<div class=\"alternatives\">\n<h4>🌱 Healthier Alternatives:</h4>\n");
            html.push_str("<div class=\"alternatives-list\">\n");
            for alternative in &risk.alternatives {
                html.push_str(&format!(
                    "<span class=\"alternative-item\">{}</span>\n",
                    esc(alternative)
                ));
            }
            html.push_str("</div>\n</div>\n");
        }
    } else if show_source {
        html.push_str(&source_line(&nutrition.source, "div", "margin-top: 10px; "));
    }

    html.push_str("</div>\n");
    html
}

fn source_line(source: &str, tag: &str, spacing: &str) -> String {
    format!(
        "<{tag} class=\"source\" style=\"{spacing}color: var(--text-light); font-size: 0.9rem;\">Source: {}</{tag}>\n",
        esc(source)
    )
}

fn nutrition_item(value: &str, label: &str) -> String {
    format!(
        "<div class=\"nutrition-item\"><div class=\"nutrition-value\">{value}</div><div class=\"nutrition-label\">{label}</div></div>\n"
    )
}

fn render_not_found(food_name: &str, error: Option<&str>) -> String {
    let message = error.filter(|e| !e.trim().is_empty()).unwrap_or(NOT_FOUND_FALLBACK);
    format!(
        "<div class=\"food-result not-found\">\n<div class=\"food-name\" style=\"color: var(--danger);\">{}</div>\n<p style=\"color: var(--text-light); margin-top: 10px;\">❌ {}</p>\n</div>\n",
        esc(food_name),
        esc(message)
    )
}

fn render_summary(summary: &FoodSummary) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<div class=\"summary\">\n<h4>📊 Summary</h4>\n<div class=\"stat-grid\">\n");
    for (value, label, color) in [
        (summary.total, "Total foods", "var(--primary)"),
        (summary.risky, "Risky foods", "var(--danger)"),
        (summary.safe, "Safe foods", "var(--success)"),
    ] {
        html.push_str(&format!(
            "<div><div class=\"stat-value\" style=\"color: {color};\">{value}</div><div class=\"stat-label\">{label}</div></div>\n"
        ));
    }
    html.push_str("</div>\n</div>\n");
    html
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn found(name: &str, score: f64, is_risky: bool) -> FoodResult {
        FoodResult::Found {
            food_name: name.to_string(),
            nutrition: Nutrition {
                name: name.to_string(),
                calories_per_100g: 266.4,
                sugar_g: 3.62,
                saturated_fat_g: 4.48,
                sodium_mg: 598.2,
                category: None,
                source: "USDA".to_string(),
            },
            risk_assessment: Some(RiskAssessment {
                risk_score: score,
                is_risky,
                risk_factors: BTreeMap::from([("sodium".to_string(), "medium".to_string())]),
                alternatives: vec!["whole wheat bread".to_string()],
            }),
        }
    }

    fn not_found(name: &str, error: Option<&str>) -> FoodResult {
        FoodResult::NotFound {
            food_name: name.to_string(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_results_render_placeholder() {
        let html = render_food_results(&[]);
        assert!(html.contains("No results to display."));
        assert!(!html.contains("results-container"));
    }

    #[test]
    fn test_found_item_renders_figures_and_badge() {
        let html = render_food_results(&[found("pizza", 2.0, true)]);
        assert!(html.contains("<div class=\"food-name\">pizza</div>"));
        assert!(html.contains(">266<"));
        assert!(html.contains(">3.6g<"));
        assert!(html.contains(">4.5g<"));
        assert!(html.contains(">598mg<"));
        assert!(html.contains("MEDIUM Risk (Score: 2)"));
        assert!(html.contains("Source: USDA"));
        assert!(html.contains("sodium: <span style=\"font-weight: 600;\">medium</span>"));
        assert!(html.contains("whole wheat bread"));
    }

    #[test]
    fn test_optional_lists_are_omitted_when_empty() {
        let mut result = found("apple", 0.0, false);
        if let FoodResult::Found {
            risk_assessment: Some(risk),
            ..
        } = &mut result
        {
            risk.risk_factors.clear();
            risk.alternatives.clear();
        }
        let html = render_food_results(&[result]);
        assert!(html.contains("LOW Risk (Score: 0)"));
        assert!(!html.contains("Risk Factors"));
        assert!(!html.contains("Healthier Alternatives"));
    }

    #[test]
    fn test_not_found_item_renders_error_branch() {
        let html = render_food_results(&[not_found("unobtainium", None)]);
        assert!(html.contains("unobtainium"));
        assert!(html.contains(NOT_FOUND_FALLBACK));
        assert!(!html.contains("nutrition-info"));

        let html = render_food_results(&[not_found("x", Some("Nutrition info not found"))]);
        assert!(html.contains("Nutrition info not found"));
    }

    #[test]
    fn test_summary_counts_only_found_items() {
        let results = vec![
            found("pizza", 4.0, true),
            found("apple", 0.0, false),
            found("fries", 3.0, true),
            not_found("unobtainium", None),
        ];
        assert_eq!(
            FoodSummary::from_results(&results),
            FoodSummary {
                total: 3,
                risky: 2,
                safe: 1
            }
        );
        let html = render_food_results(&results);
        assert!(html.contains("Total foods"));
        assert!(html.contains("HIGH Risk (Score: 4)"));
    }

    #[test]
    fn test_unassessed_item_counts_only_toward_total() {
        let mut water = found("water", 0.0, false);
        if let FoodResult::Found {
            risk_assessment, ..
        } = &mut water
        {
            *risk_assessment = None;
        }
        let results = vec![water, found("pizza", 4.0, true)];
        assert_eq!(
            FoodSummary::from_results(&results),
            FoodSummary {
                total: 2,
                risky: 1,
                safe: 0
            }
        );

        let html = render_food_results(&results[..1]);
        assert!(html.contains("<div class=\"food-name\">water</div>"));
        assert!(!html.contains("risk-badge"));
        assert!(!html.contains("Risk (Score:"));
        assert!(html.contains("Source: USDA"));
    }

    #[test]
    fn test_demo_heading_and_skips_missing() {
        let run = DemoRun {
            demo_type: "junk".into(),
            results: vec![found("french fries", 5.0, true), not_found("coca cola", None)],
        };
        let html = render_demo_results(&run);
        assert!(html.contains("Junk Demo Results"));
        assert!(html.contains("french fries"));
        assert!(!html.contains("coca cola"));
        assert!(!html.contains("Source:"));
        assert!(!html.contains("Summary"));
    }

    #[test]
    fn test_demo_empty_results_render_placeholder() {
        let run = DemoRun {
            demo_type: "healthy".into(),
            results: vec![],
        };
        assert!(render_demo_results(&run).contains("No results to display."));
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render_food_results(&[not_found("<img src=x>", None)]);
        assert!(html.contains("&lt;img src=x&gt;"));
    }
}
