//! Lifestyle assessment rendering.

use super::esc;
use crate::classify::LifestyleRiskTier;
use crate::health::{
    bmi, profile_maintenance_calories, BmiCategory, IntakeWarnings, SATURATED_FAT_LIMIT_G,
    SODIUM_LIMIT_MG, SUGAR_LIMIT_G,
};
use crate::models::{DiseaseRisk, LifestyleAssessment};

/// Recommendations shown per disease card.
pub const MAX_RECOMMENDATIONS: usize = 3;

const WARN_COLOR: &str = "var(--danger)";
const OK_COLOR: &str = "var(--success)";

/// `0.25` -> `"25.0%"`
pub fn format_overall_risk(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

pub fn render_lifestyle_results(assessment: &LifestyleAssessment) -> String {
    let mut html = String::with_capacity(8192);
    html.push_str("<div class=\"results-container\">\n");

    render_profile(&mut html, assessment);
    render_overall(&mut html, assessment.overall_risk_score);

    html.push_str("<h3 class=\"section-title\">🔍 Individual Disease Risks</h3>\n");
    for risk in &assessment.disease_risks {
        render_disease_card(&mut html, risk);
    }

    render_intake(&mut html, assessment);
    render_tracking(&mut html, assessment);

    if !assessment.intervention_priority.is_empty() {
        html.push_str("<div class=\"priority-actions\" style=\"margin-top: 25px; padding: 20px; background: rgba(231, 111, 81, 0.1); border-radius: 4px; border-left: 4px solid var(--danger);\">\n");
        html.push_str("<h4 style=\"color: var(--danger);\">🎯 Priority Actions</h4>\n<ul>\n");
        for intervention in &assessment.intervention_priority {
            html.push_str(&format!("<li>🔹 {}</li>\n", esc(intervention)));
        }
        html.push_str("</ul>\n</div>\n");
    }

    html.push_str("</div>\n");
    html
}

fn render_profile(html: &mut String, assessment: &LifestyleAssessment) {
    let profile = &assessment.user_profile;
    let bmi = bmi(profile.weight_kg, profile.height_cm);

    html.push_str("<div class=\"profile-summary\">\n<h3 class=\"section-title\">👤 Your Health Profile</h3>\n");
    html.push_str("<div class=\"stat-grid\">\n");
    stat(html, &profile.age.to_string(), "Age", "var(--primary)");
    html.push_str(&format!(
        "<div><div class=\"stat-value\" style=\"color: var(--primary);\">{:.1}</div><div class=\"stat-label\">BMI</div><div class=\"bmi-category\">{}</div></div>\n",
        bmi,
        BmiCategory::from_bmi(bmi).label()
    ));
    stat(
        html,
        &esc(&profile.activity_level.replace('_', " ")),
        "Activity",
        "var(--primary)",
    );
    html.push_str("</div>\n</div>\n");
}

fn render_overall(html: &mut String, score: f64) {
    let tier = LifestyleRiskTier::from_fraction(score);
    let style = tier.style();

    html.push_str(&format!(
        "<div class=\"overall-risk risk-{}\" style=\"text-align: center; margin: 25px 0; padding: 25px; background: {}; border-radius: 4px; border-left: 4px solid {};\">\n",
        tier.as_str(),
        style.background,
        style.color
    ));
    html.push_str("<h3>Overall Lifestyle Disease Risk</h3>\n");
    html.push_str(&format!(
        "<div class=\"overall-risk-value\" style=\"font-size: 3rem; font-weight: 900; color: {};\">{} {}</div>\n",
        style.color,
        style.icon,
        format_overall_risk(score)
    ));
    html.push_str(&format!(
        "<div class=\"overall-risk-tier\" style=\"text-transform: uppercase; color: {}; font-weight: 600;\">{} Risk</div>\n",
        style.color,
        tier.label()
    ));
    html.push_str("</div>\n");
}

fn render_disease_card(html: &mut String, risk: &DiseaseRisk) {
    let tier = LifestyleRiskTier::resolve(&risk.risk_level, risk.risk_percentage);
    let style = tier.style();

    html.push_str("<div class=\"disease-risk-card\">\n");
    html.push_str(&format!(
        "<div style=\"display: flex; justify-content: space-between;\"><div class=\"disease-name\" style=\"font-weight: 600; color: {};\">{} {}</div><div class=\"disease-percentage\" style=\"font-weight: 700; color: {};\">{:.1}%</div></div>\n",
        style.color,
        style.icon,
        esc(&risk.disease_name),
        style.color,
        risk.risk_percentage
    ));
    html.push_str(&format!(
        "<div class=\"disease-tier\" style=\"text-transform: uppercase; font-weight: 600; color: {}; text-align: center;\">{} Risk</div>\n",
        style.color,
        tier.label()
    ));

    if !risk.contributing_factors.is_empty() {
        html.push_str("<div class=\"contributing-factors\">\n<strong>Contributing Factors:</strong>\n<ul>\n");
        for factor in &risk.contributing_factors {
            html.push_str(&format!("<li>{}</li>\n", esc(factor)));
        }
        html.push_str("</ul>\n</div>\n");
    }

    html.push_str("<div class=\"recommendations\">\n<strong>Recommendations:</strong>\n<ul>\n");
    for recommendation in risk.recommendations.iter().take(MAX_RECOMMENDATIONS) {
        html.push_str(&format!("<li>{}</li>\n", esc(recommendation)));
    }
    html.push_str("</ul>\n</div>\n</div>\n");
}

fn render_intake(html: &mut String, assessment: &LifestyleAssessment) {
    let intake = &assessment.dietary_analysis;
    let maintenance = profile_maintenance_calories(&assessment.user_profile);
    let warnings = IntakeWarnings::check(intake, maintenance);

    html.push_str("<div class=\"intake-summary\">\n<h4 class=\"section-title\">🍽️ Your Daily Intake vs Recommendations</h4>\n");
    html.push_str("<div class=\"stat-grid\">\n");
    intake_item(
        html,
        &format!("{:.0}", intake.calories),
        "Calories",
        &format!("Target: {:.0}", maintenance),
        warnings.calories,
    );
    intake_item(
        html,
        &format!("{:.1}g", intake.sugar_g),
        "Sugar",
        &format!("Limit: &lt;{SUGAR_LIMIT_G}g"),
        warnings.sugar,
    );
    intake_item(
        html,
        &format!("{:.1}g", intake.saturated_fat_g),
        "Sat Fat",
        &format!("Limit: &lt;{SATURATED_FAT_LIMIT_G}g"),
        warnings.saturated_fat,
    );
    intake_item(
        html,
        &format!("{:.0}mg", intake.sodium_mg),
        "Sodium",
        &format!("Limit: &lt;{SODIUM_LIMIT_MG}mg"),
        warnings.sodium,
    );
    html.push_str("</div>\n</div>\n");
}

fn render_tracking(html: &mut String, assessment: &LifestyleAssessment) {
    let pattern = &assessment.dietary_pattern;

    html.push_str("<div class=\"tracking-summary\">\n<h4 class=\"section-title\">📊 Dietary Tracking Summary</h4>\n");
    html.push_str("<div class=\"stat-grid\">\n");
    stat(html, &pattern.days_tracked.to_string(), "Days Tracked", "var(--primary)");
    stat(
        html,
        &pattern.total_foods_analyzed.to_string(),
        "Foods Analyzed",
        "var(--primary)",
    );
    stat(html, &pattern.meal_frequency.to_string(), "Meals/Day", "var(--primary)");
    html.push_str("</div>\n</div>\n");
}

/// `value` must already be escaped.
fn stat(html: &mut String, value: &str, label: &str, color: &str) {
    html.push_str(&format!(
        "<div><div class=\"stat-value\" style=\"color: {color};\">{value}</div><div class=\"stat-label\">{label}</div></div>\n"
    ));
}

fn intake_item(html: &mut String, value: &str, label: &str, note: &str, warn: bool) {
    let (color, state) = if warn { (WARN_COLOR, "warning") } else { (OK_COLOR, "ok") };
    html.push_str(&format!(
        "<div class=\"intake-item intake-{state}\"><div class=\"stat-value\" style=\"color: {color};\">{value}</div><div class=\"stat-label\">{label}</div><div class=\"intake-note\">{note}</div></div>\n"
    ));
}
