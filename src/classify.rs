//! Risk tier classification.
//!
//! Two fixed partitions:
//! - per-food score: `0` low, `(0, 3)` medium, `[3, ∞)` high
//! - aggregate lifestyle percentage: `<20` low, `<40` moderate,
//!   `<70` high, otherwise very high

use serde::Serialize;

/// Score boundary at which a food is high risk.
pub const FOOD_HIGH_SCORE: f64 = 3.0;

/// Lifestyle percentage boundaries (exclusive upper bounds).
pub const LIFESTYLE_LOW_BELOW: f64 = 20.0;
pub const LIFESTYLE_MODERATE_BELOW: f64 = 40.0;
pub const LIFESTYLE_HIGH_BELOW: f64 = 70.0;

/// Display colour/icon for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStyle {
    pub color: &'static str,
    pub background: &'static str,
    pub icon: &'static str,
}

const STYLE_LOW: TierStyle = TierStyle {
    color: "#2a9d8f",
    background: "rgba(42, 157, 143, 0.1)",
    icon: "✅",
};
const STYLE_MEDIUM: TierStyle = TierStyle {
    color: "#e9c46a",
    background: "rgba(233, 196, 106, 0.1)",
    icon: "⚠️",
};
const STYLE_HIGH: TierStyle = TierStyle {
    color: "#e76f51",
    background: "rgba(231, 111, 81, 0.1)",
    icon: "🚨",
};
const STYLE_VERY_HIGH: TierStyle = TierStyle {
    color: "#c53030",
    background: "rgba(197, 48, 48, 0.1)",
    icon: "🔴",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodRiskTier {
    Low,
    Medium,
    High,
}

impl FoodRiskTier {
    pub fn from_score(score: f64) -> Self {
        if score == 0.0 {
            FoodRiskTier::Low
        } else if score < FOOD_HIGH_SCORE {
            FoodRiskTier::Medium
        } else {
            FoodRiskTier::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodRiskTier::Low => "low",
            FoodRiskTier::Medium => "medium",
            FoodRiskTier::High => "high",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FoodRiskTier::Low => "risk-low",
            FoodRiskTier::Medium => "risk-medium",
            FoodRiskTier::High => "risk-high",
        }
    }

    pub fn style(&self) -> TierStyle {
        match self {
            FoodRiskTier::Low => STYLE_LOW,
            FoodRiskTier::Medium => STYLE_MEDIUM,
            FoodRiskTier::High => STYLE_HIGH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleRiskTier {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl LifestyleRiskTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < LIFESTYLE_LOW_BELOW {
            LifestyleRiskTier::Low
        } else if percentage < LIFESTYLE_MODERATE_BELOW {
            LifestyleRiskTier::Moderate
        } else if percentage < LIFESTYLE_HIGH_BELOW {
            LifestyleRiskTier::High
        } else {
            LifestyleRiskTier::VeryHigh
        }
    }

    /// Classify a `[0, 1]` score.
    pub fn from_fraction(fraction: f64) -> Self {
        Self::from_percentage(fraction * 100.0)
    }

    /// Read a server-provided level such as `"very_high"`.
    pub fn parse(level: &str) -> Option<Self> {
        match level.trim().to_lowercase().replace(' ', "_").as_str() {
            "low" => Some(LifestyleRiskTier::Low),
            "moderate" => Some(LifestyleRiskTier::Moderate),
            "high" => Some(LifestyleRiskTier::High),
            "very_high" => Some(LifestyleRiskTier::VeryHigh),
            _ => None,
        }
    }

    /// Server level if recognised, else classify the percentage.
    pub fn resolve(level: &str, percentage: f64) -> Self {
        Self::parse(level).unwrap_or_else(|| Self::from_percentage(percentage))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LifestyleRiskTier::Low => "low",
            LifestyleRiskTier::Moderate => "moderate",
            LifestyleRiskTier::High => "high",
            LifestyleRiskTier::VeryHigh => "very_high",
        }
    }

    /// `"very high"`-style label.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn style(&self) -> TierStyle {
        match self {
            LifestyleRiskTier::Low => STYLE_LOW,
            LifestyleRiskTier::Moderate => STYLE_MEDIUM,
            LifestyleRiskTier::High => STYLE_HIGH,
            LifestyleRiskTier::VeryHigh => STYLE_VERY_HIGH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_tier_boundaries() {
        assert_eq!(FoodRiskTier::from_score(0.0), FoodRiskTier::Low);
        assert_eq!(FoodRiskTier::from_score(0.01), FoodRiskTier::Medium);
        assert_eq!(FoodRiskTier::from_score(2.999), FoodRiskTier::Medium);
        assert_eq!(FoodRiskTier::from_score(3.0), FoodRiskTier::High);
        assert_eq!(FoodRiskTier::from_score(7.5), FoodRiskTier::High);
    }

    #[test]
    fn test_food_tier_partition_over_range() {
        for i in 0..=600 {
            let s = i as f64 / 100.0;
            let tier = FoodRiskTier::from_score(s);
            assert_eq!(tier == FoodRiskTier::Low, s == 0.0, "score {s}");
            assert_eq!(tier == FoodRiskTier::High, s >= 3.0, "score {s}");
        }
    }

    #[test]
    fn test_lifestyle_tier_boundaries() {
        assert_eq!(LifestyleRiskTier::from_percentage(19.99), LifestyleRiskTier::Low);
        assert_eq!(LifestyleRiskTier::from_percentage(20.0), LifestyleRiskTier::Moderate);
        assert_eq!(LifestyleRiskTier::from_percentage(39.99), LifestyleRiskTier::Moderate);
        assert_eq!(LifestyleRiskTier::from_percentage(40.0), LifestyleRiskTier::High);
        assert_eq!(LifestyleRiskTier::from_percentage(69.99), LifestyleRiskTier::High);
        assert_eq!(LifestyleRiskTier::from_percentage(70.0), LifestyleRiskTier::VeryHigh);
    }

    #[test]
    fn test_lifestyle_fraction_scaling() {
        assert_eq!(LifestyleRiskTier::from_fraction(0.25), LifestyleRiskTier::Moderate);
        assert_eq!(LifestyleRiskTier::from_fraction(0.0), LifestyleRiskTier::Low);
        assert_eq!(LifestyleRiskTier::from_fraction(1.0), LifestyleRiskTier::VeryHigh);
    }

    #[test]
    fn test_parse_server_level() {
        assert_eq!(LifestyleRiskTier::parse("very_high"), Some(LifestyleRiskTier::VeryHigh));
        assert_eq!(LifestyleRiskTier::parse("Moderate"), Some(LifestyleRiskTier::Moderate));
        assert_eq!(LifestyleRiskTier::parse("extreme"), None);
        assert_eq!(LifestyleRiskTier::resolve("extreme", 55.0), LifestyleRiskTier::High);
    }

    #[test]
    fn test_labels_and_styles() {
        assert_eq!(LifestyleRiskTier::VeryHigh.label(), "very high");
        assert_eq!(LifestyleRiskTier::VeryHigh.style().icon, "🔴");
        assert_eq!(FoodRiskTier::Medium.style(), LifestyleRiskTier::Moderate.style());
        assert_eq!(FoodRiskTier::High.css_class(), "risk-high");
    }
}
