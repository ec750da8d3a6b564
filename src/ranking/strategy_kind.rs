use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Names the six aggregation strategies.
///
/// The `Display` form is the machine name used in configuration files and
/// reports; [`StrategyKind::title`] is the human-readable form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize, Serialize, Display, EnumIter, EnumString, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Mean of raw scores
    #[default]
    Average,

    /// Median of raw scores
    Median,

    /// Weighted sum of normalized scores
    WeightedSum,

    /// Weighted mean of raw scores
    WeightedMean,

    /// Metric-by-metric wins between exactly two systems
    PairwiseComparison,

    /// Borda count over per-metric rankings
    SocialChoiceTheory,
}

impl StrategyKind {
    /// Machine name, e.g. `weighted_sum`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Median => "median",
            Self::WeightedSum => "weighted_sum",
            Self::WeightedMean => "weighted_mean",
            Self::PairwiseComparison => "pairwise_comparison",
            Self::SocialChoiceTheory => "social_choice_theory",
        }
    }

    /// Display title, e.g. `Weighted Sum`.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Average => "Average",
            Self::Median => "Median",
            Self::WeightedSum => "Weighted Sum",
            Self::WeightedMean => "Weighted Mean",
            Self::PairwiseComparison => "Pairwise Comparison",
            Self::SocialChoiceTheory => "Social Choice Theory",
        }
    }

    /// Whether the strategy needs a weighting scheme.
    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::WeightedSum | Self::WeightedMean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_matches_name() {
        for kind in StrategyKind::iter() {
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_parse_machine_names() {
        assert_eq!("weighted_mean".parse::<StrategyKind>().unwrap(), StrategyKind::WeightedMean);
        assert_eq!(
            "social_choice_theory".parse::<StrategyKind>().unwrap(),
            StrategyKind::SocialChoiceTheory
        );
        assert!("borda".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_command_line_names() {
        for kind in StrategyKind::iter() {
            assert_eq!(<StrategyKind as ValueEnum>::from_str(kind.name(), false), Ok(kind));
        }
    }

    #[test]
    fn test_titles() {
        let titles: Vec<_> = StrategyKind::iter().map(StrategyKind::title).collect();
        assert_eq!(
            titles,
            [
                "Average",
                "Median",
                "Weighted Sum",
                "Weighted Mean",
                "Pairwise Comparison",
                "Social Choice Theory"
            ]
        );
    }

    #[test]
    fn test_serde_uses_machine_names() {
        let json = serde_json::to_string(&StrategyKind::PairwiseComparison).unwrap();
        assert_eq!(json, "\"pairwise_comparison\"");

        let parsed: StrategyKind = serde_json::from_str("\"weighted_sum\"").unwrap();
        assert_eq!(parsed, StrategyKind::WeightedSum);
    }

    #[test]
    fn test_weighted_strategies() {
        let weighted: Vec<_> = StrategyKind::iter().filter(|k| k.is_weighted()).collect();
        assert_eq!(weighted, [StrategyKind::WeightedSum, StrategyKind::WeightedMean]);
    }
}
