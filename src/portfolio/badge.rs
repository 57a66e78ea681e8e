//! Badge styling keyed by rating value.

use crate::api::Rating;

/// Visual tone of a rating badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Best grade.
    Success,
    /// Middle grade.
    Warning,
    /// Worst grade.
    Danger,
    /// No grade available.
    Secondary,
}

/// Tone for a single record's rating: anything other than `AAA` or `BBB`
/// is shown as danger.
#[must_use]
pub fn record_tone(rating: &Rating) -> BadgeTone {
    match rating.as_str() {
        "AAA" => BadgeTone::Success,
        "BBB" => BadgeTone::Warning,
        _ => BadgeTone::Danger,
    }
}

/// Tone for the portfolio rating: unknown values (including `N/A`) are
/// neutral.
#[must_use]
pub fn portfolio_tone(rating: &Rating) -> BadgeTone {
    match rating.as_str() {
        "AAA" => BadgeTone::Success,
        "BBB" => BadgeTone::Warning,
        "C" => BadgeTone::Danger,
        _ => BadgeTone::Secondary,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::aaa("AAA", BadgeTone::Success, BadgeTone::Success)]
    #[case::bbb("BBB", BadgeTone::Warning, BadgeTone::Warning)]
    #[case::c("C", BadgeTone::Danger, BadgeTone::Danger)]
    #[case::unavailable("N/A", BadgeTone::Danger, BadgeTone::Secondary)]
    #[case::unexpected("BB", BadgeTone::Danger, BadgeTone::Secondary)]
    fn tones_follow_rating(
        #[case] value: &str,
        #[case] record: BadgeTone,
        #[case] portfolio: BadgeTone,
    ) {
        let rating = Rating::new(value);
        assert_eq!(record_tone(&rating), record);
        assert_eq!(portfolio_tone(&rating), portfolio);
    }
}
