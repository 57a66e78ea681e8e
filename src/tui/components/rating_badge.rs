//! Rating badges coloured by tone.

use crossterm::style::{StyledContent, Stylize};

use crate::api::Rating;
use crate::portfolio::BadgeTone;

/// Renders `rating` as a bracketed badge without colour.
#[must_use]
pub fn plain_badge(rating: &Rating) -> String {
    format!("[{rating}]")
}

/// Renders `rating` as a bracketed badge coloured for `tone`.
#[must_use]
pub fn styled_badge(rating: &Rating, tone: BadgeTone) -> String {
    colour(plain_badge(rating), tone).to_string()
}

fn colour(text: String, tone: BadgeTone) -> StyledContent<String> {
    match tone {
        BadgeTone::Success => text.green().bold(),
        BadgeTone::Warning => text.yellow().bold(),
        BadgeTone::Danger => text.red().bold(),
        BadgeTone::Secondary => text.dark_grey(),
    }
}
