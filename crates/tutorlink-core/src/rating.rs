//! Star-rating rendering

use serde::Serialize;

/// Number of symbols in every rendered rating
pub const STAR_COUNT: usize = 5;

const MAX_RATING: f64 = 5.0;

/// One symbol of a star rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Full => '★',
            Self::Half => '⯨',
            Self::Empty => '☆',
        }
    }
}

/// Break a rating into exactly five symbols
///
/// `floor(rating)` full stars, one half star when the fractional part is at
/// least 0.5, empty stars for the rest. Out-of-range ratings are clamped to
/// [0, 5] and NaN renders as zero.
#[must_use]
pub fn star_symbols(rating: f64) -> [Star; STAR_COUNT] {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    };

    let whole = rating.floor();
    // clamped to [0, 5] above, so the cast cannot truncate or wrap
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full = whole as usize;
    let has_half = rating - whole >= 0.5;

    let mut stars = [Star::Empty; STAR_COUNT];
    for star in stars.iter_mut().take(full) {
        *star = Star::Full;
    }
    if has_half && full < STAR_COUNT {
        stars[full] = Star::Half;
    }
    stars
}

/// Render a rating as a five-character glyph string, e.g. `★★★★⯨`
#[must_use]
pub fn render_stars(rating: f64) -> String {
    star_symbols(rating).iter().map(|star| star.glyph()).collect()
}
