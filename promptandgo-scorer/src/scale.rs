//! Piecewise mapping from raw points to a display percentage.
//!
//! Typical raw scores land between 5 and 40; the bands below spread that
//! range across `0..=100`:
//!
//! | raw       | percentage               |
//! |-----------|--------------------------|
//! | `>= 30`   | `90 + min(10, raw - 30)` |
//! | `20..30`  | `70 + (raw - 20) * 2`    |
//! | `10..20`  | `50 + (raw - 10) * 2`    |
//! | `5..10`   | `30 + (raw - 5) * 4`     |
//! | `< 5`     | `raw * 6`                |

/// Map raw relevance points onto a `0..=100` percentage.
///
/// The mapping is non-decreasing in `raw` and meets each band boundary
/// exactly (5 → 30, 10 → 50, 20 → 70, 30 → 90).
///
/// # Examples
/// ```
/// use promptandgo_scorer::relevance_percentage;
///
/// assert_eq!(relevance_percentage(0), 0);
/// assert_eq!(relevance_percentage(15), 60);
/// assert_eq!(relevance_percentage(35), 95);
/// assert_eq!(relevance_percentage(500), 100);
/// ```
#[must_use]
pub fn relevance_percentage(raw: u32) -> u8 {
    let percentage = match raw {
        30.. => 90 + (raw - 30).min(10),
        20..30 => 70 + (raw - 20) * 2,
        10..20 => 50 + (raw - 10) * 2,
        5..10 => 30 + (raw - 5) * 4,
        _ => raw * 6,
    };
    u8::try_from(percentage.min(100)).unwrap_or(100)
}
