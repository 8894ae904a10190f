//! Date normalization: turns a matched temporal expression plus a
//! reference date into a concrete calendar date.
//!
//! Dispatch is on lexical cues in the lowercased expression, in a fixed
//! priority order (anchor words, "for the past", past cues, future cues,
//! "last", "next"), with absolute parsing as the final fallback. Every
//! failure is returned as a [`NormalizationError`]; nothing here panics.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use chrono::{Datelike, Days, Months, NaiveDate};
use regex::Regex;

use super::types::NormalizationError;

/// Quantity + unit inside a relative expression. Applied to lowercased text.
static QUANTITY_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(three|two|one|[0-9]+)\s+(weeks?|days?|months?|years?)").expect("valid regex")
});

static PAST_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"for\s+the\s+past\s+(three|two|one|[0-9]+)\s+(weeks?|days?|months?|years?)")
        .expect("valid regex")
});

const PAST_CUES: [&str; 4] = ["ago", "prior", "before", "earlier"];

/// Years a resolved date may fall in. ISO `YYYY-MM-DD` has no room for
/// year 0, negative years or years past 9999.
const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

// ═══════════════════════════════════════════════════════════
// Absolute formats
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy)]
enum FieldOrder {
    DayMonthYear,
    MonthDayYear,
}

struct NamedMonthFormat {
    regex: Regex,
    order: FieldOrder,
}

/// Month-name layouts, tried in order. Anchored at the start of the text.
static NAMED_MONTH_FORMATS: LazyLock<Vec<NamedMonthFormat>> = LazyLock::new(|| {
    vec![
        // "30th August 2025", "15th of August 2025"
        named(
            r"(?i)^([0-9]{1,2})(?:st|nd|rd|th)\s+(?:of\s+)?([a-z]+)\s+([0-9]{4})",
            FieldOrder::DayMonthYear,
        ),
        // "August 30, 2025", "Aug 30 2025"
        named(
            r"(?i)^([a-z]+)\s+([0-9]{1,2})(?:,\s*|\s+)([0-9]{4})",
            FieldOrder::MonthDayYear,
        ),
        // "30 Aug 2025", "30th Aug 2025"
        named(
            r"(?i)^([0-9]{1,2})(?:st|nd|rd|th)?\s+([a-z]+)\s+([0-9]{4})",
            FieldOrder::DayMonthYear,
        ),
    ]
});

/// "08/22/2025", "8-22-25". Month first.
static NUMERIC_MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})[/-]([0-9]{1,2})[/-]([0-9]{2,4})").expect("valid regex")
});

/// "2025-08-22", "2025/8/22".
static NUMERIC_YEAR_MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})[/-]([0-9]{1,2})[/-]([0-9]{1,2})").expect("valid regex")
});

fn named(pattern: &str, order: FieldOrder) -> NamedMonthFormat {
    NamedMonthFormat {
        regex: Regex::new(pattern).expect("Invalid date format regex"),
        order,
    }
}

// ═══════════════════════════════════════════════════════════
// Units and direction
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Read a unit from a phrase like "weeks" or "last month".
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        if phrase.contains("day") {
            Some(Self::Day)
        } else if phrase.contains("week") {
            Some(Self::Week)
        } else if phrase.contains("month") {
            Some(Self::Month)
        } else if phrase.contains("year") {
            Some(Self::Year)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

// ═══════════════════════════════════════════════════════════
// Entry point
// ═══════════════════════════════════════════════════════════

/// Resolve a matched temporal expression against `reference`.
pub fn normalize(text: &str, reference: NaiveDate) -> Result<NaiveDate, NormalizationError> {
    let lower = text.to_lowercase();

    if lower.contains("today") {
        return within_year_range(reference);
    }
    if lower.contains("yesterday") {
        return shift(reference, 1, TimeUnit::Day, Direction::Past, text);
    }
    if lower.contains("tomorrow") {
        return shift(reference, 1, TimeUnit::Day, Direction::Future, text);
    }

    if lower.contains("for the past") {
        return past_duration_start(&lower, reference, text);
    }

    if PAST_CUES.iter().any(|cue| lower.contains(cue)) {
        return relative_offset(&lower, reference, Direction::Past, text);
    }
    if lower.contains("from now")
        || lower.contains("later")
        || lower.starts_with("in ")
        || lower.starts_with("after ")
    {
        return relative_offset(&lower, reference, Direction::Future, text);
    }

    if lower.contains("last") {
        return adjacent_unit(&lower, reference, Direction::Past, text);
    }
    if lower.contains("next") {
        return adjacent_unit(&lower, reference, Direction::Future, text);
    }

    parse_absolute(text)
}

/// Parse a word or ASCII decimal quantity. Only "one", "two" and
/// "three" are recognised as words.
pub fn parse_quantity(word: &str) -> Result<u32, NormalizationError> {
    match word {
        "one" => Ok(1),
        "two" => Ok(2),
        "three" => Ok(3),
        digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => digits
            .parse()
            .map_err(|_| NormalizationError::Overflow(digits.to_string())),
        other => Err(NormalizationError::UnrecognisedFormat(other.to_string())),
    }
}

/// Add `months` calendar months to `date`, clamping the day to the last
/// day of the target month. Returns `None` outside chrono's date range.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let step = Months::new(months.unsigned_abs());
    if months < 0 {
        date.checked_sub_months(step)
    } else {
        date.checked_add_months(step)
    }
}

// ═══════════════════════════════════════════════════════════
// Relative expressions
// ═══════════════════════════════════════════════════════════

/// "for the past two weeks" → the start of that span.
fn past_duration_start(
    lower: &str,
    reference: NaiveDate,
    text: &str,
) -> Result<NaiveDate, NormalizationError> {
    let caps = PAST_DURATION
        .captures(lower)
        .ok_or_else(|| NormalizationError::UnrecognisedFormat(text.to_string()))?;
    offset_from_captures(&caps[1], &caps[2], reference, Direction::Past, text)
}

/// "three weeks ago", "in 2 days", "two weeks from now".
fn relative_offset(
    lower: &str,
    reference: NaiveDate,
    direction: Direction,
    text: &str,
) -> Result<NaiveDate, NormalizationError> {
    let caps = QUANTITY_UNIT
        .captures(lower)
        .ok_or_else(|| NormalizationError::UnrecognisedFormat(text.to_string()))?;
    offset_from_captures(&caps[1], &caps[2], reference, direction, text)
}

fn offset_from_captures(
    quantity: &str,
    unit: &str,
    reference: NaiveDate,
    direction: Direction,
    text: &str,
) -> Result<NaiveDate, NormalizationError> {
    let amount = parse_quantity(quantity)?;
    let unit = TimeUnit::from_phrase(unit)
        .ok_or_else(|| NormalizationError::UnrecognisedFormat(text.to_string()))?;
    shift(reference, amount, unit, direction, text)
}

/// "last week", "next year": exactly one unit away.
fn adjacent_unit(
    lower: &str,
    reference: NaiveDate,
    direction: Direction,
    text: &str,
) -> Result<NaiveDate, NormalizationError> {
    let unit = [TimeUnit::Week, TimeUnit::Month, TimeUnit::Year]
        .into_iter()
        .find(|unit| match unit {
            TimeUnit::Week => lower.contains("week"),
            TimeUnit::Month => lower.contains("month"),
            TimeUnit::Year => lower.contains("year"),
            TimeUnit::Day => false,
        })
        .ok_or_else(|| NormalizationError::UnrecognisedFormat(text.to_string()))?;
    shift(reference, 1, unit, direction, text)
}

/// Move `amount` units away from `reference`.
pub fn shift(
    reference: NaiveDate,
    amount: u32,
    unit: TimeUnit,
    direction: Direction,
    text: &str,
) -> Result<NaiveDate, NormalizationError> {
    let overflow = || NormalizationError::Overflow(text.to_string());

    let shifted = match unit {
        TimeUnit::Day => step_days(reference, u64::from(amount), direction),
        TimeUnit::Week => step_days(reference, u64::from(amount) * 7, direction),
        TimeUnit::Month => {
            let months = signed_months(amount, direction).ok_or_else(overflow)?;
            add_months(reference, months)
        }
        TimeUnit::Year => {
            let months = signed_months(amount, direction)
                .and_then(|m| m.checked_mul(12))
                .ok_or_else(overflow)?;
            add_months(reference, months)
        }
    };

    shifted.ok_or_else(overflow).and_then(within_year_range)
}

fn step_days(reference: NaiveDate, days: u64, direction: Direction) -> Option<NaiveDate> {
    match direction {
        Direction::Past => reference.checked_sub_days(Days::new(days)),
        Direction::Future => reference.checked_add_days(Days::new(days)),
    }
}

fn signed_months(amount: u32, direction: Direction) -> Option<i32> {
    let months = i32::try_from(amount).ok()?;
    Some(match direction {
        Direction::Past => -months,
        Direction::Future => months,
    })
}

// ═══════════════════════════════════════════════════════════
// Absolute expressions
// ═══════════════════════════════════════════════════════════

/// Parse an absolute date, trying each layout in order. The first layout
/// that matches with a known month decides the outcome.
pub fn parse_absolute(text: &str) -> Result<NaiveDate, NormalizationError> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut failure = NormalizationError::UnrecognisedFormat(cleaned.clone());

    for format in NAMED_MONTH_FORMATS.iter() {
        let Some(caps) = format.regex.captures(&cleaned) else {
            continue;
        };
        let (day, month_name, year) = match format.order {
            FieldOrder::DayMonthYear => (&caps[1], &caps[2], &caps[3]),
            FieldOrder::MonthDayYear => (&caps[2], &caps[1], &caps[3]),
        };
        match month_number(month_name) {
            Some(month) => {
                return calendar_date(number(year, &cleaned)?, month, number(day, &cleaned)?);
            }
            None => failure = NormalizationError::UnknownMonth(month_name.to_string()),
        }
    }

    if let Some(caps) = NUMERIC_MONTH_DAY_YEAR.captures(&cleaned) {
        let year = pivot_two_digit_year(number(&caps[3], &cleaned)?);
        return calendar_date(year, number(&caps[1], &cleaned)?, number(&caps[2], &cleaned)?);
    }

    if let Some(caps) = NUMERIC_YEAR_MONTH_DAY.captures(&cleaned) {
        return calendar_date(
            number(&caps[1], &cleaned)?,
            number(&caps[2], &cleaned)?,
            number(&caps[3], &cleaned)?,
        );
    }

    Err(failure)
}

/// Two-digit years: below 50 → 2000s, otherwise 1900s.
fn pivot_two_digit_year(year: i32) -> i32 {
    match year {
        0..=49 => 2000 + year,
        50..=99 => 1900 + year,
        _ => year,
    }
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}

fn number<T: std::str::FromStr>(digits: &str, text: &str) -> Result<T, NormalizationError> {
    digits
        .parse()
        .map_err(|_| NormalizationError::UnrecognisedFormat(text.to_string()))
}

fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, NormalizationError> {
    let out_of_range = NormalizationError::OutOfRange { year, month, day };
    if !YEAR_RANGE.contains(&year) {
        return Err(out_of_range);
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(out_of_range)
}

fn within_year_range(date: NaiveDate) -> Result<NaiveDate, NormalizationError> {
    if YEAR_RANGE.contains(&date.year()) {
        Ok(date)
    } else {
        Err(NormalizationError::OutOfRange {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn reference() -> NaiveDate {
        d(2025, 8, 22)
    }

    // =================================================================
    // ANCHOR WORDS
    // =================================================================

    #[test]
    fn today_yesterday_tomorrow() {
        assert_eq!(normalize("today", reference()), Ok(d(2025, 8, 22)));
        assert_eq!(normalize("Yesterday", reference()), Ok(d(2025, 8, 21)));
        assert_eq!(normalize("TOMORROW", reference()), Ok(d(2025, 8, 23)));
    }

    #[test]
    fn yesterday_crosses_year_boundary() {
        assert_eq!(normalize("yesterday", d(2025, 1, 1)), Ok(d(2024, 12, 31)));
    }

    // =================================================================
    // RELATIVE
    // =================================================================

    #[test]
    fn three_weeks_ago() {
        assert_eq!(normalize("three weeks ago", reference()), Ok(d(2025, 8, 1)));
    }

    #[test]
    fn for_the_past_two_weeks() {
        assert_eq!(normalize("for the past two weeks", reference()), Ok(d(2025, 8, 8)));
    }

    #[test]
    fn past_cues_subtract() {
        assert_eq!(normalize("2 days prior", reference()), Ok(d(2025, 8, 20)));
        assert_eq!(normalize("one month before", reference()), Ok(d(2025, 7, 22)));
        assert_eq!(normalize("1 year earlier", reference()), Ok(d(2024, 8, 22)));
    }

    #[test]
    fn future_cues_add() {
        assert_eq!(normalize("two weeks from now", reference()), Ok(d(2025, 9, 5)));
        assert_eq!(normalize("in 3 days", reference()), Ok(d(2025, 8, 25)));
        assert_eq!(normalize("10 days later", reference()), Ok(d(2025, 9, 1)));
        assert_eq!(normalize("in two months", reference()), Ok(d(2025, 10, 22)));
    }

    #[test]
    fn after_n_days_is_read_as_future_offset() {
        // "The fever subsided after 5 days" reads as past narrative, but the
        // expression is resolved forward from the reference date.
        assert_eq!(normalize("after 5 days", reference()), Ok(d(2025, 8, 27)));
    }

    #[test]
    fn last_and_next() {
        assert_eq!(normalize("last week", reference()), Ok(d(2025, 8, 15)));
        assert_eq!(normalize("last month", reference()), Ok(d(2025, 7, 22)));
        assert_eq!(normalize("last year", reference()), Ok(d(2024, 8, 22)));
        assert_eq!(normalize("next week", reference()), Ok(d(2025, 8, 29)));
        assert_eq!(normalize("next month", reference()), Ok(d(2025, 9, 22)));
        assert_eq!(normalize("Next Year", reference()), Ok(d(2026, 8, 22)));
    }

    #[test]
    fn last_month_clamps_day() {
        assert_eq!(normalize("last month", d(2025, 3, 31)), Ok(d(2025, 2, 28)));
    }

    #[test]
    fn unknown_word_number_fails() {
        assert!(matches!(
            normalize("several weeks ago", reference()),
            Err(NormalizationError::UnrecognisedFormat(_))
        ));
    }

    #[test]
    fn huge_quantity_overflows() {
        assert!(matches!(
            normalize("99999999999 days ago", reference()),
            Err(NormalizationError::Overflow(_))
        ));
        assert!(matches!(
            normalize("4000000000 years ago", reference()),
            Err(NormalizationError::Overflow(_))
        ));
        assert!(matches!(
            normalize("900000 years from now", reference()),
            Err(NormalizationError::Overflow(_))
        ));
    }

    #[test]
    fn parse_quantity_words_and_digits() {
        assert_eq!(parse_quantity("one"), Ok(1));
        assert_eq!(parse_quantity("three"), Ok(3));
        assert_eq!(parse_quantity("14"), Ok(14));
        assert_eq!(
            parse_quantity("four"),
            Err(NormalizationError::UnrecognisedFormat("four".into()))
        );
        assert_eq!(
            parse_quantity("99999999999"),
            Err(NormalizationError::Overflow("99999999999".into()))
        );
    }

    #[test]
    fn non_ascii_digits_are_not_quantities() {
        assert_eq!(
            parse_quantity("\u{663}"),
            Err(NormalizationError::UnrecognisedFormat("\u{663}".into()))
        );
        assert!(matches!(
            normalize("\u{663} weeks ago", reference()),
            Err(NormalizationError::UnrecognisedFormat(_))
        ));
    }

    // =================================================================
    // YEAR RANGE
    // =================================================================

    #[test]
    fn relative_results_outside_four_digit_years_fail() {
        assert_eq!(
            normalize("3000 years ago", reference()),
            Err(NormalizationError::OutOfRange {
                year: -975,
                month: 8,
                day: 22
            })
        );
        assert_eq!(
            normalize("in 9000 years", reference()),
            Err(NormalizationError::OutOfRange {
                year: 11025,
                month: 8,
                day: 22
            })
        );
        assert_eq!(
            normalize("tomorrow", d(9999, 12, 31)),
            Err(NormalizationError::OutOfRange {
                year: 10000,
                month: 1,
                day: 1
            })
        );
        assert_eq!(
            normalize("yesterday", d(1, 1, 1)),
            Err(NormalizationError::OutOfRange {
                year: 0,
                month: 12,
                day: 31
            })
        );
        assert!(matches!(
            normalize("today", d(0, 6, 1)),
            Err(NormalizationError::OutOfRange { year: 0, .. })
        ));
    }

    #[test]
    fn absolute_year_zero_fails() {
        assert_eq!(
            normalize("0000-01-01", reference()),
            Err(NormalizationError::OutOfRange {
                year: 0,
                month: 1,
                day: 1
            })
        );
    }

    #[test]
    fn year_range_bounds_are_inclusive() {
        assert_eq!(normalize("9999-12-31", reference()), Ok(d(9999, 12, 31)));
        assert_eq!(normalize("0001-01-01", reference()), Ok(d(1, 1, 1)));
        assert_eq!(normalize("7974 years from now", reference()), Ok(d(9999, 8, 22)));
        assert_eq!(normalize("2024 years ago", reference()), Ok(d(1, 8, 22)));
    }

    // =================================================================
    // MONTH ARITHMETIC
    // =================================================================

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(add_months(d(2025, 1, 31), 1), Some(d(2025, 2, 28)));
        assert_eq!(add_months(d(2024, 1, 31), 1), Some(d(2024, 2, 29)));
        assert_eq!(add_months(d(2025, 3, 31), -1), Some(d(2025, 2, 28)));
        assert_eq!(add_months(d(2024, 3, 31), -1), Some(d(2024, 2, 29)));
        assert_eq!(add_months(d(2025, 5, 31), 1), Some(d(2025, 6, 30)));
    }

    #[test]
    fn add_months_carries_and_borrows_years() {
        assert_eq!(add_months(d(2025, 1, 31), -1), Some(d(2024, 12, 31)));
        assert_eq!(add_months(d(2025, 11, 15), 3), Some(d(2026, 2, 15)));
        assert_eq!(add_months(d(2025, 2, 10), -26), Some(d(2022, 12, 10)));
        assert_eq!(add_months(d(2024, 2, 29), 12), Some(d(2025, 2, 28)));
        assert_eq!(add_months(d(2025, 8, 22), 0), Some(d(2025, 8, 22)));
    }

    #[test]
    fn add_months_out_of_range_is_none() {
        assert_eq!(add_months(NaiveDate::MAX, 1), None);
        assert_eq!(add_months(d(2025, 1, 1), i32::MIN), None);
    }

    // =================================================================
    // ABSOLUTE
    // =================================================================

    #[test]
    fn ordinal_day_month_year() {
        assert_eq!(normalize("30th August 2025", reference()), Ok(d(2025, 8, 30)));
        assert_eq!(normalize("15th of August 2025", reference()), Ok(d(2025, 8, 15)));
        assert_eq!(normalize("1st Mar 2024", reference()), Ok(d(2024, 3, 1)));
    }

    #[test]
    fn month_day_year() {
        assert_eq!(normalize("August 22, 2025", reference()), Ok(d(2025, 8, 22)));
        assert_eq!(normalize("August 30 2025", reference()), Ok(d(2025, 8, 30)));
        assert_eq!(normalize("sep 5,2025", reference()), Ok(d(2025, 9, 5)));
    }

    #[test]
    fn day_month_year_without_ordinal() {
        assert_eq!(normalize("30 Aug 2025", reference()), Ok(d(2025, 8, 30)));
    }

    #[test]
    fn numeric_month_first() {
        assert_eq!(normalize("08/22/2025", reference()), Ok(d(2025, 8, 22)));
        assert_eq!(normalize("8-2-2025", reference()), Ok(d(2025, 8, 2)));
    }

    #[test]
    fn two_digit_year_pivot() {
        assert_eq!(normalize("08/22/25", reference()), Ok(d(2025, 8, 22)));
        assert_eq!(normalize("08/22/49", reference()), Ok(d(2049, 8, 22)));
        assert_eq!(normalize("08/22/50", reference()), Ok(d(1950, 8, 22)));
        assert_eq!(normalize("1/2/99", reference()), Ok(d(1999, 1, 2)));
    }

    #[test]
    fn numeric_year_first() {
        assert_eq!(normalize("2025-08-22", reference()), Ok(d(2025, 8, 22)));
        assert_eq!(normalize("2025/1/5", reference()), Ok(d(2025, 1, 5)));
    }

    #[test]
    fn out_of_range_dates_fail() {
        assert_eq!(
            normalize("April 31, 2025", reference()),
            Err(NormalizationError::OutOfRange {
                year: 2025,
                month: 4,
                day: 31
            })
        );
        assert_eq!(
            normalize("22/08/2025", reference()),
            Err(NormalizationError::OutOfRange {
                year: 2025,
                month: 22,
                day: 8
            })
        );
        assert!(matches!(
            normalize("29th February 2025", reference()),
            Err(NormalizationError::OutOfRange { .. })
        ));
        assert_eq!(normalize("29th February 2024", reference()), Ok(d(2024, 2, 29)));
    }

    #[test]
    fn unknown_month_is_distinguished_from_bad_format() {
        assert_eq!(
            normalize("Smarch 3, 2025", reference()),
            Err(NormalizationError::UnknownMonth("Smarch".into()))
        );
        assert!(matches!(
            normalize("no date here", reference()),
            Err(NormalizationError::UnrecognisedFormat(_))
        ));
    }

    #[test]
    fn collapses_whitespace_before_absolute_parse() {
        assert_eq!(normalize("  August   22,  2025 ", reference()), Ok(d(2025, 8, 22)));
    }

    #[test]
    fn time_unit_from_phrase() {
        assert_eq!(TimeUnit::from_phrase("days"), Some(TimeUnit::Day));
        assert_eq!(TimeUnit::from_phrase("week"), Some(TimeUnit::Week));
        assert_eq!(TimeUnit::from_phrase("months"), Some(TimeUnit::Month));
        assert_eq!(TimeUnit::from_phrase("years"), Some(TimeUnit::Year));
        assert_eq!(TimeUnit::from_phrase("hours"), None);
    }
}
