use regex::Regex;
use time::{
	Date, Month, OffsetDateTime, PrimitiveDateTime, Time,
	format_description::{BorrowedFormatItem, well_known::Rfc3339},
	macros::format_description,
};

/// Dominant format the sheet's intake pipeline writes, e.g.
/// `27-Feb-2026 3:45 pm`. Matched after whitespace normalization with no end
/// anchor, so trailing garbage from the sheet's auto-formatting is tolerated.
const EXPLICIT_PATTERN: &str = r"^(\d{1,2})-([A-Za-z]{3})-(\d{4}) (\d{1,2}):(\d{2}) ?([AaPp][Mm])";

const FALLBACK_WITH_TIME: [&[BorrowedFormatItem<'static>]; 4] = [
	format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
	format_description!("[year]-[month]-[day] [hour]:[minute]"),
	format_description!(
		"[month padding:none]/[day padding:none]/[year] [hour padding:none]:[minute]:[second]"
	),
	format_description!("[month padding:none]/[day padding:none]/[year] [hour padding:none]:[minute]"),
];
const FALLBACK_DATE_ONLY: [&[BorrowedFormatItem<'static>]; 2] = [
	format_description!("[year]-[month]-[day]"),
	format_description!("[month padding:none]/[day padding:none]/[year]"),
];

/// Parses a loosely formatted sheet timestamp. Returns `None` when neither
/// the explicit pattern nor the generic fallbacks match; such records are
/// excluded from trend bucketing but stay in the lead list.
pub fn parse_created_time(raw: &str) -> Option<PrimitiveDateTime> {
	let cleaned = normalize_whitespace(raw);

	if cleaned.is_empty() {
		return None;
	}
	if let Some(parsed) = parse_explicit(&cleaned) {
		return Some(parsed);
	}

	parse_fallback(raw.trim())
}

/// Sortable bucketing key, `YYYY-MM-DD`; lexicographic order is
/// chronological order.
pub fn day_key(date: Date) -> String {
	format!("{:04}-{:02}-{:02}", date.year(), date.month() as u8, date.day())
}

/// Human-readable label for a chart tick, e.g. `27 Feb`.
pub fn day_label(date: Date) -> String {
	let month = date.month().to_string();

	format!("{:02} {}", date.day(), &month[..3])
}

fn normalize_whitespace(raw: &str) -> String {
	raw.replace('\u{a0}', " ").split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_explicit(cleaned: &str) -> Option<PrimitiveDateTime> {
	let pattern = Regex::new(EXPLICIT_PATTERN).ok()?;
	let captures = pattern.captures(cleaned)?;
	let day: u8 = captures[1].parse().ok()?;
	let month = month_from_abbrev(&captures[2])?;
	let year: i32 = captures[3].parse().ok()?;
	let mut hour: u8 = captures[4].parse().ok()?;
	let minute: u8 = captures[5].parse().ok()?;

	match captures[6].to_ascii_lowercase().as_str() {
		"pm" if hour != 12 => hour += 12,
		"am" if hour == 12 => hour = 0,
		_ => {},
	}

	let date = Date::from_calendar_date(year, month, day).ok()?;
	let time = Time::from_hms(hour, minute, 0).ok()?;

	Some(PrimitiveDateTime::new(date, time))
}

fn parse_fallback(raw: &str) -> Option<PrimitiveDateTime> {
	if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
		return Some(PrimitiveDateTime::new(parsed.date(), parsed.time()));
	}

	for format in FALLBACK_WITH_TIME {
		if let Ok(parsed) = PrimitiveDateTime::parse(raw, format) {
			return Some(parsed);
		}
	}
	for format in FALLBACK_DATE_ONLY {
		if let Ok(parsed) = Date::parse(raw, format) {
			return Some(PrimitiveDateTime::new(parsed, Time::MIDNIGHT));
		}
	}

	None
}

fn month_from_abbrev(abbrev: &str) -> Option<Month> {
	match abbrev.to_ascii_lowercase().as_str() {
		"jan" => Some(Month::January),
		"feb" => Some(Month::February),
		"mar" => Some(Month::March),
		"apr" => Some(Month::April),
		"may" => Some(Month::May),
		"jun" => Some(Month::June),
		"jul" => Some(Month::July),
		"aug" => Some(Month::August),
		"sep" => Some(Month::September),
		"oct" => Some(Month::October),
		"nov" => Some(Month::November),
		"dec" => Some(Month::December),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parsed(raw: &str) -> PrimitiveDateTime {
		parse_created_time(raw).expect("Failed to parse timestamp.")
	}

	#[test]
	fn parses_the_dominant_sheet_format() {
		let value = parsed("27-Feb-2026 3:45 pm");

		assert_eq!(day_key(value.date()), "2026-02-27");
		assert_eq!(value.hour(), 15);
		assert_eq!(value.minute(), 45);
	}

	#[test]
	fn twelve_am_is_midnight() {
		let value = parsed("27-Feb-2026 12:15 am");

		assert_eq!(value.hour(), 0);
		assert_eq!(value.minute(), 15);
	}

	#[test]
	fn twelve_pm_is_noon() {
		assert_eq!(parsed("1-Jan-2026 12:00 pm").hour(), 12);
	}

	#[test]
	fn tolerates_non_breaking_spaces_and_trailing_garbage() {
		let value = parsed("27-Feb-2026\u{a0}\u{a0}3:45\u{a0}PM (auto)");

		assert_eq!(value.hour(), 15);
		assert_eq!(day_key(value.date()), "2026-02-27");
	}

	#[test]
	fn falls_back_to_generic_formats() {
		assert_eq!(day_key(parsed("2026-02-27 08:30:00").date()), "2026-02-27");
		assert_eq!(day_key(parsed("2026-02-27T08:30:00Z").date()), "2026-02-27");
		assert_eq!(day_key(parsed("2/27/2026 8:30").date()), "2026-02-27");
		assert_eq!(day_key(parsed("2026-02-27").date()), "2026-02-27");
	}

	#[test]
	fn garbage_yields_none() {
		assert_eq!(parse_created_time("soon"), None);
		assert_eq!(parse_created_time(""), None);
		assert_eq!(parse_created_time("99-Feb-2026 3:45 pm"), None);
		assert_eq!(parse_created_time("27-Xxx-2026 3:45 pm"), None);
	}

	#[test]
	fn labels_are_day_then_short_month() {
		let date = Date::from_calendar_date(2026, Month::February, 7).expect("Invalid date.");

		assert_eq!(day_label(date), "07 Feb");
	}
}
