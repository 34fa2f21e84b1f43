use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, PrimitiveDateTime};

use crate::{
	date,
	lead::{Lead, LeadStatus, YesNo},
};

/// Trailing window the chart covers. Bounded windows emit a gap-free series;
/// `all` emits only days that have data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Window {
	#[serde(rename = "7d")]
	Days7,
	#[serde(rename = "30d")]
	Days30,
	#[serde(rename = "90d")]
	Days90,
	#[serde(rename = "all")]
	All,
}

impl Window {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"7d" => Some(Self::Days7),
			"30d" => Some(Self::Days30),
			"90d" => Some(Self::Days90),
			"all" => Some(Self::All),
			_ => None,
		}
	}

	pub fn days(self) -> Option<i64> {
		match self {
			Self::Days7 => Some(7),
			Self::Days30 => Some(30),
			Self::Days90 => Some(90),
			Self::All => None,
		}
	}
}

/// Series selector for the chart; the aggregation always computes every
/// series, the selector only narrows what gets drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	#[default]
	All,
	New,
	Called,
	Rejected,
	Interested,
}

impl Category {
	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"all" => Some(Self::All),
			"new" => Some(Self::New),
			"called" => Some(Self::Called),
			"rejected" => Some(Self::Rejected),
			"interested" => Some(Self::Interested),
			_ => None,
		}
	}
}

/// One calendar day of the trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
	/// Sortable `YYYY-MM-DD` bucketing key.
	pub day: String,
	/// Display label, e.g. `27 Feb`.
	pub date: String,
	pub new: u32,
	pub called: u32,
	pub rejected: u32,
	pub interested: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Counts {
	new: u32,
	called: u32,
	rejected: u32,
	interested: u32,
}

/// Buckets leads by calendar day. `now` is injected so callers decide the
/// timezone and tests run against fixed instants; leads whose timestamp does
/// not parse are skipped entirely.
pub fn aggregate(leads: &[Lead], window: Window, now: PrimitiveDateTime) -> Vec<TrendPoint> {
	let cutoff = window.days().map(|days| now - Duration::days(days));
	let mut buckets: BTreeMap<Date, Counts> = BTreeMap::new();

	for lead in leads {
		let Some(created) = date::parse_created_time(&lead.created_time) else {
			continue;
		};
		if let Some(cutoff) = cutoff
			&& created < cutoff
		{
			continue;
		}

		let counts = buckets.entry(created.date()).or_default();

		counts.new += 1;

		if lead.status == LeadStatus::Called {
			counts.called += 1;
		}
		if lead.status == LeadStatus::Rejected {
			counts.rejected += 1;
		}
		if lead.interested == Some(YesNo::Yes) {
			counts.interested += 1;
		}
	}

	match cutoff {
		// One point per calendar day from the cutoff through today, zeros
		// where nothing happened, so the x-axis has no gaps.
		Some(cutoff) => {
			let mut points = Vec::new();
			let mut day = cutoff.date();

			while day <= now.date() {
				points.push(point(day, buckets.get(&day).copied().unwrap_or_default()));

				let Some(next) = day.next_day() else {
					break;
				};

				day = next;
			}

			points
		},
		None => buckets.into_iter().map(|(day, counts)| point(day, counts)).collect(),
	}
}

fn point(day: Date, counts: Counts) -> TrendPoint {
	TrendPoint {
		day: date::day_key(day),
		date: date::day_label(day),
		new: counts.new,
		called: counts.called,
		rejected: counts.rejected,
		interested: counts.interested,
	}
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;

	use super::*;
	use crate::lead::Lead;

	const NOW: PrimitiveDateTime = datetime!(2026-03-10 12:00);

	fn lead(created_time: &str, status: &str, interested: &str) -> Lead {
		Lead::from_row(
			0,
			&[
				created_time.to_string(),
				String::new(),
				String::new(),
				String::new(),
				String::new(),
				status.to_string(),
				String::new(),
				interested.to_string(),
			],
		)
	}

	#[test]
	fn seven_day_window_always_emits_eight_points() {
		let points = aggregate(&[], Window::Days7, NOW);

		assert_eq!(points.len(), 8);
		assert_eq!(points[0].day, "2026-03-03");
		assert_eq!(points[7].day, "2026-03-10");
		assert!(points.iter().all(|point| point.new == 0));
	}

	#[test]
	fn bounded_points_are_chronological_and_gap_free() {
		let points = aggregate(&[], Window::Days30, NOW);

		assert_eq!(points.len(), 31);

		for pair in points.windows(2) {
			assert!(pair[0].day < pair[1].day);
		}
	}

	#[test]
	fn one_lead_increments_every_matching_bucket_on_its_day_only() {
		let leads = [lead("8-Mar-2026 9:30 am", "Called", "Yes")];
		let points = aggregate(&leads, Window::Days7, NOW);
		let day = points.iter().find(|point| point.day == "2026-03-08").expect("Missing day.");

		assert_eq!((day.new, day.called, day.rejected, day.interested), (1, 1, 0, 1));

		for other in points.iter().filter(|point| point.day != "2026-03-08") {
			assert_eq!((other.new, other.called, other.interested), (0, 0, 0));
		}
	}

	#[test]
	fn leads_before_the_cutoff_are_excluded() {
		let leads = [lead("1-Mar-2026 9:00 am", "Pending", "")];
		let points = aggregate(&leads, Window::Days7, NOW);

		assert!(points.iter().all(|point| point.new == 0));

		let wider = aggregate(&leads, Window::Days30, NOW);

		assert_eq!(wider.iter().map(|point| point.new).sum::<u32>(), 1);
	}

	#[test]
	fn all_window_emits_only_days_with_data_in_order() {
		let leads = [
			lead("5-Mar-2026 9:00 am", "Pending", ""),
			lead("1-Jan-2026 9:00 am", "Rejected", ""),
			lead("1-Jan-2026 4:00 pm", "Pending", ""),
		];
		let points = aggregate(&leads, Window::All, NOW);

		assert_eq!(points.len(), 2);
		assert_eq!(points[0].day, "2026-01-01");
		assert_eq!(points[0].new, 2);
		assert_eq!(points[0].rejected, 1);
		assert_eq!(points[1].day, "2026-03-05");
	}

	#[test]
	fn unparseable_timestamps_are_skipped() {
		let leads = [lead("not a date", "Called", "Yes")];

		assert!(aggregate(&leads, Window::All, NOW).is_empty());

		let bounded = aggregate(&leads, Window::Days7, NOW);

		assert_eq!(bounded.len(), 8);
		assert!(bounded.iter().all(|point| point.new == 0));
	}

	#[test]
	fn labels_derive_from_the_day_key() {
		let points = aggregate(&[lead("5-Mar-2026 9:00 am", "Pending", "")], Window::All, NOW);

		assert_eq!(points[0].date, "05 Mar");
	}
}
