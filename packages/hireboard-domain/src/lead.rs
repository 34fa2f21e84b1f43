use serde::{Deserialize, Serialize};

/// One spreadsheet column in schema order. The discriminant is the 0-based
/// offset within a data row, so the enum is the single source of truth for
/// both the read mapping and the write-range arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
	CreatedTime,
	Position,
	FullName,
	Phone,
	Email,
	Status,
	Feedback,
	Interested,
	Inprocess,
}

impl Column {
	pub const ALL: [Self; 9] = [
		Self::CreatedTime,
		Self::Position,
		Self::FullName,
		Self::Phone,
		Self::Email,
		Self::Status,
		Self::Feedback,
		Self::Interested,
		Self::Inprocess,
	];

	pub const fn index(self) -> usize {
		self as usize
	}

	pub const fn letter(self) -> char {
		(b'A' + self as u8) as char
	}
}

pub mod columns {
	use super::Column;

	/// First data row in the sheet; row 1 is the header.
	pub const FIRST_DATA_ROW: u32 = 2;
	/// Read range for the whole data block, header excluded.
	pub const READ_RANGE: &str = "A2:I";

	/// The contiguous mutable block of one row, `Status` through `Inprocess`.
	/// A ranged write must cover the whole block, so callers re-supply cells
	/// they do not mean to change.
	pub fn write_range(row_index: u32) -> String {
		format!(
			"{}{row_index}:{}{row_index}",
			Column::Status.letter(),
			Column::Inprocess.letter()
		)
	}

	/// 0-based position of a column inside the mutable block.
	pub const fn write_offset(column: Column) -> usize {
		column.index() - Column::Status.index()
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
	#[default]
	Pending,
	Called,
	Rejected,
}

impl LeadStatus {
	/// Blank and unrecognized cells fall back to `Pending`.
	pub fn from_cell(cell: &str) -> Self {
		match cell.trim() {
			"Called" => Self::Called,
			"Rejected" => Self::Rejected,
			_ => Self::Pending,
		}
	}

	pub fn as_cell(self) -> &'static str {
		match self {
			Self::Pending => "Pending",
			Self::Called => "Called",
			Self::Rejected => "Rejected",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
	Yes,
	No,
}

impl YesNo {
	pub fn from_cell(cell: &str) -> Option<Self> {
		match cell.trim() {
			"Yes" => Some(Self::Yes),
			"No" => Some(Self::No),
			_ => None,
		}
	}

	pub fn as_cell(self) -> &'static str {
		match self {
			Self::Yes => "Yes",
			Self::No => "No",
		}
	}
}

/// Serializes an optional yes/no flag the way the sheet stores it: `"Yes"`,
/// `"No"`, or an empty cell.
pub mod yes_no_cell {
	use serde::{Deserialize, Deserializer, Serializer};

	use super::YesNo;

	pub fn serialize<S>(value: &Option<YesNo>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(value.map(YesNo::as_cell).unwrap_or(""))
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<YesNo>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;

		Ok(YesNo::from_cell(&raw))
	}
}

/// One candidate application record. Identity is the backing row index, not
/// the name or email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
	#[serde(rename = "rowIndex")]
	pub row_index: u32,
	/// Raw timestamp string as stored in the sheet; parsing happens at
	/// aggregation time so unparseable records still show in the list.
	pub created_time: String,
	pub position: String,
	pub full_name: String,
	pub phone: String,
	pub email: String,
	pub status: LeadStatus,
	pub feedback: String,
	#[serde(default, with = "yes_no_cell")]
	pub interested: Option<YesNo>,
	#[serde(default, with = "yes_no_cell")]
	pub inprocess: Option<YesNo>,
}

impl Lead {
	/// Maps one raw sheet row to a record. `offset` is the 0-based position
	/// within the data block; short rows read as empty cells.
	pub fn from_row(offset: usize, row: &[String]) -> Self {
		let cell = |column: Column| {
			row.get(column.index()).map(String::as_str).unwrap_or("").to_string()
		};

		Self {
			row_index: offset as u32 + columns::FIRST_DATA_ROW,
			created_time: cell(Column::CreatedTime),
			position: cell(Column::Position),
			full_name: cell(Column::FullName),
			phone: cell(Column::Phone),
			email: cell(Column::Email),
			status: LeadStatus::from_cell(&cell(Column::Status)),
			feedback: cell(Column::Feedback),
			interested: YesNo::from_cell(&cell(Column::Interested)),
			inprocess: YesNo::from_cell(&cell(Column::Inprocess)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(cells: &[&str]) -> Vec<String> {
		cells.iter().map(|cell| cell.to_string()).collect()
	}

	#[test]
	fn schema_columns_are_contiguous_from_a() {
		for (offset, column) in Column::ALL.iter().enumerate() {
			assert_eq!(column.index(), offset);
		}

		assert_eq!(Column::CreatedTime.letter(), 'A');
		assert_eq!(Column::Inprocess.letter(), 'I');
		assert_eq!(columns::READ_RANGE, "A2:I");
	}

	#[test]
	fn write_range_covers_the_mutable_block() {
		assert_eq!(columns::write_range(5), "F5:I5");
		assert_eq!(columns::write_range(17), "F17:I17");
		assert_eq!(columns::write_offset(Column::Status), 0);
		assert_eq!(columns::write_offset(Column::Inprocess), 3);
	}

	#[test]
	fn first_data_row_maps_to_row_index_two() {
		let lead = Lead::from_row(0, &row(&["1-Mar-2026 9:00 am", "Driver", "A. Person"]));

		assert_eq!(lead.row_index, 2);
	}

	#[test]
	fn maps_a_full_row() {
		let lead = Lead::from_row(
			3,
			&row(&[
				"27-Feb-2026 3:45 pm",
				"Mechanic",
				"B. Wrench",
				"555-0101",
				"b@example.com",
				"Called",
				"left voicemail",
				"Yes",
				"Yes",
			]),
		);

		assert_eq!(lead.row_index, 5);
		assert_eq!(lead.position, "Mechanic");
		assert_eq!(lead.status, LeadStatus::Called);
		assert_eq!(lead.feedback, "left voicemail");
		assert_eq!(lead.interested, Some(YesNo::Yes));
		assert_eq!(lead.inprocess, Some(YesNo::Yes));
	}

	#[test]
	fn short_row_reads_as_defaults() {
		let lead = Lead::from_row(0, &row(&["", "Driver"]));

		assert_eq!(lead.created_time, "");
		assert_eq!(lead.full_name, "");
		assert_eq!(lead.status, LeadStatus::Pending);
		assert_eq!(lead.interested, None);
		assert_eq!(lead.inprocess, None);
	}

	#[test]
	fn unknown_status_cell_falls_back_to_pending() {
		assert_eq!(LeadStatus::from_cell("Weird"), LeadStatus::Pending);
		assert_eq!(LeadStatus::from_cell("  Called  "), LeadStatus::Called);
	}

	#[test]
	fn wire_shape_matches_the_dashboard_contract() {
		let lead = Lead::from_row(0, &row(&["", "", "C. Candidate", "", "", "Rejected"]));
		let json = serde_json::to_value(&lead).expect("Failed to serialize lead.");

		assert_eq!(json["rowIndex"], 2);
		assert_eq!(json["status"], "Rejected");
		assert_eq!(json["interested"], "");
		assert_eq!(json["inprocess"], "");
	}
}
