use std::{
	sync::{
		Mutex,
		atomic::{AtomicBool, AtomicUsize, Ordering},
	},
	time::{Duration, Instant},
};

use hireboard_service::{BoxFuture, Clock, SheetsApi};

/// Builds one sheet row from string literals.
pub fn row(cells: &[&str]) -> Vec<String> {
	cells.iter().map(|cell| cell.to_string()).collect()
}

/// Clock that only moves when a test advances it.
pub struct ManualClock {
	start: Instant,
	elapsed: Mutex<Duration>,
}

impl ManualClock {
	pub fn advance(&self, delta: Duration) {
		*self.elapsed.lock().unwrap_or_else(|err| err.into_inner()) += delta;
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self { start: Instant::now(), elapsed: Mutex::new(Duration::ZERO) }
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Instant {
		self.start + *self.elapsed.lock().unwrap_or_else(|err| err.into_inner())
	}
}

struct Block {
	start_col: usize,
	end_col: usize,
	start_row: u32,
	end_row: Option<u32>,
}

/// Spreadsheet double over a mutable grid of data rows; index 0 of the grid
/// is sheet row 2. Counts upstream calls and can be switched to fail so
/// tests observe cache hits and error passthrough.
pub struct InMemorySheets {
	rows: Mutex<Vec<Vec<String>>>,
	get_calls: AtomicUsize,
	update_calls: AtomicUsize,
	failing: AtomicBool,
}

impl InMemorySheets {
	pub fn new(rows: Vec<Vec<String>>) -> Self {
		Self {
			rows: Mutex::new(rows),
			get_calls: AtomicUsize::new(0),
			update_calls: AtomicUsize::new(0),
			failing: AtomicBool::new(false),
		}
	}

	pub fn seeded(rows: &[&[&str]]) -> Self {
		Self::new(rows.iter().map(|cells| row(cells)).collect())
	}

	pub fn rows(&self) -> Vec<Vec<String>> {
		self.rows.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	/// One cell by sheet row index (1-based, data starts at row 2) and
	/// 0-based column offset.
	pub fn cell(&self, row_index: u32, col: usize) -> String {
		let rows = self.rows.lock().unwrap_or_else(|err| err.into_inner());

		rows.get(row_index as usize - 2)
			.and_then(|cells| cells.get(col))
			.cloned()
			.unwrap_or_default()
	}

	pub fn get_calls(&self) -> usize {
		self.get_calls.load(Ordering::SeqCst)
	}

	pub fn update_calls(&self) -> usize {
		self.update_calls.load(Ordering::SeqCst)
	}

	pub fn set_failing(&self, failing: bool) {
		self.failing.store(failing, Ordering::SeqCst);
	}

	fn check_available(&self) -> hireboard_sheets::Result<()> {
		if self.failing.load(Ordering::SeqCst) {
			return Err(hireboard_sheets::Error::Api {
				status: 503,
				body: "in-memory sheet set to fail".to_string(),
			});
		}

		Ok(())
	}

	fn read_block(&self, block: &Block) -> Vec<Vec<String>> {
		let rows = self.rows.lock().unwrap_or_else(|err| err.into_inner());
		let last_row = block.end_row.unwrap_or(rows.len() as u32 + 1);
		let mut out = Vec::new();

		for sheet_row in block.start_row..=last_row {
			let Some(cells) = (sheet_row as usize)
				.checked_sub(2)
				.and_then(|offset| rows.get(offset))
			else {
				continue;
			};
			let slice = (block.start_col..=block.end_col)
				.map(|col| cells.get(col).cloned().unwrap_or_default())
				.collect();

			out.push(slice);
		}

		out
	}

	fn write_block(&self, block: &Block, values: Vec<Vec<String>>) {
		let mut rows = self.rows.lock().unwrap_or_else(|err| err.into_inner());

		for (row_offset, cells) in values.into_iter().enumerate() {
			let offset = block.start_row as usize - 2 + row_offset;

			while rows.len() <= offset {
				rows.push(Vec::new());
			}

			let target = &mut rows[offset];

			for (col_offset, value) in cells.into_iter().enumerate() {
				let col = block.start_col + col_offset;

				while target.len() <= col {
					target.push(String::new());
				}

				target[col] = value;
			}
		}
	}
}

impl SheetsApi for InMemorySheets {
	fn get_values<'a>(
		&'a self,
		range: &'a str,
	) -> BoxFuture<'a, hireboard_sheets::Result<Vec<Vec<String>>>> {
		Box::pin(async move {
			self.check_available()?;
			self.get_calls.fetch_add(1, Ordering::SeqCst);

			let block = parse_range(range)?;

			Ok(self.read_block(&block))
		})
	}

	fn update_values<'a>(
		&'a self,
		range: &'a str,
		rows: Vec<Vec<String>>,
	) -> BoxFuture<'a, hireboard_sheets::Result<()>> {
		Box::pin(async move {
			self.check_available()?;
			self.update_calls.fetch_add(1, Ordering::SeqCst);

			let block = parse_range(range)?;

			self.write_block(&block, rows);

			Ok(())
		})
	}
}

fn parse_range(range: &str) -> hireboard_sheets::Result<Block> {
	let parsed = (|| {
		let (_, cells) = range.split_once('!')?;
		let (start, end) = cells.split_once(':')?;
		let (start_col, start_row) = parse_cell(start)?;
		let (end_col, end_row) = parse_cell(end)?;

		Some(Block { start_col, end_col, start_row: start_row?, end_row })
	})();

	parsed.ok_or_else(|| hireboard_sheets::Error::Api {
		status: 400,
		body: format!("Unsupported range {range:?}."),
	})
}

fn parse_cell(cell: &str) -> Option<(usize, Option<u32>)> {
	let letter = cell.chars().next().filter(char::is_ascii_uppercase)?;
	let col = (letter as u8 - b'A') as usize;
	let digits = &cell[1..];
	let row = if digits.is_empty() { None } else { Some(digits.parse().ok()?) };

	Some((col, row))
}
