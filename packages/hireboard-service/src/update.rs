use hireboard_domain::lead::{Column, columns};

use crate::{LeadService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateLeadRequest {
	#[serde(rename = "rowIndex")]
	pub row_index: Option<u32>,
	pub status: Option<String>,
	pub feedback: Option<String>,
	pub interested: Option<String>,
	pub inprocess: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateLeadResponse {
	pub success: bool,
}

impl LeadService {
	/// Writes the mutable trailing block of one row as a single contiguous
	/// ranged write. The block is read back first and cells the request
	/// omits are re-supplied unchanged, so updating status and feedback does
	/// not blank the interest flags. A supplied empty string still clears a
	/// cell, which is how the dashboard un-toggles a flag.
	pub async fn update_lead(&self, req: UpdateLeadRequest) -> ServiceResult<UpdateLeadResponse> {
		let Some(row_index) = req.row_index else {
			return Err(missing_fields());
		};
		let Some(status) = req.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
			return Err(missing_fields());
		};
		if row_index < columns::FIRST_DATA_ROW {
			return Err(ServiceError::InvalidRequest {
				message: format!("rowIndex must be {} or greater.", columns::FIRST_DATA_ROW),
			});
		}

		let range = self.range(&columns::write_range(row_index));
		let current = self.current_block(&range).await?;
		let cell = |column: Column| current.get(columns::write_offset(column));
		let row = vec![
			status.to_string(),
			merged(req.feedback, cell(Column::Feedback)),
			merged(req.interested, cell(Column::Interested)),
			merged(req.inprocess, cell(Column::Inprocess)),
		];

		self.sheets.update_values(&range, vec![row]).await?;
		self.cache.invalidate();
		tracing::info!(row_index, status, "Lead row updated.");

		Ok(UpdateLeadResponse { success: true })
	}

	async fn current_block(&self, range: &str) -> ServiceResult<Vec<String>> {
		let mut rows = self.sheets.get_values(range).await?;

		Ok(if rows.is_empty() { Vec::new() } else { rows.swap_remove(0) })
	}
}

fn merged(supplied: Option<String>, current: Option<&String>) -> String {
	supplied.unwrap_or_else(|| current.cloned().unwrap_or_default())
}

fn missing_fields() -> ServiceError {
	ServiceError::InvalidRequest { message: "Missing required fields".to_string() }
}
