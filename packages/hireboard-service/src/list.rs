use hireboard_domain::lead::{Lead, columns};

use crate::{LeadService, ServiceResult};

impl LeadService {
	/// Leads in raw sheet order, which is insertion order. Served from the
	/// cache while the snapshot is younger than the TTL.
	pub async fn leads(&self) -> ServiceResult<Vec<Lead>> {
		if let Some(leads) = self.cache.fresh() {
			tracing::debug!("Serving leads from cache.");

			return Ok(leads);
		}

		let leads = self.fetch_all().await?;

		self.cache.store(leads.clone());

		Ok(leads)
	}

	/// Reads the whole data block and maps each row through the column
	/// schema. Pure read, no retry; the row's position assigns its identity.
	pub(crate) async fn fetch_all(&self) -> ServiceResult<Vec<Lead>> {
		let range = self.range(columns::READ_RANGE);
		let rows = self.sheets.get_values(&range).await?;
		let leads =
			rows.iter().enumerate().map(|(offset, row)| Lead::from_row(offset, row)).collect();

		Ok(leads)
	}
}
