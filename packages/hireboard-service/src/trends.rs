use time::{OffsetDateTime, PrimitiveDateTime};

use hireboard_domain::trend::{self, Category, TrendPoint, Window};

use crate::{LeadService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TrendsRequest {
	pub window: Option<String>,
	pub category: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TrendsResponse {
	pub window: Window,
	pub category: Category,
	pub points: Vec<TrendPoint>,
}

impl LeadService {
	/// Day-bucketed counts over the cached lead list. Buckets are local
	/// calendar days; the dashboard narrows drawn series by `category`.
	pub async fn trends(&self, req: TrendsRequest) -> ServiceResult<TrendsResponse> {
		let window = match req.window.as_deref() {
			None => Window::Days30,
			Some(raw) => Window::parse(raw).ok_or_else(|| ServiceError::InvalidRequest {
				message: format!("Unknown window {raw:?}."),
			})?,
		};
		let category = match req.category.as_deref() {
			None => Category::All,
			Some(raw) => Category::parse(raw).ok_or_else(|| ServiceError::InvalidRequest {
				message: format!("Unknown category {raw:?}."),
			})?,
		};
		let leads = self.leads().await?;
		let points = trend::aggregate(&leads, window, local_now());

		Ok(TrendsResponse { window, category, points })
	}
}

fn local_now() -> PrimitiveDateTime {
	let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());

	PrimitiveDateTime::new(now.date(), now.time())
}
