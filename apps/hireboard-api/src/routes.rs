use axum::{
	Json, Router, middleware,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use hireboard_domain::lead::Lead;
use hireboard_service::{
	ServiceError, TrendsRequest, TrendsResponse, UpdateLeadRequest, UpdateLeadResponse,
};

use crate::{auth, pages, state::AppState};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(pages::dashboard))
		.route("/login", get(pages::login))
		.route("/assets/app.js", get(pages::script))
		.route("/assets/styles.css", get(pages::stylesheet))
		.route("/health", get(health))
		.route("/api/auth/login", post(auth::login))
		.route("/api/leads", get(leads).post(update_lead))
		.route("/api/trends", get(trends))
		.layer(middleware::from_fn(auth::gate))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn leads(State(state): State<AppState>) -> Result<Json<Vec<Lead>>, ApiError> {
	let leads = state.service.leads().await?;

	Ok(Json(leads))
}

async fn update_lead(
	State(state): State<AppState>,
	Json(payload): Json<UpdateLeadRequest>,
) -> Result<Json<UpdateLeadResponse>, ApiError> {
	let response = state.service.update_lead(payload).await?;

	Ok(Json(response))
}

async fn trends(
	State(state): State<AppState>,
	Query(query): Query<TrendsRequest>,
) -> Result<Json<TrendsResponse>, ApiError> {
	let response = state.service.trends(query).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } => {
				Self { status: StatusCode::BAD_REQUEST, message }
			},
			ServiceError::Upstream { message } => {
				tracing::error!(%message, "Upstream spreadsheet call failed.");

				Self { status: StatusCode::INTERNAL_SERVER_ERROR, message }
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { error: self.message })).into_response()
	}
}
