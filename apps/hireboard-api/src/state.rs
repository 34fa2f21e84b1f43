use std::sync::Arc;

use hireboard_service::LeadService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<LeadService>,
	pub dashboard_password: Arc<str>,
}

impl AppState {
	pub fn new(config: hireboard_config::Config) -> Self {
		let dashboard_password = Arc::from(config.auth.dashboard_password.as_str());

		Self { service: Arc::new(LeadService::new(config)), dashboard_password }
	}

	/// Wires a pre-built service, letting tests inject an in-memory sheet
	/// and a manual clock.
	pub fn with_service(service: LeadService) -> Self {
		let dashboard_password = Arc::from(service.cfg.auth.dashboard_password.as_str());

		Self { service: Arc::new(service), dashboard_password }
	}
}
