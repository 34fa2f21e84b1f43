use axum::{
	http::header,
	response::{Html, IntoResponse},
};

pub async fn dashboard() -> Html<&'static str> {
	Html(include_str!("../assets/index.html"))
}

pub async fn login() -> Html<&'static str> {
	Html(include_str!("../assets/login.html"))
}

pub async fn script() -> impl IntoResponse {
	([(header::CONTENT_TYPE, "application/javascript")], include_str!("../assets/app.js"))
}

pub async fn stylesheet() -> impl IntoResponse {
	([(header::CONTENT_TYPE, "text/css")], include_str!("../assets/styles.css"))
}
