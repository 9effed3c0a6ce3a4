use axum::{Router, routing::get};

pub mod students;

///Builds the application router. Method routing means anything other than a
///GET on `/api/students` comes back 405, and any other path 404, without
///any handler code of our own.
pub fn router() -> Router {
    Router::new().route("/api/students", get(students::get_students))
}
