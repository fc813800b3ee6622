mod json_errors;
mod request_id;

pub use json_errors::{json_method_not_allowed, route_not_found};
pub use request_id::{request_id_layer, X_REQUEST_ID};
