//! Request extraction, pagination and the response envelope shared by all routes

pub mod extract;
pub mod pagination;
pub mod response;

pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use pagination::{paginate, PageParams, QUESTIONS_PER_PAGE};
pub use response::{Created, Success};
