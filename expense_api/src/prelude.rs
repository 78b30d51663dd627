pub use crate::http::ExpenseApi;
pub use crate::http::types::*;
