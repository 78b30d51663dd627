pub mod http;
pub mod prelude;
pub mod validate;

pub use http::ExpenseApi;

#[cfg(debug_assertions)]
pub const BACKEND_URL: &'static str = "http://localhost:3300";
#[cfg(not(debug_assertions))]
pub const BACKEND_URL: &'static str = "https://expence-backend-1-nbtx.onrender.com";
