// HTTP module entry point
// Response construction helpers

pub mod response;

pub use response::{build_405_response, build_policy_response};
