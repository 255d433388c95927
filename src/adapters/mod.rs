pub mod http;
pub mod workflow;
