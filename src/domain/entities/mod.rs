pub mod identity;
pub mod job_status;
pub mod launch;
pub mod role;
