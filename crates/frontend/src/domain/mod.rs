pub mod a001_job_status;
pub mod a002_job;
pub mod a003_client;
