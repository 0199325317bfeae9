pub mod common;
pub mod u501_job_application;
pub mod u502_contact_request;
