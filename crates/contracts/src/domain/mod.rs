pub mod a001_job;
pub mod a002_store;
pub mod a003_office;
pub mod a004_news;
pub mod a005_division;
pub mod a006_partner;
pub mod common;
