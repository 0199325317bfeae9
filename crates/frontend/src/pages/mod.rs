pub mod careers;
pub mod contact;
pub mod home;
pub mod news;
pub mod not_found;
pub mod stores;
