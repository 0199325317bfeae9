pub mod animation;
pub mod api_utils;
pub mod components;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod page_frame;
pub mod state;
pub mod submitter;
pub mod url_state;
