pub mod form_controller;
pub mod list_state;

pub use form_controller::FormController;
pub use list_state::RecordListState;
