pub mod content;
pub mod forms;
