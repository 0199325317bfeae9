pub mod detail_modal;
pub mod filter_panel;
pub mod form_field;
pub mod hero_carousel;
pub mod page_header;
pub mod partner_marquee;
pub mod stat_counter;

pub use detail_modal::DetailModal;
pub use filter_panel::FilterPanel;
pub use form_field::FormRow;
pub use page_header::PageHeader;
