pub mod cases;
pub mod contact;
pub mod header;
pub mod hero;
pub mod page_indicator;
pub mod project_modal;

pub use cases::Cases;
pub use contact::Contact;
pub use header::Header;
pub use hero::Hero;
pub use page_indicator::PageIndicator;
pub use project_modal::ProjectModal;
