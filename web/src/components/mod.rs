pub mod confirm_modal;
pub mod navbar;
pub mod pagination;
pub mod search_input;
pub mod toast;

// Re-export commonly used types
pub use confirm_modal::ConfirmModal;
pub use navbar::Navbar;
pub use pagination::Pager;
pub use search_input::SearchInput;
pub use toast::{provide_toaster, use_toaster, ToastHost};
