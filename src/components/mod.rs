//! UI Components
//!
//! Reusable Leptos components.

mod add_card_button;
mod add_column_placeholder;
mod archive_page;
mod board_content;
mod board_header;
mod board_page;
mod card_edit_modal;
mod column_header;
mod confirm_dialog;
mod delete_confirm_button;
mod kanban_card;
mod kanban_column;
mod sidebar;
mod tag_badge;
mod tag_create_dialog;

pub use add_card_button::AddCardButton;
pub use add_column_placeholder::AddColumnPlaceholder;
pub use archive_page::ArchivePage;
pub use board_content::BoardContent;
pub use board_header::BoardHeader;
pub use board_page::BoardPage;
pub use card_edit_modal::CardEditModal;
pub use column_header::ColumnHeader;
pub use confirm_dialog::ConfirmDialog;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;
pub use sidebar::Sidebar;
pub use tag_badge::TagBadge;
pub use tag_create_dialog::TagCreateDialog;
