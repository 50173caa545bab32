//! UI Components
//!
//! Reusable Leptos components.

mod new_item_form;
mod item_list;
mod item_row;
mod item_edit_row;
mod tag_select;
mod delete_confirm_button;
mod summary_panel;
mod backup_controls;
mod notice_bar;

pub use new_item_form::NewItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRowView;
pub use item_edit_row::ItemEditRow;
pub use tag_select::TagSelect;
pub use delete_confirm_button::DeleteConfirmButton;
pub use summary_panel::SummaryPanel;
pub use backup_controls::BackupControls;
pub use notice_bar::NoticeBar;
