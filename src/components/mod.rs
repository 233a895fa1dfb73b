mod card_menu;
mod delete_confirm_dialog;
mod go_to_top;
mod header;
mod resume_card;
mod resume_grid;
mod resume_page;
mod toast;

pub use card_menu::CardMenu;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use go_to_top::GoToTop;
pub use header::Header;
pub use resume_card::ResumeCard;
pub use resume_grid::ResumeGrid;
pub use resume_page::{PersonalDetails, PreviewResume};
pub use toast::Toast;
