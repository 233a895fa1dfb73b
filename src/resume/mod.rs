pub mod config;
pub mod delete;
pub mod local_store;
pub mod store;
pub mod types;

pub use config::load_config;
pub use delete::delete_resume_and_skills;
pub use local_store::FileLocalStore;
pub use store::{JsonResumeStore, ResumeStore};
pub use types::{AppConfig, Resume};
