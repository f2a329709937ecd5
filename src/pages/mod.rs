mod landing;
mod module_page;
mod not_found;

pub use landing::{pinned_section_count, LandingPage};
pub use module_page::ModulePage;
pub use not_found::NotFoundPage;
