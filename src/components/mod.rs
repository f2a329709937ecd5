mod calendar;
mod course_overview;
mod hero;
mod instructor;
mod module_section;
mod navigation;
mod pinned_section;
mod reveal;

pub use calendar::Calendar;
pub use course_overview::CourseOverview;
pub use hero::Hero;
pub use instructor::Instructor;
pub use module_section::{module_anchor, ModuleSection};
pub use navigation::Navigation;
pub use pinned_section::PinnedSection;
pub(crate) use pinned_section::PinnedRegistration;
