//! Static course content: modules, schedule and course-level facts.
//!
//! Everything here is compiled into the binary and never mutated at runtime.

mod catalog;
mod course;
mod navigation;
mod schedule;

pub use catalog::MODULES;
pub use course::{
    Feature, Instructor, SocialLink, COURSE_FEATURES, COURSE_TAGLINE, COURSE_TITLE, CONTACT_EMAIL,
    ENROLLMENT_FORM_URL, INSTRUCTOR, START_DATE,
};
pub use navigation::{neighbours, progress_percent, Neighbours, NextStep, SidebarStatus};
pub use schedule::{ActivityKind, ScheduleEntry, ScheduleStat, SCHEDULE, SCHEDULE_STATS};

/// One unit of course content, identified by a contiguous id starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    pub id: u32,
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Image path relative to the site base path.
    pub image: &'static str,
    pub duration: &'static str,
    pub objectives: &'static [&'static str],
    pub exercise: Exercise,
    pub content: &'static [ContentBlock],
    pub resources: &'static [Resource],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub title: &'static str,
    pub description: &'static str,
    pub deadline: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBlock {
    Text {
        title: &'static str,
        body: &'static str,
    },
    Quote {
        quote: &'static str,
        author: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub kind: ResourceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Book,
    Pdf,
    Other(&'static str),
}

impl ResourceKind {
    /// Short label shown under the resource title.
    pub fn tag(&self) -> &'static str {
        match self {
            ResourceKind::Book => "libro",
            ResourceKind::Pdf => "pdf",
            ResourceKind::Other(tag) => tag,
        }
    }
}

/// All modules in display (and unlock) order.
pub fn modules() -> &'static [Module] {
    MODULES
}

pub fn module_count() -> usize {
    MODULES.len()
}

pub fn find_module(id: u32) -> Option<&'static Module> {
    MODULES.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_ids_are_contiguous_from_one() {
        for (index, module) in modules().iter().enumerate() {
            assert_eq!(
                module.id as usize,
                index + 1,
                "Module at position {} has id {}",
                index,
                module.id
            );
        }
        assert_eq!(module_count(), 8);
    }

    #[test]
    fn test_every_module_has_content() {
        for module in modules() {
            assert!(!module.objectives.is_empty(), "Module {} has no objectives", module.id);
            assert!(!module.content.is_empty(), "Module {} has no content blocks", module.id);
            assert!(!module.resources.is_empty(), "Module {} has no resources", module.id);
            assert!(module.image.starts_with("/images/"), "Module {} image path: {}", module.id, module.image);
        }
    }

    #[test]
    fn test_find_module_valid_ids() {
        for id in 1..=8 {
            let module = find_module(id).expect("module should exist");
            assert_eq!(module.id, id);
        }
    }

    #[test]
    fn test_find_module_out_of_range() {
        assert!(find_module(0).is_none());
        assert!(find_module(9).is_none());
        assert!(find_module(u32::MAX).is_none());
    }

    #[test]
    fn test_badges_match_ids() {
        for module in modules() {
            assert_eq!(module.badge, format!("MÓDULO {:02}", module.id));
        }
    }

    #[test]
    fn test_resource_tags() {
        assert_eq!(ResourceKind::Book.tag(), "libro");
        assert_eq!(ResourceKind::Pdf.tag(), "pdf");
        assert_eq!(ResourceKind::Other("video").tag(), "video");
    }

    #[test]
    fn test_first_module_opens_with_berger_quote() {
        let first = find_module(1).unwrap();
        let quote = first.content.iter().find_map(|block| match block {
            ContentBlock::Quote { author, .. } => Some(*author),
            ContentBlock::Text { .. } => None,
        });
        assert_eq!(quote, Some("John Berger"));
    }
}
