use super::{find_module, Module};

/// Course progress shown on the module page: `round(current / total * 100)`.
pub fn progress_percent(current_id: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (current_id as f64 / total as f64 * 100.0).round() as u32
}

/// Sidebar badge for a module, derived only from its id and the id being viewed.
///
/// This never looks at the page's "marked complete" toggle; the two states are
/// independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarStatus {
    Completed,
    Available,
    Locked,
}

impl SidebarStatus {
    pub fn of(module_id: u32, current_id: u32) -> Self {
        if module_id < current_id {
            SidebarStatus::Completed
        } else if module_id > current_id.saturating_add(1) {
            SidebarStatus::Locked
        } else {
            SidebarStatus::Available
        }
    }

    pub fn glyph(&self, active: bool) -> &'static str {
        match self {
            SidebarStatus::Completed => "✓",
            SidebarStatus::Locked => "🔒",
            SidebarStatus::Available if active => "●",
            SidebarStatus::Available => "○",
        }
    }
}

/// Where the forward control of the module footer leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Module(&'static Module),
    /// Past the last module the control returns to the landing page.
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbours {
    pub previous: Option<&'static Module>,
    pub next: NextStep,
}

pub fn neighbours(current_id: u32) -> Neighbours {
    let previous = current_id.checked_sub(1).and_then(find_module);
    let next = current_id
        .checked_add(1)
        .and_then(find_module)
        .map_or(NextStep::Home, NextStep::Module);
    Neighbours { previous, next }
}
