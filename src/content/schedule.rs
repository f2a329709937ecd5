/// One row of the course calendar.
///
/// `module` is a free-text label shown in the last column. It is not tied to
/// [`super::Module::id`] and nothing checks that it matches a real module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub week: &'static str,
    pub date: &'static str,
    pub activity: &'static str,
    pub module: Option<&'static str>,
}

/// Badge style for a schedule activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Meeting,
    Decanting,
    Other,
}

impl ActivityKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ActivityKind::Meeting => "activity-badge meeting",
            ActivityKind::Decanting => "activity-badge decanting",
            ActivityKind::Other => "activity-badge",
        }
    }
}

impl ScheduleEntry {
    pub fn kind(&self) -> ActivityKind {
        if self.activity.contains("Encuentro") {
            ActivityKind::Meeting
        } else if self.activity.contains("decantación") {
            ActivityKind::Decanting
        } else {
            ActivityKind::Other
        }
    }
}

/// Headline numbers shown above the calendar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleStat {
    pub glyph: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub static SCHEDULE_STATS: &[ScheduleStat] = &[
    ScheduleStat { glyph: "◷", value: "16", label: "Semanas" },
    ScheduleStat { glyph: "▦", value: "8", label: "Encuentros" },
    ScheduleStat { glyph: "◎", value: "x", label: "Cupos" },
    ScheduleStat { glyph: "✦", value: "8", label: "Módulos" },
];

const fn entry(
    week: &'static str,
    date: &'static str,
    activity: &'static str,
    module: Option<&'static str>,
) -> ScheduleEntry {
    ScheduleEntry { week, date, activity, module }
}

pub static SCHEDULE: &[ScheduleEntry] = &[
    entry("Semana 1", "Lunes 06 Oct", "Apertura + presentación", None),
    entry("Semana 2", "Lunes 13 Oct", "Encuentro virtual", Some("Módulo 1")),
    entry("Semana 3", "Lunes 20 Oct", "Tiempo de decantación", Some("El silencio")),
    entry("Semana 4", "Lunes 27 Oct", "Encuentro virtual", Some("Módulo 2")),
    entry("Semana 5", "Lunes 03 Nov", "Tiempo de decantación", Some("Composición")),
    entry("Semana 6", "Lunes 10 Nov", "Encuentro virtual", Some("Módulo 3")),
    entry("Semana 7", "Lunes 17 Nov", "Tiempo de decantación", Some("Color")),
    entry("Semana 8", "Lunes 24 Nov", "Encuentro virtual", Some("Módulo 4")),
    entry("Semana 9", "Lunes 01 Dic", "Tiempo de decantación", Some("Materia")),
    entry("Semana 10", "Lunes 08 Dic", "Encuentro virtual", Some("Módulo 5")),
    entry("Semana 11", "Lunes 15 Dic", "Tiempo de decantación", Some("Forma")),
    entry("Semana 12", "Lunes 22 Dic", "Encuentro virtual", Some("Módulo 6")),
    entry("Semana 13", "Lunes 05 Ene", "Tiempo de decantación", Some("Luz")),
    entry("Semana 14", "Lunes 12 Ene", "Encuentro virtual", Some("Módulo 7")),
    entry("Semana 15", "Lunes 19 Ene", "Tiempo de decantación", Some("Naturaleza")),
    entry("Semana 16", "Lunes 26 Ene", "Encuentro virtual + cierre", Some("Módulo 8")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_has_sixteen_weeks() {
        assert_eq!(SCHEDULE.len(), 16);
        for (i, row) in SCHEDULE.iter().enumerate() {
            assert_eq!(row.week, format!("Semana {}", i + 1));
        }
    }

    #[test]
    fn test_activity_kind_classification() {
        assert_eq!(SCHEDULE[0].kind(), ActivityKind::Other);
        assert_eq!(SCHEDULE[1].kind(), ActivityKind::Meeting);
        assert_eq!(SCHEDULE[2].kind(), ActivityKind::Decanting);
        // "Encuentro virtual + cierre" is still a meeting
        assert_eq!(SCHEDULE[15].kind(), ActivityKind::Meeting);
    }

    #[test]
    fn test_meeting_count_matches_stats() {
        let meetings = SCHEDULE
            .iter()
            .filter(|row| row.kind() == ActivityKind::Meeting)
            .count();
        let stat = SCHEDULE_STATS
            .iter()
            .find(|s| s.label == "Encuentros")
            .unwrap();
        assert_eq!(stat.value, meetings.to_string());
    }

    #[test]
    fn test_only_opening_week_has_no_module_label() {
        let unlabelled: Vec<_> = SCHEDULE.iter().filter(|row| row.module.is_none()).collect();
        assert_eq!(unlabelled.len(), 1);
        assert_eq!(unlabelled[0].week, "Semana 1");
    }
}
