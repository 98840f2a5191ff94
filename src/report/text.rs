use crate::model::group::TeachingMode;
use crate::report::{GroupView, SummaryData, format_f64_3, format_score};

pub fn render_report_text(data: &SummaryData<'_>) -> String {
    let mut out = String::new();

    out.push_str("Peer Pairing Report\n");
    out.push_str("===================\n\n");

    out.push_str("1. Overview\n");
    out.push_str(&format!("Students: {}\n", data.students.len()));
    out.push_str(&format!(
        "Groups: {} ({} trio)\n",
        data.pairs.len(),
        data.trio_count()
    ));
    out.push_str(&format!(
        "Teacher-led pairs: {}\n",
        data.mode_count(TeachingMode::TeacherLed)
    ));
    out.push_str(&format!(
        "Balanced groups: {}\n\n",
        data.mode_count(TeachingMode::Balanced)
    ));

    out.push_str("2. Score statistics\n");
    out.push_str(&format!("Mean: {}\n", format_f64_3(data.stats.mean)));
    out.push_str(&format!(
        "Standard deviation: {}\n",
        format_f64_3(data.stats.std_dev)
    ));
    out.push_str(&format!(
        "Noise factor: {}\n",
        format_f64_3(data.stats.noise_factor)
    ));
    out.push_str(&format!("Alpha: {}\n", format_f64_3(data.stats.alpha)));
    if let Some(seed) = data.seed {
        out.push_str(&format!("Seed: {seed}\n"));
    }
    out.push('\n');

    out.push_str("3. Groups\n");
    for (i, group) in data.pairs.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, group_line(group)));
    }

    out
}

fn group_line(group: &GroupView<'_>) -> String {
    let members = group
        .members()
        .iter()
        .map(|p| format!("{} ({})", p.name, format_score(p.raw_score)))
        .collect::<Vec<_>>()
        .join(", ");
    match group.teacher {
        Some(teacher) => format!("[{}] {} - teacher: {}", group.mode.label(), members, teacher.name),
        None => format!("[{}] {}", group.mode.label(), members),
    }
}
