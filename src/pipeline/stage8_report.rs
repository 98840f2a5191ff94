use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::pipeline::EngineOutput;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{ReportError, SummaryData, build_summary, format_score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportMode {
    /// summary.json, groups.tsv and report.txt
    Full,
    /// summary.json only
    Json,
}

#[derive(Debug, Clone)]
pub struct Stage8Input<'a> {
    pub output: &'a EngineOutput,
    pub seed: Option<u64>,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(
    input: &Stage8Input<'_>,
    out_dir: &Path,
    mode: ReportMode,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;
    let summary = build_summary(
        input.output,
        &input.tool_name,
        &input.tool_version,
        input.seed,
    );
    let mut written = Vec::new();

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(&summary)?)?;
    written.push(summary_path);

    if mode == ReportMode::Full {
        let groups_path = out_dir.join("groups.tsv");
        write_groups_tsv(&summary, &groups_path)?;
        written.push(groups_path);

        let report_path = out_dir.join("report.txt");
        write_text(&report_path, &render_report_text(&summary))?;
        written.push(report_path);
    }

    info!("wrote {} report file(s) to {}", written.len(), out_dir.display());
    Ok(written)
}

fn write_groups_tsv(summary: &SummaryData<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "group", "mode", "size", "member1", "score1", "member2", "score2", "member3", "score3",
        "teacher",
    ];
    writeln!(w, "{}", header.join("\t"))?;

    for (i, group) in summary.pairs.iter().enumerate() {
        let members = group.members();
        let mut row = vec![
            (i + 1).to_string(),
            group.mode.label().to_string(),
            members.len().to_string(),
        ];
        for slot in 0..3 {
            match members.get(slot) {
                Some(p) => {
                    row.push(tsv_field(&p.name));
                    row.push(format_score(p.raw_score));
                }
                None => {
                    row.push(String::new());
                    row.push(String::new());
                }
            }
        }
        row.push(group.teacher.map(|t| tsv_field(&t.name)).unwrap_or_default());
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn tsv_field(value: &str) -> String {
    value
        .chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c })
        .collect()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage8_report.rs"]
mod tests;
