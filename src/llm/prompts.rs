use crate::report::{render_table, ReportRow};

/// System message sent with every summary request.
pub const SYSTEM_PROMPT: &str =
    "You are an expert in IT management that summarizes Autotask reports.";

const REPORT_INSTRUCTION: &str = "Summarize the following Autotask report data in a concise manner, \
highlighting key trends and important metrics.";

/// Build the user prompt for a report, including at most `max_rows` rows.
pub fn build_report_prompt(rows: &[ReportRow], max_rows: usize) -> String {
    let table = render_table(rows, max_rows);

    let mut prompt = format!("{REPORT_INSTRUCTION}\n{}", table.text);
    if table.is_truncated() {
        tracing::debug!("Prompt truncated to {} of {} rows", table.shown, table.total);
        prompt.push_str(&format!(
            "\n(Only first {} of {} rows shown.)",
            max_rows, table.total
        ));
    }
    prompt
}
