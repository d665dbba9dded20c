//! Terminal rendering for export results.

use campcal_core::export::ExportReport;
use owo_colors::OwoColorize;

/// Colored terminal summary of what an export produced.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ExportReport {
    fn render(&self) -> String {
        let mut lines = vec![
            String::new(),
            format!(
                "Generated {} ICS files in {}/",
                self.files.len().green(),
                self.output_dir.display()
            ),
            String::new(),
            "Files created:".to_string(),
        ];

        let mut files = self.files.clone();
        files.sort();
        for file in &files {
            lines.push(format!("  - {file}"));
        }

        let date_range = match &self.date_span {
            Some(span) => format!("{} to {}", span.first, span.last),
            None => "n/a".to_string(),
        };

        lines.push(String::new());
        lines.push("Summary:".bold().to_string());
        lines.push(format!("  Total activities: {}", self.activity_count));
        lines.push(format!("  Unique tracks: {}", self.track_count));
        lines.push(format!("  Date range: {date_range}"));

        lines.join("\n")
    }
}
