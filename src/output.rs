use colored::Colorize;
use serde::Serialize;

use crate::splitter::{SplitOutcome, SplitStrategy, leading_keyword};

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Split result of one input for serialization
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub source:     String,
    pub strategy:   SplitStrategy,
    pub statements: Vec<String>
}

impl SplitReport {
    pub fn new(source: impl Into<String>, outcome: SplitOutcome) -> Self {
        Self {
            source:     source.into(),
            strategy:   outcome.strategy,
            statements: outcome.statements
        }
    }
}

/// Format split reports based on output options
pub fn format_split_reports(reports: &[SplitReport], opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(reports).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(reports).unwrap_or_default(),
        OutputFormat::Text => format_text_reports(reports, opts)
    }
}

/// Format stored history based on output options
pub fn format_history<'a>(
    entries: impl IntoIterator<Item = &'a str>,
    opts: &OutputOptions
) -> String {
    let entries: Vec<&str> = entries.into_iter().collect();
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(&entries).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(&entries).unwrap_or_default(),
        OutputFormat::Text => format_text_history(&entries, opts)
    }
}

fn format_text_reports(reports: &[SplitReport], opts: &OutputOptions) -> String {
    let mut output = String::new();
    let with_source = reports.len() > 1 || opts.verbose;

    for report in reports {
        if with_source {
            let title = format!("=== {} ===", report.source);
            push_styled(&mut output, &title, opts.colored, |s| s.bold().to_string());
            output.push('\n');
        }
        if opts.verbose {
            output.push_str(&format!(
                "Strategy: {} ({} statements)\n\n",
                report.strategy,
                report.statements.len()
            ));
        }

        if report.statements.is_empty() {
            output.push_str("No statements found.\n\n");
            continue;
        }

        for (i, statement) in report.statements.iter().enumerate() {
            let header = if opts.verbose {
                let keyword = leading_keyword(statement).unwrap_or("OTHER");
                format!("Statement #{} ({}):", i + 1, keyword)
            } else {
                format!("Statement #{}:", i + 1)
            };
            push_styled(&mut output, &header, opts.colored, |s| {
                s.cyan().bold().to_string()
            });
            output.push('\n');
            output.push_str(statement);
            output.push_str("\n\n");
        }
    }

    output.trim_end().to_string()
}

fn format_text_history(entries: &[&str], opts: &OutputOptions) -> String {
    if entries.is_empty() {
        return String::from("History is empty.");
    }

    let mut output = String::new();
    let title = format!("History ({} entries):", entries.len());
    push_styled(&mut output, &title, opts.colored, |s| s.bold().to_string());
    output.push_str("\n\n");

    for (i, entry) in entries.iter().enumerate() {
        let label = format!("#{}", i + 1);
        push_styled(&mut output, &label, opts.colored, |s| s.cyan().to_string());
        output.push('\n');
        output.push_str(entry);
        output.push_str("\n\n");
    }

    output.trim_end().to_string()
}

fn push_styled(output: &mut String, text: &str, colored: bool, style: impl Fn(&str) -> String) {
    if colored {
        output.push_str(&style(text));
    } else {
        output.push_str(text);
    }
}
