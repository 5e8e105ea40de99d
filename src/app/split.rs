//! Split command.

use rayon::prelude::*;

use super::{
    helpers::{create_output_options, read_input},
    types::{CommandOutput, SplitParams}
};
use crate::{
    error::AppResult,
    output::{SplitReport, format_split_reports},
    splitter::split
};

/// Reads every input and splits them in parallel.
///
/// Inputs are read in order before splitting. Stdin is read once and every
/// `-` input gets the same text. Reports keep the order of `params.inputs`.
///
/// # Errors
///
/// Returns an error if any input cannot be read.
///
/// # Example
///
/// ```no_run
/// use sql_splitter::{
///     app::{SplitParams, run_split},
///     cli::Format
/// };
///
/// let params = SplitParams {
///     inputs:        vec!["migrations.sql".to_string()],
///     output_format: Format::Json,
///     verbose:       false,
///     no_color:      true
/// };
/// let output = run_split(params).unwrap();
/// println!("{}", output.stdout.join("\n"));
/// ```
pub fn run_split(params: SplitParams) -> AppResult<CommandOutput> {
    let mut stdin: Option<String> = None;
    let mut sources = Vec::with_capacity(params.inputs.len());
    for path in &params.inputs {
        let text = if path != "-" {
            read_input(path)?
        } else if let Some(cached) = &stdin {
            cached.clone()
        } else {
            let text = read_input(path)?;
            stdin = Some(text.clone());
            text
        };
        sources.push((path.as_str(), text));
    }

    let reports: Vec<SplitReport> = sources
        .par_iter()
        .map(|(path, text)| {
            let name = if *path == "-" { "stdin" } else { *path };
            SplitReport::new(name, split(text))
        })
        .collect();

    tracing::debug!(
        inputs = reports.len(),
        statements = reports.iter().map(|r| r.statements.len()).sum::<usize>(),
        "Split inputs"
    );

    let opts = create_output_options(params.output_format, params.no_color, params.verbose);
    Ok(CommandOutput::success(format_split_reports(&reports, &opts)))
}
