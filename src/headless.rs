//! `--once`: one fetch, rendered as plain text.

use std::io::Write;

use crate::ui::fetch::{FetchController, FetchStatus, FetchView};

/// Plain-text rendering of a view, one line per row.
pub fn format_view(view: &FetchView) -> String {
    match view {
        FetchView::Fields(_) => view
            .field_rows()
            .into_iter()
            .map(|(label, value)| format!("{label} {value}"))
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.headline(),
    }
}

/// Runs a single fetch and writes the resulting view to `out`.
///
/// Returns `true` when the fetch succeeded.
pub async fn run_once<W: Write>(
    controller: &mut FetchController,
    out: &mut W,
) -> anyhow::Result<bool> {
    let status = controller.start().await?.status();
    writeln!(out, "{}", format_view(&controller.view(false)))?;
    out.flush()?;
    Ok(status == FetchStatus::Success)
}
