use docket_core::Regulation;
use docket_search::ViewStatus;
use std::io::{self, Write};

/// Write one regulation as a short block
pub fn write_regulation<W: Write>(out: &mut W, regulation: &Regulation) -> io::Result<()> {
    writeln!(out, "[{}] {}", regulation.docket_id, regulation.title)?;
    if !regulation.summary.is_empty() {
        writeln!(out, "    {}", regulation.summary)?;
    }
    if !regulation.keywords.is_empty() {
        writeln!(out, "    keywords: {}", regulation.keyword_line())?;
    }
    Ok(())
}

pub fn write_results<W: Write>(out: &mut W, results: &[Regulation]) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "No regulations found.");
    }
    for regulation in results {
        write_regulation(out, regulation)?;
    }
    writeln!(
        out,
        "{} regulation{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    )
}

/// Write a settled view status. Idle and Loading print nothing.
pub fn write_status<W: Write>(out: &mut W, status: &ViewStatus) -> io::Result<()> {
    match status {
        ViewStatus::Success(results) => write_results(out, results),
        ViewStatus::Failed(message) => writeln!(out, "{message}"),
        ViewStatus::Idle | ViewStatus::Loading => Ok(()),
    }
}
