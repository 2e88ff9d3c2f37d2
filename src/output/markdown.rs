//! Markdown link list generation
//!
//! Each link becomes one entry:
//!
//! ```text
//! [<title>](<href>)
//! <description>        (only when present and not blank)
//!                      (blank separator line)
//! ```
//!
//! Entries are written in the order given; nothing is sorted or removed.

use crate::link::Link;
use crate::output::error::{OutputError, OutputResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the link list to `output_path`, replacing any existing file
///
/// The file handle is owned by this function and closed on every return
/// path, including after a failed write. A failure part way through may leave
/// a partial file behind.
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the link list
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_markdown(links: &[Link], output_path: &Path) -> OutputResult<()> {
    let with_path = |source| OutputError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(with_path)?;
    let mut writer = BufWriter::new(file);
    write_entries(links, &mut writer).map_err(with_path)?;
    writer.flush().map_err(with_path)?;

    Ok(())
}

/// Writes the entries for `links` to any writer
pub fn write_entries<W: Write>(links: &[Link], writer: &mut W) -> std::io::Result<()> {
    for link in links {
        writeln!(writer, "[{}]({})", link.display_title(), link.href())?;

        if let Some(description) = link.description().filter(|d| !d.trim().is_empty()) {
            writeln!(writer, "{}", description)?;
        }

        writeln!(writer)?;
    }

    Ok(())
}

/// Renders the link list as a string, byte-for-byte what [`write_markdown`] writes
pub fn format_markdown(links: &[Link]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_entries(links, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}
