// Output rendering.
// Prints the resolved member list as TSV or pretty JSON, in resolution
// order. No sorting is applied.

use std::io::Write;

use crate::error::Result;
use crate::gitlab::Member;

/// Render members to stdout in the requested format.
pub fn print_members(members: &[Member], json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    write_members(&mut stdout.lock(), members, json)
}

fn write_members(out: &mut impl Write, members: &[Member], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, members)?;
        writeln!(out)?;
    } else {
        for member in members {
            writeln!(out, "{}\t{}", member.name, member.username)?;
        }
    }
    Ok(())
}
