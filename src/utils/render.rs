use crate::Snapshot;
use std::io::{self, Write};

/// Writes a labelled generation:
///
/// ```text
/// Generation 3
/// 0100
/// 0010
///
/// ```
pub fn render_generation<W: Write>(
    out: &mut W,
    generation: u64,
    snapshot: Snapshot<'_>,
) -> io::Result<()> {
    writeln!(out, "Generation {}", generation)?;
    writeln!(out, "{}", snapshot)?;
    writeln!(out)
}

/// Draws the snapshot with `#` for living cells and spaces for dead ones,
/// framed by `|` so that trailing dead cells stay visible.
pub fn render_picture(snapshot: Snapshot<'_>) -> String {
    let mut picture = String::with_capacity(snapshot.rows() * (snapshot.columns() + 3));
    for row in snapshot.iter_rows() {
        picture.push('|');
        picture.extend(row.iter().map(|c| if c.is_alive() { '#' } else { ' ' }));
        picture.push_str("|\n");
    }
    picture
}
