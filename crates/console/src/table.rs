//! Fixed-width inventory table.

use std::io::{self, Write};

use kitbag_inventory::Backpack;

const NAME_WIDTH: usize = 18;
const CATEGORY_WIDTH: usize = 13;
const QUANTITY_WIDTH: usize = 11;
/// Characters between the outer `|` of a row.
const INNER_WIDTH: usize = NAME_WIDTH + CATEGORY_WIDTH + QUANTITY_WIDTH + 8;

fn border<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "+{}+", "-".repeat(INNER_WIDTH))
}

/// Write the occupied slots of `backpack` in index order.
///
/// An empty backpack gets a message row instead of a zero-row table; otherwise
/// the active count follows the table. Cells longer than their column are
/// printed in full.
pub fn render_inventory<W: Write>(out: &mut W, backpack: &Backpack) -> io::Result<()> {
    writeln!(out, "--- Current Inventory ---")?;
    border(out)?;
    writeln!(
        out,
        "| {:<NAME_WIDTH$} | {:<CATEGORY_WIDTH$} | {:<QUANTITY_WIDTH$} |",
        "NAME", "CATEGORY", "QUANTITY"
    )?;
    writeln!(
        out,
        "+{}+{}+{}+",
        "-".repeat(NAME_WIDTH + 2),
        "-".repeat(CATEGORY_WIDTH + 2),
        "-".repeat(QUANTITY_WIDTH + 2)
    )?;

    let mut active = 0usize;
    for (_, item) in backpack.active_items() {
        writeln!(
            out,
            "| {:<NAME_WIDTH$} | {:<CATEGORY_WIDTH$} | {:>QUANTITY_WIDTH$} |",
            item.name(),
            item.category(),
            item.quantity()
        )?;
        active += 1;
    }

    border(out)?;

    if active == 0 {
        writeln!(out, "|{:^INNER_WIDTH$}|", "The backpack is empty.")?;
        border(out)?;
    } else {
        writeln!(out, "Total of {active} distinct item(s).")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitbag_inventory::AddItem;

    fn render(backpack: &Backpack) -> String {
        let mut out = Vec::new();
        render_inventory(&mut out, backpack).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_backpack_shows_message_row() {
        let text = render(&Backpack::new());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "--- Current Inventory ---");
        assert_eq!(lines[1], "+--------------------------------------------------+");
        assert_eq!(lines[2], "| NAME               | CATEGORY      | QUANTITY    |");
        assert_eq!(lines[3], "+--------------------+---------------+-------------+");
        assert_eq!(lines[4], lines[1]);
        assert_eq!(lines[5], "|              The backpack is empty.              |");
        assert_eq!(lines[6], lines[1]);
        assert!(!text.contains("Total of"));
    }

    #[test]
    fn rows_are_aligned_and_counted() {
        let mut backpack = Backpack::new();
        backpack.add_item(AddItem::new("Medkit", "Heal", 3)).unwrap();
        backpack.add_item(AddItem::new("Debt", "Misc", -12)).unwrap();

        let text = render(&backpack);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[4], "| Medkit             | Heal          |           3 |");
        assert_eq!(lines[5], "| Debt               | Misc          |         -12 |");
        assert_eq!(lines[6], "+--------------------------------------------------+");
        assert_eq!(lines[7], "Total of 2 distinct item(s).");
        assert_eq!(lines.len(), 8);
        assert!(lines[1..=6].iter().all(|line| line.len() == lines[1].len()));
    }

    #[test]
    fn long_cells_are_not_clipped() {
        let mut backpack = Backpack::new();
        let name = "A very long item name indeed";
        backpack.add_item(AddItem::new(name, "Tool", 1)).unwrap();

        let text = render(&backpack);
        assert!(text.contains(&format!("| {name} | Tool          |")));
    }
}
