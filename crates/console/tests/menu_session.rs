//! Drives whole sessions through in-memory stdin/stdout.

use std::io::Cursor;

use kitbag_console::Session;
use kitbag_inventory::{Backpack, Quantity};

struct Transcript {
    backpack: Backpack,
    output: String,
}

fn run_session(lines: &[&str]) -> Transcript {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut session = Session::new(Cursor::new(input.into_bytes()), Vec::new());
    session.run().expect("session should not fail on in-memory io");
    let (backpack, out) = session.into_parts();

    Transcript {
        backpack,
        output: String::from_utf8(out).expect("console output is utf-8"),
    }
}

fn add<'a>(name: &'a str, category: &'a str, quantity: &'a str) -> [&'a str; 4] {
    ["1", name, category, quantity]
}

fn table_rows(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.starts_with("| ") && !line.starts_with("| NAME"))
        .filter(|line| !line.contains("The backpack is empty."))
        .collect()
}

#[test]
fn add_list_remove_list() {
    let mut lines = Vec::new();
    lines.extend(add("Medkit", "Heal", "3"));
    lines.extend(["3", "2", "medkit", "3", "4"]);

    let t = run_session(&lines);

    assert!(t.output.contains("Item 'Medkit' added successfully!"));
    assert_eq!(
        table_rows(&t.output),
        vec!["| Medkit             | Heal          |           3 |"]
    );
    assert!(t.output.contains("Total of 1 distinct item(s)."));
    assert!(t.output.contains("Item 'Medkit' removed successfully!"));
    assert!(t.output.contains("|              The backpack is empty.              |"));
    assert!(t.backpack.is_empty());
}

#[test]
fn eleventh_add_reports_full_and_keeps_ten_rows() {
    let names: Vec<String> = (0..11).map(|i| format!("Item{i}")).collect();
    let mut lines: Vec<&str> = Vec::new();
    for name in &names[..10] {
        lines.extend(add(name, "Misc", "1"));
    }
    lines.push("1");
    lines.extend(["3", "4"]);

    let t = run_session(&lines);

    assert_eq!(t.output.matches("added successfully!").count(), 10);
    assert!(t.output.contains("Backpack is full! Cannot add more items (max: 10)."));
    assert_eq!(table_rows(&t.output).len(), 10);
    assert!(t.output.contains("Total of 10 distinct item(s)."));
    assert!(t.backpack.is_full());
}

#[test]
fn non_numeric_menu_choice_is_recovered() {
    let t = run_session(&["abc", "", "9", "3", "4"]);

    assert_eq!(t.output.matches("Invalid option. Try again.").count(), 3);
    assert!(t.output.contains("The backpack is empty."));
    assert!(t.output.ends_with(
        "Exiting the program. See you later!\n------------------------------------\n\n"
    ));
}

#[test]
fn invalid_quantity_commits_nothing() {
    let mut lines = Vec::new();
    lines.extend(add("Rope", "Tool", "lots"));
    lines.extend(["3", "4"]);

    let t = run_session(&lines);

    assert!(t.output.contains("Error: invalid quantity."));
    assert!(!t.output.contains("added successfully"));
    assert!(t.backpack.is_empty());
    assert!(table_rows(&t.output).is_empty());
}

#[test]
fn removing_unknown_name_reports_not_found() {
    let mut lines = Vec::new();
    lines.extend(add("Medkit", "Heal", "3"));
    lines.extend(["2", "Bandage", "4"]);

    let t = run_session(&lines);

    assert!(t.output.contains("Error: item 'Bandage' not found in the backpack."));
    assert_eq!(t.backpack.len(), 1);
}

#[test]
fn duplicate_names_remove_lowest_slot_first() {
    let mut lines = Vec::new();
    lines.extend(add("Potion", "Heal", "1"));
    lines.extend(add("POTION", "Heal", "2"));
    lines.extend(["2", "potion", "4"]);

    let t = run_session(&lines);

    assert!(t.output.contains("Item 'Potion' removed successfully!"));
    assert_eq!(t.backpack.len(), 1);
    let (slot, item) = t.backpack.active_items().next().unwrap();
    assert_eq!(slot, 1);
    assert_eq!(item.name().as_str(), "POTION");
    assert_eq!(item.quantity(), Quantity(2));
}

#[test]
fn over_long_fields_are_truncated_silently() {
    let long_name = "N".repeat(70);
    let long_category = "C".repeat(25);
    let mut lines = Vec::new();
    lines.extend(add(&long_name, &long_category, "-4"));
    // Removal input is bounded the same way, so the full typed name still matches.
    lines.extend(["3", "2", long_name.as_str(), "4"]);

    let t = run_session(&lines);

    let stored_name = "N".repeat(49);
    assert!(t.output.contains(&format!("Item '{stored_name}' added successfully!")));
    assert!(t.output.contains(&format!("| {stored_name} | {} |", "C".repeat(19))));
    assert!(t.output.contains(&format!("Item '{stored_name}' removed successfully!")));
    assert!(t.backpack.is_empty());
}

#[test]
fn freed_slot_is_reused_before_later_ones() {
    let mut lines = Vec::new();
    lines.extend(add("A", "x", "1"));
    lines.extend(add("B", "x", "2"));
    lines.extend(add("C", "x", "3"));
    lines.extend(["2", "b"]);
    lines.extend(add("D", "x", "4"));
    lines.extend(["3", "4"]);

    let t = run_session(&lines);

    let names: Vec<&str> = t
        .backpack
        .active_items()
        .map(|(_, item)| item.name().as_str())
        .collect();
    assert_eq!(names, vec!["A", "D", "C"]);

    let rows = table_rows(&t.output);
    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with("| D "));
}

#[test]
fn crlf_input_is_accepted() {
    let input = "1\r\nMedkit\r\nHeal\r\n3\r\n4\r\n";
    let mut session = Session::new(Cursor::new(input), Vec::new());
    session.run().unwrap();

    let item = session.backpack().get(0).unwrap();
    assert_eq!(item.name().as_str(), "Medkit");
    assert_eq!(item.category().as_str(), "Heal");
}

#[test]
fn non_utf8_menu_answer_is_an_invalid_choice() {
    let mut session = Session::new(Cursor::new(b"\xff\xfe\n3\n4\n".to_vec()), Vec::new());
    session.run().expect("undecodable input must not end the session");
    let (backpack, out) = session.into_parts();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Invalid option. Try again."));
    assert!(output.contains("The backpack is empty."));
    assert!(output.ends_with(
        "Exiting the program. See you later!\n------------------------------------\n\n"
    ));
    assert!(backpack.is_empty());
}

#[test]
fn latin1_item_name_is_still_added() {
    let input = b"1\npo\xe7\xe3o\nHeal\n3\n3\n4\n".to_vec();
    let mut session = Session::new(Cursor::new(input), Vec::new());
    session.run().expect("undecodable input must not end the session");
    let (backpack, out) = session.into_parts();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Item 'po\u{fffd}\u{fffd}o' added successfully!"));
    assert_eq!(table_rows(&output).len(), 1);
    assert_eq!(backpack.len(), 1);
    assert_eq!(backpack.get(0).unwrap().quantity(), Quantity(3));
}

#[test]
fn huge_answer_does_not_swallow_following_lines() {
    let mut input = String::from("1\n");
    input.push_str(&"N".repeat(100_000));
    input.push_str("\nTool\n2\n4\n");

    let mut session = Session::new(Cursor::new(input), Vec::new());
    session.run().unwrap();
    let (backpack, _) = session.into_parts();

    let item = backpack.get(0).unwrap();
    assert_eq!(item.name().as_str(), "N".repeat(49));
    assert_eq!(item.category().as_str(), "Tool");
    assert_eq!(item.quantity(), Quantity(2));
}
