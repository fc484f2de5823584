//! End-to-end test for the five-cell cloning scenario
//! (create -> clone -> reformat the clone -> clone again -> render all)

use clonecell_core::{Cell, CellFactory, CellKind, DEFAULT_DATE_FORMAT};
use pretty_assertions::assert_eq;

#[test]
fn test_clone_scenario() {
    let mut cells: Vec<Cell> = Vec::new();

    cells.push(CellFactory::create("Hello world"));
    cells.push(CellFactory::create("1234"));
    cells.push(CellFactory::create("01/10/2021"));

    // Clone the date cell, then give only the clone a new format.
    cells.push(cells[2].clone());
    assert_eq!(cells[3].render(), cells[2].render());

    if let Cell::Date(date) = &mut cells[3] {
        date.format = "MM/dd/yyyy".into();
    }

    // Clone the modified clone; it carries the reassigned format.
    cells.push(cells[3].clone());

    let lines: Vec<String> = cells
        .iter()
        .map(|cell| format!("{} || TYPE: {}", cell.render(), cell.kind()))
        .collect();

    assert_eq!(
        lines,
        vec![
            "Hello world || TYPE: TextCell",
            "1234 || TYPE: NumberCell",
            "2021-01-10 00:00:00 || FORMAT: dd/MM/yyyy || TYPE: DateCell",
            "2021-01-10 00:00:00 || FORMAT: MM/dd/yyyy || TYPE: DateCell",
            "2021-01-10 00:00:00 || FORMAT: MM/dd/yyyy || TYPE: DateCell",
        ]
    );

    // Reassigning the clone's format never touched the original.
    if let Cell::Date(original) = &cells[2] {
        assert_eq!(original.format, DEFAULT_DATE_FORMAT);
    } else {
        panic!("expected a date cell at index 2");
    }
}

#[test]
fn test_inferred_kinds() {
    assert_eq!(CellFactory::create("Hello world").kind(), CellKind::Text);
    assert_eq!(CellFactory::create("1234").kind(), CellKind::Number);
    assert_eq!(CellFactory::create("01/10/2021").kind(), CellKind::Date);
}
