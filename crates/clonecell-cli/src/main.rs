//! Clonecell CLI - cell inference and cloning demo

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clonecell_core::{Cell, CellFactory};
use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "clonecell")]
#[command(
    author,
    version,
    about = "Typed spreadsheet cells with prototype cloning"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the five-cell cloning demo
    Demo,

    /// Infer a cell for each value and print it
    Infer {
        /// Values to infer (default: one per line from stdin)
        values: Vec<String>,

        /// Override the display format stored on inferred date cells
        #[arg(short, long)]
        format: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => demo(),
        Commands::Infer { values, format } => infer(values, format.as_deref()),
    }
}

fn demo() -> Result<()> {
    let mut cells: Vec<Cell> = Vec::new();

    cells.push(CellFactory::create("Hello world"));
    cells.push(CellFactory::create("1234"));
    cells.push(CellFactory::create("01/10/2021"));

    // The cloning itself: the copy carries the format of its source.
    cells.push(cells[2].clone());

    if let Cell::Date(date) = &mut cells[3] {
        date.format = "MM/dd/yyyy".into();
    }

    cells.push(cells[3].clone());

    print_cells(&cells);

    Ok(())
}

fn infer(values: Vec<String>, format: Option<&str>) -> Result<()> {
    let values = if values.is_empty() {
        read_stdin_lines().context("Failed to read values from stdin")?
    } else {
        values
    };

    let cells: Vec<Cell> = values
        .iter()
        .map(|value| {
            let mut cell = CellFactory::create(value);
            if let (Cell::Date(date), Some(format)) = (&mut cell, format) {
                date.format = format.to_string();
            }
            cell
        })
        .collect();

    print_cells(&cells);

    Ok(())
}

fn print_cells(cells: &[Cell]) {
    for cell in cells {
        println!("{} || TYPE: {}", cell.render(), cell.kind());
    }
}

fn read_stdin_lines() -> io::Result<Vec<String>> {
    io::stdin().lock().lines().collect()
}
