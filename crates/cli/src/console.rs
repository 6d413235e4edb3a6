use colored::Colorize;
use prettytable::{Cell, Row, Table, format};

pub fn print_error_message(error_message: &str) {
    println!("{}", error_message.red());
}

pub fn print_warn_message(warn_message: &str) {
    println!("{}", warn_message.yellow());
}

pub fn print_success_message(success_message: &str) {
    println!("{}", success_message.green());
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table
}

/// Prints rows under bold blue headers, with an optional title and footer.
pub fn print_table<T: AsRef<str>>(
    headers: Vec<T>,
    rows: Vec<Vec<String>>,
    title: Option<&str>,
    footer: Option<&str>,
) {
    let mut table = new_table();

    let header_cells =
        headers.into_iter().map(|h| Cell::new(h.as_ref()).style_spec("Fb")).collect();
    table.add_row(Row::new(header_cells));

    for row_data in rows {
        let cells = row_data.into_iter().map(|cell| Cell::new(&cell)).collect();
        table.add_row(Row::new(cells));
    }

    if let Some(title_text) = title {
        println!("\n{}", title_text.bold());
    }

    table.printstd();

    if let Some(footer_text) = footer {
        println!("\n{}", footer_text.dimmed());
    }
}

/// Prints `field: value` pairs as a two column table with bold field names.
pub fn print_details(title: &str, details: &[(&str, String)]) {
    let mut table = new_table();

    for (field, value) in details {
        table.add_row(Row::new(vec![Cell::new(field).style_spec("b"), Cell::new(value)]));
    }

    println!("\n{}", title.bold());
    table.printstd();
}
