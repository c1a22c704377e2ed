use crate::errors::AppResult;
use crate::store::{CsvStore, journal};
use crate::ui::messages::info;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MESSAGE_WIDTH: usize = 60;

/// ANSI colour for a journal operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "edit" => Colour::Yellow,
        "reset" => Colour::Red,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &CsvStore) -> AppResult<()> {
        let entries = journal::read_all(store.path())?;

        if entries.is_empty() {
            info("The journal is empty.");
            return Ok(());
        }

        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let id_w = entries.len().to_string().len();
        let op_w = entries
            .iter()
            .map(|e| e.operator.chars().count())
            .max()
            .unwrap_or(0)
            .max(1);

        println!("📜 Operations journal:\n");

        for (i, e) in entries.iter().enumerate() {
            let colour = color_for_operation(&e.operation);

            let mut op_target = colour.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                op_target.push_str(&format!(" ({})", e.target));
            }

            // width measured without colour codes, capped at 60
            let visible = strip_ansi(&op_target);
            let op_target = if visible.chars().count() > 60 {
                let cut: String = visible.chars().skip(e.operation.len()).take(56).collect();
                format!("{}{cut}...", colour.paint(e.operation.as_str()))
            } else {
                op_target
            };
            let padding = " ".repeat(60usize.saturating_sub(strip_ansi(&op_target).chars().count()));

            // continuation lines start under the message column
            let indent = format!("\n{}", " ".repeat(id_w + date_w + op_w + 72));
            let message = textwrap::wrap(&e.message, MESSAGE_WIDTH).join(indent.as_str());

            let operator = if e.operator.is_empty() { "-" } else { e.operator.as_str() };

            println!(
                "{:>id_w$}: {:<date_w$} | {:<op_w$} | {}{} => {}",
                i + 1,
                e.date,
                operator,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w,
                op_w = op_w
            );
        }

        Ok(())
    }
}
