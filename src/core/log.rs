use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::pad_right;
use ansi_term::Colour;
use std::io::Write;

const MAX_OP_WIDTH: usize = 40;

/// ANSI colour of an audit log operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "start" => Colour::Cyan,
        "stop" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t = s.chars().take(max.saturating_sub(3)).collect::<String>();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool, out: &mut impl Write) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            writeln!(out, "Internal log is empty.")?;
            return Ok(());
        }

        let rows: Vec<(String, String, &str, String, &str)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };

                (
                    e.id.to_string(),
                    date,
                    e.operation.as_str(),
                    truncate(&op_target, MAX_OP_WIDTH),
                    e.message.as_str(),
                )
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(1);
        let op_w = rows
            .iter()
            .map(|r| r.3.chars().count())
            .max()
            .unwrap_or(1);

        writeln!(out, "📜 Internal log:\n")?;

        for (id, date, operation, op_target, message) in rows {
            // pad before painting so the escape codes don't count as width
            let colored = color_for_operation(operation).paint(pad_right(&op_target, op_w));

            writeln!(
                out,
                "{:>id_w$}  {:<date_w$}  {}  {}",
                id,
                date,
                colored,
                message,
                id_w = id_w,
                date_w = date_w
            )?;
        }

        Ok(())
    }
}
