use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

pub fn print_lines<I>(lines: I) -> anyhow::Result<()>
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        let body = serde_json::to_string_pretty(&JsonOut { ok: true, data })?;
        print_lines([body])
    } else {
        print_lines(lines(&data))
    }
}
