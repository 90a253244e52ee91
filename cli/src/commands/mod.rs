//! Shared helpers for CLI commands.

pub mod analyze;
pub mod recommend;
pub mod train;

use anyhow::Result;
use serde::Serialize;

/// Types that can render themselves for human consumption.
///
/// JSON is the default output (machine consumers); `--human` switches to
/// this rendering.
pub trait HumanReadable {
    fn render_human(&self) -> String;
}

/// Print a command result as JSON or human-readable text.
pub fn output<T: Serialize + HumanReadable>(human: bool, value: &T) -> Result<()> {
    if human {
        println!("{}", value.render_human());
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}
