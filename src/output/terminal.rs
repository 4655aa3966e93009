//! Terminal renderer: one line per result.

use colored::Colorize;

use crate::models::Report;
use crate::output::OutputRenderer;
use crate::sample::format_numbers;

/// Terminal output renderer with colored labels.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, report: &Report) -> String {
        let mut output = String::new();

        if let Some(ref greeting) = report.greeting {
            output.push_str(&format!("{}\n", greeting.bold()));
        }

        if let Some(ref sum) = report.sum {
            output.push_str(&format!(
                "{} {}\n",
                format!("Sum of {}:", format_numbers(&sum.numbers)).cyan(),
                sum.total.to_string().green().bold(),
            ));
        }

        if let Some(ref user) = report.user {
            output.push_str(&format!("{} {}\n", "User info:".cyan(), user));
        }

        output
    }
}
