//! Human-readable rendering of a comparison.
//!
//! Lexemes are joined by single spaces, newline lexemes become line breaks,
//! and flagged characters are painted red. A flagged newline (a line break the
//! actual output was missing) shows up as a red `↵` before the break.
//! Colouring follows the usual `colored` rules (`NO_COLOR`, `CLICOLOR_FORCE`,
//! overrides), so the output degrades to plain text when colours are off.

use crate::types::RichText;
use colored::Colorize;

const MISSING_NEWLINE: &str = "↵";

fn push_run(out: &mut String, run: &str, flagged: bool) {
    if flagged {
        out.push_str(&run.red().bold().to_string());
    } else {
        out.push_str(run);
    }
}

/// Renders one lexeme, painting flagged characters.
pub fn render_lexeme(rich_text: &RichText) -> String {
    let mut out = String::with_capacity(rich_text.text.len());
    let mut run = String::new();
    let mut run_flagged = false;

    for (i, c) in rich_text.text.chars().enumerate() {
        let flagged = rich_text.mask.get(i).copied().unwrap_or(false);
        if flagged != run_flagged && !run.is_empty() {
            push_run(&mut out, &run, run_flagged);
            run.clear();
        }
        run_flagged = flagged;
        run.push(c);
    }
    push_run(&mut out, &run, run_flagged);

    out
}

/// Renders a whole comparison result back into text.
pub fn render(rich_texts: &[RichText]) -> String {
    let mut out = String::new();
    let mut line_start = true;

    for rich_text in rich_texts {
        if rich_text.text == "\n" {
            if rich_text.colorful() {
                push_run(&mut out, MISSING_NEWLINE, true);
            }
            out.push('\n');
            line_start = true;
            continue;
        }

        if !line_start {
            out.push(' ');
        }
        out.push_str(&render_lexeme(rich_text));
        line_start = false;
    }

    out
}
