use std::fmt::Write as _;

use crate::domain::draft::Field;
use crate::workflow::form::Preview;

const RULE: &str = "----------------------------------------";

const GUIDANCE: &str = "Take this generated message and use the first line as your PR title \
and the rest as your PR description. When the PR is approved, use the squash method and \
make sure that both the title and description are set to the squash message.";

/// Formats the preview block shown under the form.
pub fn format_preview(preview: &Preview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Your Commit Message");
    let _ = writeln!(out, "===================");

    if !preview.is_valid() {
        let _ = writeln!(out);
        out.push_str(&format_warnings(&preview.errors));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{GUIDANCE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", preview.message);
    let _ = writeln!(out, "{RULE}");
    out
}

pub fn format_warnings<S: AsRef<str>>(errors: &[(Field, S)]) -> String {
    let mut out = String::from("Your message could be better\n");
    for (_, message) in errors {
        let _ = writeln!(out, "  - {}", message.as_ref());
    }
    out
}
