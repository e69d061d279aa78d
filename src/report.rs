use classification::{ArgumentSummary, Classification};

pub const WITH_ARGUMENTS_HEADING: &str = "=== Queries that REQUIRE arguments ===";
pub const WITHOUT_ARGUMENTS_HEADING: &str = "=== Queries that DO NOT require arguments ===";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderOptions {
    /// Print each argument's GraphQL type next to its name.
    pub show_types: bool,
}

/// Renders both groups of a classification, arguments first. Each section starts with a blank
/// line and every line, including the last, ends with a newline.
pub fn render(classification: &Classification, options: &RenderOptions) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(WITH_ARGUMENTS_HEADING);
    out.push('\n');
    for entry in classification.with_arguments.iter() {
        let arguments: Vec<String> = entry
            .arguments
            .iter()
            .map(|argument| render_argument(argument, options))
            .collect();
        out.push_str(&format!("- {}: {}\n", entry.field, arguments.join(", ")));
    }

    out.push('\n');
    out.push_str(WITHOUT_ARGUMENTS_HEADING);
    out.push('\n');
    for field in classification.without_arguments.iter() {
        out.push_str(&format!("- {}\n", field));
    }

    out
}

fn render_argument(argument: &ArgumentSummary, options: &RenderOptions) -> String {
    let mut rendered = argument.name.clone();

    if options.show_types {
        let signature = argument.signature.as_ref().map(String::as_str).unwrap_or("?");
        rendered.push_str(&format!(": {}", signature));
    }

    if argument.required {
        rendered.push_str(" (required)");
    }

    rendered
}
