//! Output formatting utilities

use crate::application::{
    AddMessageReport, AppendReport, InitReport, ReleaseOutcome, ReleaseReport, ReleaseWarning,
};

/// Format the result of `init`
pub fn format_init_report(report: &InitReport) -> String {
    let mut output = String::new();
    if report.changelog_created {
        output.push_str(&format!("Init changelog: {}\n", report.changelog.display()));
    } else {
        output.push_str(&format!(
            "Changelog {} already exists. Skip\n",
            report.changelog.display()
        ));
    }
    if report.config_created {
        output.push_str(&format!("Writing config {}\n", report.config.display()));
    } else {
        output.push_str(&format!(
            "Config {} already exists. Skip\n",
            report.config.display()
        ));
    }
    output
}

/// Format a release warning with a hint on how to fix it
pub fn format_release_warning(warning: &ReleaseWarning) -> String {
    match warning {
        ReleaseWarning::DevSuffix(version) => format!(
            "WARNING: version still contains dev suffix: {}. Run 'md-changelog edit' to fix it",
            version
        ),
        ReleaseWarning::NotGreaterThanPrevious { current, previous } => format!(
            "WARNING: wrong release version, less or equal the previous one: \
            {} (current) <= {} (previous). Run 'md-changelog edit' to fix it",
            current, previous
        ),
    }
}

/// Format the outcome line of a release
pub fn format_release_outcome(report: &ReleaseReport) -> String {
    match &report.outcome {
        ReleaseOutcome::Released { header } => format!("Released '{}'", header),
        ReleaseOutcome::Undone { restored } => {
            format!("Undo changes: {}", if *restored { "OK" } else { "Fail" })
        }
    }
}

pub fn format_append_report(report: &AppendReport) -> String {
    format!("Added new '{}' entry", report.header)
}

pub fn format_add_message_report(report: &AddMessageReport) -> String {
    format!(
        "Added new {} {} entry to the {} ({})",
        report.count,
        report.category,
        report.path.display(),
        report.version
    )
}

/// Format the last entry for display
pub fn format_last_entry(rendered: Option<&str>) -> String {
    match rendered {
        Some(text) => format!("\n{}\n", text),
        None => "Changelog is empty".to_string(),
    }
}
