use colored::Colorize;
use omnidrop::api::{CmdMessage, MessageLevel};
use omnidrop::config::OmnidropConfig;
use omnidrop::model::ConversionStats;

const SUCCESS_MARKER: &str = "✅";
const FAILURE_MARKER: &str = "❌";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Summary lines for a conversion, uncolored.
pub(super) fn summary_lines(stats: &ConversionStats) -> Vec<String> {
    let mut lines = vec![
        "Conversion Summary".to_string(),
        format!("Total files processed: {}", stats.files_processed),
        format!("Total articles converted: {}", stats.articles_converted),
    ];

    if !stats.processed.is_empty() {
        lines.push(String::new());
        lines.push("Successfully Processed Files".to_string());
        for file in &stats.processed {
            lines.push(format!("{} {}", SUCCESS_MARKER, file));
        }
    }

    if !stats.failed.is_empty() {
        lines.push(String::new());
        lines.push("Failed Files".to_string());
        for file in &stats.failed {
            lines.push(format!("{} {}", FAILURE_MARKER, file));
        }
    }

    lines
}

/// Printed to stderr when the document itself goes to stdout.
pub(super) fn print_summary(stats: &ConversionStats, to_stderr: bool) {
    for line in summary_lines(stats) {
        let styled = if line.starts_with(FAILURE_MARKER) {
            line.red().to_string()
        } else if line.starts_with(SUCCESS_MARKER) {
            line.green().to_string()
        } else if line == "Conversion Summary" || line.ends_with("Files") {
            line.bold().to_string()
        } else {
            line
        };
        if to_stderr {
            eprintln!("{}", styled);
        } else {
            println!("{}", styled);
        }
    }
}

pub(super) fn print_config(config: &OmnidropConfig) {
    for key in OmnidropConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_successes_and_failures() {
        let stats = ConversionStats {
            files_processed: 1,
            articles_converted: 2,
            processed: vec!["a.json (2 articles)".into()],
            failed: vec!["b.json (Invalid JSON)".into()],
        };
        let lines = summary_lines(&stats);

        assert_eq!(lines[0], "Conversion Summary");
        assert_eq!(lines[1], "Total files processed: 1");
        assert_eq!(lines[2], "Total articles converted: 2");
        assert!(lines.contains(&"✅ a.json (2 articles)".to_string()));
        assert!(lines.contains(&"❌ b.json (Invalid JSON)".to_string()));
    }

    #[test]
    fn summary_omits_empty_sections() {
        let lines = summary_lines(&ConversionStats::default());
        assert_eq!(lines.len(), 3);
    }
}
