// Output formatting and styling

use colored::Colorize;
use freshcheck_analysis::{Severity, SpoilageLevel};

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Style without colors, for piped output and tests
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format prompt
    pub fn prompt(&self, prompt: &str) -> String {
        if self.use_colors {
            format!("{} ", prompt.magenta().bold())
        } else {
            format!("{} ", prompt)
        }
    }

    /// Format header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format error with suggestion
    pub fn error_with_suggestion(&self, error: &str, suggestion: &str) -> String {
        format!("{}\n{}", self.error(error), self.tip(suggestion))
    }

    /// Format a section header
    pub fn section(&self, title: &str) -> String {
        let rule = "─".repeat(title.chars().count());
        if self.use_colors {
            format!("\n{}\n{}", title.bold().underline(), rule)
        } else {
            format!("\n{}\n{}", title, rule)
        }
    }

    /// Format a list item
    pub fn list_item(&self, item: &str) -> String {
        format!("  • {}", item)
    }

    /// Format a numbered list item
    pub fn numbered_item(&self, number: usize, item: &str) -> String {
        format!("  {}. {}", number, item)
    }

    /// Format a key-value pair
    pub fn key_value(&self, key: &str, value: &str) -> String {
        if self.use_colors {
            format!("  {}: {}", key.bold(), value)
        } else {
            format!("  {}: {}", key, value)
        }
    }

    /// Format a tip/hint
    pub fn tip(&self, tip: &str) -> String {
        if self.use_colors {
            format!("{} {}", "💡".yellow(), tip)
        } else {
            format!("💡 {}", tip)
        }
    }

    /// Spoilage label colored by severity
    pub fn level(&self, level: SpoilageLevel) -> String {
        if !self.use_colors {
            return level.label().to_string();
        }
        match level.severity() {
            Severity::Good => level.label().green().bold().to_string(),
            Severity::Caution => level.label().yellow().bold().to_string(),
            Severity::Bad => level.label().red().bold().to_string(),
        }
    }

    /// Ten-cell confidence bar followed by the percentage
    pub fn confidence(&self, percent: u8) -> String {
        let filled = usize::from(percent.min(100)).div_ceil(10);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
        if self.use_colors {
            format!("{} {}%", bar.cyan(), percent)
        } else {
            format!("{} {}%", bar, percent)
        }
    }

    /// Yes/no verdict for safety
    pub fn verdict(&self, safe: bool) -> String {
        match (safe, self.use_colors) {
            (true, true) => "Yes".green().bold().to_string(),
            (false, true) => "No".red().bold().to_string(),
            (true, false) => "Yes".to_string(),
            (false, false) => "No".to_string(),
        }
    }
}

/// Print formatted output
pub fn print_error(msg: &str) {
    let style = OutputStyle::default();
    eprintln!("{}", style.error(msg));
}

pub fn print_info(msg: &str) {
    let style = OutputStyle::default();
    println!("{}", style.info(msg));
}
