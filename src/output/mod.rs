//! Styled terminal output for the HCP assistant.
//!
//! Pastel palette and message shapes shared by every subcommand.

use owo_colors::OwoColorize;

/// Print a success message with a green checkmark
pub fn success(message: &str) {
    // Pastel mint green: RGB(152, 225, 152)
    println!(
        "{} {}",
        "✓".truecolor(152, 225, 152).bold(),
        message.bright_white()
    );
}

/// Print an error message with a red X
pub fn error(message: &str) {
    // Pastel coral/salmon: RGB(255, 160, 160)
    eprintln!(
        "{} {}",
        "✗".truecolor(255, 160, 160).bold(),
        message.bright_white()
    );
}

/// Print a warning message with a yellow warning symbol
pub fn warning(message: &str) {
    // Pastel cream/yellow: RGB(255, 230, 160)
    println!(
        "{} {}",
        "⚠".truecolor(255, 230, 160).bold(),
        message.bright_white()
    );
}

/// Print an info message with a blue info symbol
pub fn info(message: &str) {
    // Pastel sky blue: RGB(160, 200, 255)
    println!(
        "{} {}",
        "ℹ".truecolor(160, 200, 255).bold(),
        message.bright_white()
    );
}

/// Print a section header with a separator line
pub fn section(title: &str) {
    // Pastel lavender: RGB(181, 174, 254)
    println!("\n{}", title.truecolor(181, 174, 254).bold());
    // Brighter grey: RGB(160, 160, 160)
    println!("{}", "─".repeat(50).truecolor(160, 160, 160));
}

/// Print a small section header without separator
pub fn subsection(title: &str) {
    // Softer pastel teal: RGB(120, 180, 195)
    println!("\n{}", title.truecolor(120, 180, 195));
    println!("{}", "·".repeat(30).truecolor(160, 160, 160));
}

/// Print a key-value pair with styled key and value
pub fn key_value(key: &str, value: &str) {
    // Brighter grey: RGB(160, 160, 160)
    println!(
        "  {} {}",
        format!("{}:", key).truecolor(160, 160, 160),
        value.bright_white()
    );
}

/// Print a key-value pair where the value is highlighted
pub fn key_value_highlight(key: &str, value: &str) {
    // Softer pastel teal: RGB(120, 180, 195)
    println!(
        "  {} {}",
        format!("{}:", key).truecolor(160, 160, 160),
        value.truecolor(120, 180, 195).bold()
    );
}

/// Print a dimmed/muted message
pub fn dimmed(message: &str) {
    // Brighter grey: RGB(160, 160, 160)
    println!("{}", message.truecolor(160, 160, 160));
}

/// Print a step indicator
pub fn step(number: usize, total: usize, description: &str) {
    // Pastel lavender: RGB(181, 174, 254)
    println!(
        "\n{} {}",
        format!("[{}/{}]", number, total)
            .truecolor(181, 174, 254)
            .bold(),
        description.bright_white()
    );
}

/// Print a generated command or other code-like element
pub fn code(text: &str) {
    // Pastel cream/yellow: RGB(255, 230, 160)
    println!("  {}", text.truecolor(255, 230, 160));
}

/// Print a line with no styling at all, safe for piping into a shell
pub fn plain(message: &str) {
    println!("{}", message);
}

/// Print a blank line for spacing
pub fn blank() {
    println!();
}

/// Print whether a platform is supported or still on the way
pub fn status_check(item: &str, supported: bool) {
    if supported {
        // Pastel mint green: RGB(152, 225, 152)
        println!(
            "  {} {} {}",
            "✓".truecolor(152, 225, 152).bold(),
            item.bright_white(),
            "supported".truecolor(160, 160, 160)
        );
    } else {
        // Brighter grey: RGB(160, 160, 160)
        println!(
            "  {} {} {}",
            "·".truecolor(160, 160, 160).bold(),
            item.bright_white(),
            "coming soon".truecolor(160, 160, 160)
        );
    }
}
