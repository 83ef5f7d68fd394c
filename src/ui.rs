use colored::Colorize;

/// Print the status line of a received response
pub fn status_line(status: u16, status_text: &str) {
    let line = format!("{} {}", status, status_text);
    if (200..300).contains(&status) {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.yellow().bold());
    }
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red().bold());
}

/// Print a response body, if any
pub fn body(body: &str) {
    if !body.is_empty() {
        println!("{}", body);
    }
}
