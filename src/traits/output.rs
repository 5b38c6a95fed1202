use std::sync::Mutex;

/// Output message captured by MockOutput for testing
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum OutputMessage {
    Success(String),
    Error(String),
    Warning(String),
    Info(String),
    Section(String),
    Subsection(String),
    KeyValue(String, String),
    KeyValueHighlight(String, String),
    Dimmed(String),
    Code(String),
    Plain(String),
    StepIndicator(usize, usize, String),
    StatusCheck(String, bool),
    Blank,
}

/// Trait for terminal output operations to enable testing with mocks
pub trait Output: Send + Sync {
    /// Print a success message
    fn success(&self, message: &str);

    /// Print an error message
    #[allow(dead_code)]
    fn error(&self, message: &str);

    /// Print a warning message
    fn warning(&self, message: &str);

    /// Print an info message
    fn info(&self, message: &str);

    /// Print a section header
    fn section(&self, title: &str);

    /// Print a subsection header
    fn subsection(&self, title: &str);

    /// Print a key-value pair
    fn key_value(&self, key: &str, value: &str);

    /// Print a key-value pair with highlighted value
    fn key_value_highlight(&self, key: &str, value: &str);

    /// Print a dimmed/muted message
    fn dimmed(&self, message: &str);

    /// Print a generated command or other code-like element
    fn code(&self, text: &str);

    /// Print an unstyled line (shell-paste friendly)
    fn plain(&self, message: &str);

    /// Print a wizard step indicator
    fn step_indicator(&self, number: usize, total: usize, description: &str);

    /// Print a platform availability row
    fn status_check(&self, item: &str, supported: bool);

    /// Print a blank line
    fn blank(&self);
}

/// Real terminal output implementation using the output module
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn success(&self, message: &str) {
        crate::output::success(message);
    }

    fn error(&self, message: &str) {
        crate::output::error(message);
    }

    fn warning(&self, message: &str) {
        crate::output::warning(message);
    }

    fn info(&self, message: &str) {
        crate::output::info(message);
    }

    fn section(&self, title: &str) {
        crate::output::section(title);
    }

    fn subsection(&self, title: &str) {
        crate::output::subsection(title);
    }

    fn key_value(&self, key: &str, value: &str) {
        crate::output::key_value(key, value);
    }

    fn key_value_highlight(&self, key: &str, value: &str) {
        crate::output::key_value_highlight(key, value);
    }

    fn dimmed(&self, message: &str) {
        crate::output::dimmed(message);
    }

    fn code(&self, text: &str) {
        crate::output::code(text);
    }

    fn plain(&self, message: &str) {
        crate::output::plain(message);
    }

    fn step_indicator(&self, number: usize, total: usize, description: &str) {
        crate::output::step(number, total, description);
    }

    fn status_check(&self, item: &str, supported: bool) {
        crate::output::status_check(item, supported);
    }

    fn blank(&self) {
        crate::output::blank();
    }
}

/// Mock output implementation that captures messages for testing
#[allow(dead_code)]
pub struct MockOutput {
    messages: Mutex<Vec<OutputMessage>>,
}

#[allow(dead_code)]
impl MockOutput {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// All captured messages, in emission order
    pub fn messages(&self) -> Vec<OutputMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// All unstyled lines, in emission order
    pub fn plain_lines(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                OutputMessage::Plain(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    /// Whether any warning contains the given fragment
    pub fn has_warning_containing(&self, fragment: &str) -> bool {
        self.messages().iter().any(|m| {
            matches!(m, OutputMessage::Warning(msg) if msg.contains(fragment))
        })
    }

    /// Whether any info message contains the given fragment
    pub fn has_info_containing(&self, fragment: &str) -> bool {
        self.messages().iter().any(|m| {
            matches!(m, OutputMessage::Info(msg) if msg.contains(fragment))
        })
    }

    fn record(&self, message: OutputMessage) {
        self.messages.lock().unwrap().push(message);
    }
}

impl Default for MockOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for MockOutput {
    fn success(&self, message: &str) {
        self.record(OutputMessage::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.record(OutputMessage::Error(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.record(OutputMessage::Warning(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.record(OutputMessage::Info(message.to_string()));
    }

    fn section(&self, title: &str) {
        self.record(OutputMessage::Section(title.to_string()));
    }

    fn subsection(&self, title: &str) {
        self.record(OutputMessage::Subsection(title.to_string()));
    }

    fn key_value(&self, key: &str, value: &str) {
        self.record(OutputMessage::KeyValue(key.to_string(), value.to_string()));
    }

    fn key_value_highlight(&self, key: &str, value: &str) {
        self.record(OutputMessage::KeyValueHighlight(
            key.to_string(),
            value.to_string(),
        ));
    }

    fn dimmed(&self, message: &str) {
        self.record(OutputMessage::Dimmed(message.to_string()));
    }

    fn code(&self, text: &str) {
        self.record(OutputMessage::Code(text.to_string()));
    }

    fn plain(&self, message: &str) {
        self.record(OutputMessage::Plain(message.to_string()));
    }

    fn step_indicator(&self, number: usize, total: usize, description: &str) {
        self.record(OutputMessage::StepIndicator(
            number,
            total,
            description.to_string(),
        ));
    }

    fn status_check(&self, item: &str, supported: bool) {
        self.record(OutputMessage::StatusCheck(item.to_string(), supported));
    }

    fn blank(&self) {
        self.record(OutputMessage::Blank);
    }
}
