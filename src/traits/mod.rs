pub mod clipboard;
pub mod output;
pub mod user_input;

pub use clipboard::{Clipboard, SystemClipboard};
pub use output::{Output, TerminalOutput};
pub use user_input::{InquireUserInput, UserInput};

#[cfg(test)]
pub use clipboard::MockClipboard;
#[cfg(test)]
pub use output::MockOutput;
#[cfg(test)]
pub use user_input::MockUserInput;
