use crate::traits::{
    Clipboard, InquireUserInput, Output, SystemClipboard, TerminalOutput, UserInput,
};
#[cfg(test)]
use crate::traits::{MockClipboard, MockOutput, MockUserInput};
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub input: Arc<dyn UserInput>,
    pub output: Arc<dyn Output>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl Context {
    /// Create a new context with real implementations (for production use)
    pub fn new() -> Self {
        Self {
            input: Arc::new(InquireUserInput),
            output: Arc::new(TerminalOutput),
            clipboard: Arc::new(SystemClipboard::new()),
        }
    }

    /// Create a new context with mock implementations (for testing)
    #[cfg(test)]
    #[allow(dead_code)]
    pub fn test() -> Self {
        Self {
            input: Arc::new(MockUserInput::new()),
            output: Arc::new(MockOutput::new()),
            clipboard: Arc::new(MockClipboard::new()),
        }
    }

    /// Create a test context with specific mock implementations
    #[cfg(test)]
    #[allow(dead_code)]
    pub fn test_with(
        input: Arc<dyn UserInput>,
        output: Arc<dyn Output>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            input,
            output,
            clipboard,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Context {
    fn clone(&self) -> Self {
        Self {
            input: Arc::clone(&self.input),
            output: Arc::clone(&self.output),
            clipboard: Arc::clone(&self.clipboard),
        }
    }
}
