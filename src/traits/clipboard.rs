use anyhow::Result;
use std::io::Write;
use std::process::{Command, Stdio};

/// Trait for placing text on the system clipboard, allowing for mocking in tests
pub trait Clipboard: Send + Sync {
    /// Copy the given text to the clipboard
    fn copy(&self, text: &str) -> Result<()>;
}

/// Real clipboard implementation that pipes text into the platform's
/// clipboard helper. The first helper that accepts the text wins.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn helpers() -> Vec<(&'static str, Vec<&'static str>)> {
        if cfg!(target_os = "macos") {
            vec![("pbcopy", vec![])]
        } else if cfg!(target_os = "windows") {
            vec![("clip", vec![])]
        } else {
            vec![
                ("wl-copy", vec![]),
                ("xclip", vec!["-selection", "clipboard"]),
                ("xsel", vec!["--clipboard", "--input"]),
            ]
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        for (program, args) in Self::helpers() {
            let spawned = Command::new(program)
                .args(&args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            let mut child = match spawned {
                Ok(child) => child,
                // Helper not installed, try the next one
                Err(_) => continue,
            };

            if let Some(mut stdin) = child.stdin.take() {
                if stdin.write_all(text.as_bytes()).is_err() {
                    let _ = child.wait();
                    continue;
                }
            }

            match child.wait() {
                Ok(status) if status.success() => return Ok(()),
                _ => continue,
            }
        }

        anyhow::bail!(
            "no clipboard helper available (tried {})",
            Self::helpers()
                .iter()
                .map(|(program, _)| *program)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Mock clipboard for testing that captures copied text
#[allow(dead_code)]
pub struct MockClipboard {
    copied: std::sync::Mutex<Vec<String>>,
    fail: bool,
}

#[allow(dead_code)]
impl MockClipboard {
    pub fn new() -> Self {
        Self {
            copied: std::sync::Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a mock whose copy operation always fails
    pub fn failing() -> Self {
        Self {
            copied: std::sync::Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// All texts copied so far, in order
    pub fn copied_texts(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl Default for MockClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for MockClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("mock clipboard configured to fail");
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
