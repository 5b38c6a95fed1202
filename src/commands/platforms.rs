use crate::context::Context;
use crate::platform::{COMING_SOON_PLATFORMS, PlatformRegistry};
use anyhow::Result;

/// Handles the 'platforms' command - lists what the assistant can target
pub struct PlatformsCommand;

impl PlatformsCommand {
    /// Execute the platforms command
    pub fn execute(ctx: &Context, registry: &PlatformRegistry) -> Result<()> {
        ctx.output.section("Platforms");

        for platform in registry.platforms() {
            ctx.output.status_check(platform.display_name(), true);
        }
        for id in COMING_SOON_PLATFORMS {
            if !registry.has(id) {
                ctx.output.status_check(id, false);
            }
        }

        ctx.output.blank();
        ctx.output.dimmed("Generate a command with: hcpa wizard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::output::OutputMessage;
    use crate::traits::{MockClipboard, MockOutput, MockUserInput};
    use std::sync::Arc;

    #[test]
    fn test_listing_separates_supported_from_coming_soon() {
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(
            Arc::new(MockUserInput::new()),
            Arc::clone(&output) as Arc<dyn crate::traits::Output>,
            Arc::new(MockClipboard::new()),
        );
        let registry = PlatformRegistry::with_defaults();

        PlatformsCommand::execute(&ctx, &registry).unwrap();

        let messages = output.messages();
        assert!(messages.contains(&OutputMessage::StatusCheck("OpenStack".to_string(), true)));
        assert!(messages.contains(&OutputMessage::StatusCheck("aws".to_string(), false)));
    }
}
