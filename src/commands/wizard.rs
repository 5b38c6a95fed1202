use crate::context::Context;
use crate::platform::PlatformRegistry;
use crate::wizard::{WizardController, WizardStep};
use anyhow::Result;
use std::sync::Arc;

const NAV_CONTINUE: &str = "Continue";
const NAV_BACK: &str = "Go back";
const NAV_QUIT: &str = "Quit without finishing";
const NAV_COPY: &str = "Copy command to clipboard";
const NAV_FINISH: &str = "Finish";

/// Handles the 'wizard' command - the interactive step-by-step session
pub struct WizardCommand;

impl WizardCommand {
    /// Execute the wizard command
    pub fn execute(
        ctx: &Context,
        registry: Arc<PlatformRegistry>,
        platform: Option<&str>,
    ) -> Result<()> {
        let mut controller = WizardController::new(registry);
        if let Some(id) = platform {
            controller.select_platform(id);
        }
        // The authentication question asks about exactly this variable,
        // so seed its answer from the actual environment
        controller.form_mut().openstack.os_cloud_set = std::env::var_os("OS_CLOUD").is_some();

        ctx.output.section("HCP cluster assistant");
        ctx.output
            .dimmed("Builds an hcp create cluster command from your answers.");

        loop {
            let step = controller.current_step();
            let total = controller.steps().len();
            ctx.output.step_indicator(
                controller.step_index() + 1,
                total,
                &controller.step_title(step),
            );

            match step {
                WizardStep::ClusterDetails => {
                    Self::prompt_cluster_details(ctx, &mut controller)?;
                }
                WizardStep::PlatformSelection => {
                    Self::prompt_platform_selection(ctx, &mut controller)?;
                }
                WizardStep::Platform(index) => match controller.selected_platform() {
                    Some(platform) => platform.prompt_step(ctx, index, controller.form_mut())?,
                    None => ctx
                        .output
                        .warning("This step is unavailable for the selected platform."),
                },
                WizardStep::NotSupported => {
                    let id = controller.form().platform.clone().unwrap_or_default();
                    ctx.output
                        .info(&format!("{} clusters are not supported yet. Coming soon!", id));
                }
            }

            if controller.is_review_step() && controller.copied() {
                ctx.output.dimmed("The command is on your clipboard.");
            }

            if !Self::navigate(ctx, &mut controller)? {
                return Ok(());
            }
        }
    }

    fn prompt_cluster_details(ctx: &Context, controller: &mut WizardController) -> Result<()> {
        let form = controller.form_mut();

        form.name = ctx
            .input
            .text("Cluster name", Some(&form.name), Some("Example: test"))?;

        form.base_domain = ctx.input.text(
            "Base domain",
            Some(&form.base_domain),
            Some("Example: mydomain.com"),
        )?;

        form.node_pool_replicas = ctx.input.text(
            "Node pool replicas",
            Some(&form.node_pool_replicas),
            Some("Example: 2"),
        )?;

        form.pull_secret = ctx.input.text(
            "Pull secret path",
            Some(&form.pull_secret),
            Some("Example: /path/to/pull-secret"),
        )?;

        form.ssh_key = ctx.input.text(
            "SSH key path",
            Some(&form.ssh_key),
            Some("Example: /path/to/id_rsa.pub"),
        )?;

        Ok(())
    }

    fn prompt_platform_selection(ctx: &Context, controller: &mut WizardController) -> Result<()> {
        controller.auto_select_platform();

        if let Some(id) = controller.form().platform.clone() {
            if !controller.registry().has(&id) {
                ctx.output
                    .info(&format!("{} clusters are not supported yet. Coming soon!", id));
            }
        }

        let platforms = controller.registry().platforms();
        let selected = controller.form().platform.clone();

        // With a single available platform already chosen (by the user or
        // the auto-selection above) there is nothing left to ask
        if let [only] = platforms.as_slice() {
            if selected.as_deref() == Some(only.id()) {
                ctx.output.key_value_highlight("Platform", only.display_name());
                ctx.output
                    .dimmed("Selected automatically; it is the only platform available right now.");
                return Ok(());
            }
        }

        let options: Vec<String> = platforms
            .iter()
            .map(|p| p.display_name().to_string())
            .collect();
        let answer = ctx.input.select("Platform:", options.clone())?;
        if let Some(index) = options.iter().position(|opt| opt == &answer) {
            controller.select_platform(platforms[index].id());
        }

        Ok(())
    }

    /// Ask where to go from the current step. Returns false when the
    /// session is over.
    fn navigate(ctx: &Context, controller: &mut WizardController) -> Result<bool> {
        let mut options = Vec::new();
        if controller.is_review_step() {
            options.push(NAV_COPY.to_string());
            options.push(NAV_BACK.to_string());
            options.push(NAV_FINISH.to_string());
        } else {
            if !controller.is_last_step() {
                options.push(NAV_CONTINUE.to_string());
            }
            if !controller.is_first_step() {
                options.push(NAV_BACK.to_string());
            }
            options.push(NAV_QUIT.to_string());
        }

        match ctx.input.select("What next?", options)?.as_str() {
            NAV_CONTINUE => {
                if !controller.next() {
                    // The gate blocked; say what the step still needs
                    match controller.current_step_requirement() {
                        Some(hint) => ctx
                            .output
                            .warning(&format!("Can't continue yet: {}.", hint)),
                        None => ctx.output.warning("Can't continue yet."),
                    }
                }
                Ok(true)
            }
            NAV_BACK => {
                controller.previous();
                Ok(true)
            }
            NAV_COPY => {
                let command = controller.generate_command();
                match ctx.clipboard.copy(&command) {
                    Ok(()) => {
                        controller.mark_copied();
                        ctx.output.success("Copied!");
                    }
                    Err(err) => ctx
                        .output
                        .warning(&format!("Could not copy to clipboard: {}", err)),
                }
                Ok(true)
            }
            NAV_FINISH => {
                ctx.output.blank();
                ctx.output.plain(&controller.generate_command());
                Ok(false)
            }
            _ => {
                ctx.output.dimmed("No command generated.");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::user_input::MockResponse;
    use crate::traits::{MockClipboard, MockOutput, MockUserInput};

    const MINIMAL_COMMAND: &str = "hcp create cluster openstack --name test \
         --base-domain mydomain.com --node-pool-replicas 2 --pull-secret /ps \
         --ssh-key /key.pub --openstack-node-flavor m1.large";

    fn scripted_context(
        responses: Vec<MockResponse>,
    ) -> (Context, Arc<MockOutput>, Arc<MockClipboard>) {
        let output = Arc::new(MockOutput::new());
        let clipboard = Arc::new(MockClipboard::new());
        let ctx = Context::test_with(
            Arc::new(MockUserInput::with_responses(responses)),
            Arc::clone(&output) as Arc<dyn crate::traits::Output>,
            Arc::clone(&clipboard) as Arc<dyn crate::traits::Clipboard>,
        );
        (ctx, output, clipboard)
    }

    fn text(value: &str) -> MockResponse {
        MockResponse::Text(value.to_string())
    }

    fn select(value: &str) -> MockResponse {
        MockResponse::Select(value.to_string())
    }

    /// Answers for the cluster-details step plus Continue
    fn cluster_details_responses() -> Vec<MockResponse> {
        vec![
            text("test"),
            text("mydomain.com"),
            text("2"),
            text("/ps"),
            text("/key.pub"),
            select(NAV_CONTINUE),
        ]
    }

    #[test]
    fn test_full_session_copies_and_prints_the_command() {
        let mut responses = cluster_details_responses();
        // Platform step: auto-selected, only navigation is asked
        responses.push(select(NAV_CONTINUE));
        // Authentication: OS_CLOUD available, optional fields skipped
        responses.extend([
            MockResponse::Confirm(true),
            text(""),
            text(""),
            select(NAV_CONTINUE),
        ]);
        // Networking: no optional values, no ports
        responses.extend([
            text(""),
            text(""),
            text(""),
            select("Done with ports"),
            select(NAV_CONTINUE),
        ]);
        // Node configuration
        responses.extend([text("m1.large"), text(""), text(""), select(NAV_CONTINUE)]);
        // Review: copy, then finish
        responses.push(select(NAV_COPY));
        responses.push(select(NAV_FINISH));

        let (ctx, output, clipboard) = scripted_context(responses);
        let registry = Arc::new(PlatformRegistry::with_defaults());

        WizardCommand::execute(&ctx, registry, None).unwrap();

        assert_eq!(clipboard.copied_texts(), vec![MINIMAL_COMMAND.to_string()]);
        assert_eq!(output.plain_lines(), vec![MINIMAL_COMMAND.to_string()]);
    }

    #[test]
    fn test_blocked_continue_warns_and_reprompts() {
        let mut responses = cluster_details_responses();
        responses.push(select(NAV_CONTINUE));
        responses.extend([
            MockResponse::Confirm(true),
            text(""),
            text(""),
            select(NAV_CONTINUE),
        ]);
        responses.extend([
            text(""),
            text(""),
            text(""),
            select("Done with ports"),
            select(NAV_CONTINUE),
        ]);
        // First attempt leaves the flavor empty; the gate must block
        responses.extend([text(""), text(""), text(""), select(NAV_CONTINUE)]);
        // Second attempt fills it in
        responses.extend([text("m1.large"), text(""), text(""), select(NAV_CONTINUE)]);
        responses.push(select(NAV_FINISH));

        let (ctx, output, _clipboard) = scripted_context(responses);
        let registry = Arc::new(PlatformRegistry::with_defaults());

        WizardCommand::execute(&ctx, registry, None).unwrap();

        assert!(output.has_warning_containing("node flavor"));
        assert_eq!(output.plain_lines(), vec![MINIMAL_COMMAND.to_string()]);
    }

    #[test]
    fn test_port_editor_feeds_the_generated_command() {
        let mut responses = cluster_details_responses();
        responses.push(select(NAV_CONTINUE));
        responses.extend([
            MockResponse::Confirm(true),
            text(""),
            text(""),
            select(NAV_CONTINUE),
        ]);
        // Networking: add one complete port before finishing the step
        responses.extend([
            text(""),
            text(""),
            text(""),
            select("Add a port"),
            text("net-1"),
            text("direct"),
            text(""),
            MockResponse::Confirm(true),
            select("Done with ports"),
            select(NAV_CONTINUE),
        ]);
        responses.extend([text("m1.large"), text(""), text(""), select(NAV_CONTINUE)]);
        responses.push(select(NAV_FINISH));

        let (ctx, output, _clipboard) = scripted_context(responses);
        let registry = Arc::new(PlatformRegistry::with_defaults());

        WizardCommand::execute(&ctx, registry, None).unwrap();

        let expected = format!(
            "{} --openstack-node-additional-port=network-id:net-1,vnic-type:direct,disable-port-security:true",
            MINIMAL_COMMAND
        );
        assert_eq!(output.plain_lines(), vec![expected]);
    }

    #[test]
    fn test_removed_port_leaves_no_trace() {
        let mut responses = cluster_details_responses();
        responses.push(select(NAV_CONTINUE));
        responses.extend([
            MockResponse::Confirm(true),
            text(""),
            text(""),
            select(NAV_CONTINUE),
        ]);
        responses.extend([
            text(""),
            text(""),
            text(""),
            select("Add a port"),
            text("net-1"),
            text(""),
            text(""),
            MockResponse::Confirm(false),
            select("Remove a port"),
            select("Port 1"),
            select("Done with ports"),
            select(NAV_CONTINUE),
        ]);
        responses.extend([text("m1.large"), text(""), text(""), select(NAV_CONTINUE)]);
        responses.push(select(NAV_FINISH));

        let (ctx, output, _clipboard) = scripted_context(responses);
        let registry = Arc::new(PlatformRegistry::with_defaults());

        WizardCommand::execute(&ctx, registry, None).unwrap();

        assert_eq!(output.plain_lines(), vec![MINIMAL_COMMAND.to_string()]);
    }

    #[test]
    fn test_preselected_unsupported_platform_reports_coming_soon() {
        let mut responses = cluster_details_responses();
        // Platform step: coming-soon notice, then re-selection is offered
        responses.push(select("OpenStack"));
        responses.push(select(NAV_QUIT));

        let (ctx, output, clipboard) = scripted_context(responses);
        let registry = Arc::new(PlatformRegistry::with_defaults());

        WizardCommand::execute(&ctx, registry, Some("aws")).unwrap();

        assert!(output.has_info_containing("Coming soon"));
        assert!(clipboard.copied_texts().is_empty());
    }

    #[test]
    fn test_clipboard_failure_is_a_warning_not_an_error() {
        let mut responses = cluster_details_responses();
        responses.push(select(NAV_CONTINUE));
        responses.extend([
            MockResponse::Confirm(true),
            text(""),
            text(""),
            select(NAV_CONTINUE),
        ]);
        responses.extend([
            text(""),
            text(""),
            text(""),
            select("Done with ports"),
            select(NAV_CONTINUE),
        ]);
        responses.extend([text("m1.large"), text(""), text(""), select(NAV_CONTINUE)]);
        responses.push(select(NAV_COPY));
        responses.push(select(NAV_FINISH));

        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(
            Arc::new(MockUserInput::with_responses(responses)),
            Arc::clone(&output) as Arc<dyn crate::traits::Output>,
            Arc::new(MockClipboard::failing()),
        );
        let registry = Arc::new(PlatformRegistry::with_defaults());

        let result = WizardCommand::execute(&ctx, registry, None);

        assert!(result.is_ok());
        assert!(output.has_warning_containing("clipboard"));
    }
}
