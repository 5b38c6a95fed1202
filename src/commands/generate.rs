use crate::context::Context;
use crate::form::{ClusterForm, PortSpec};
use crate::platform::{NOT_IMPLEMENTED_COMMAND, PlatformRegistry};
use anyhow::Result;
use clap::Args;

fn parse_port_arg(value: &str) -> Result<PortSpec, String> {
    PortSpec::parse(value).map_err(|err| err.to_string())
}

/// Flags for the non-interactive path; they mirror the flags of the
/// command being generated.
#[derive(Args)]
pub struct GenerateArgs {
    /// Cluster name
    #[arg(long)]
    pub name: Option<String>,

    /// Base DNS domain
    #[arg(long)]
    pub base_domain: Option<String>,

    /// Node pool replica count
    #[arg(long)]
    pub node_pool_replicas: Option<String>,

    /// Path to the pull secret
    #[arg(long)]
    pub pull_secret: Option<String>,

    /// Path to the SSH public key
    #[arg(long)]
    pub ssh_key: Option<String>,

    /// Target platform
    #[arg(long, default_value = "openstack")]
    pub platform: String,

    /// OpenStack credentials file; omit when OS_CLOUD is set in the environment
    #[arg(long)]
    pub credentials_file: Option<String>,

    /// OpenStack CA certificate file
    #[arg(long)]
    pub ca_cert_file: Option<String>,

    /// Cloud entry in clouds.yaml
    #[arg(long)]
    pub cloud: Option<String>,

    /// External network ID
    #[arg(long)]
    pub external_network_id: Option<String>,

    /// Ingress floating IP
    #[arg(long)]
    pub ingress_floating_ip: Option<String>,

    /// Comma-separated DNS nameservers
    #[arg(long)]
    pub dns_nameservers: Option<String>,

    /// Flavor name for the node pool
    #[arg(long)]
    pub node_flavor: Option<String>,

    /// Nova availability zone for the node pool
    #[arg(long)]
    pub node_availability_zone: Option<String>,

    /// Glance image name for the node pool
    #[arg(long)]
    pub node_image_name: Option<String>,

    /// Additional node port as network-id:<id>[,vnic-type:<v>][,address-pairs:<v>][,disable-port-security:true]; repeatable
    #[arg(long = "additional-port", value_parser = parse_port_arg)]
    pub additional_ports: Vec<PortSpec>,

    /// Also copy the generated command to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl GenerateArgs {
    fn into_form(self) -> ClusterForm {
        let mut form = ClusterForm {
            name: self.name.unwrap_or_default(),
            base_domain: self.base_domain.unwrap_or_default(),
            node_pool_replicas: self.node_pool_replicas.unwrap_or_default(),
            pull_secret: self.pull_secret.unwrap_or_default(),
            ssh_key: self.ssh_key.unwrap_or_default(),
            platform: Some(self.platform),
            ..Default::default()
        };

        let os = &mut form.openstack;
        os.os_cloud_set = self.credentials_file.is_none();
        os.credentials_file = self.credentials_file.unwrap_or_default();
        os.ca_cert_file = self.ca_cert_file.unwrap_or_default();
        os.cloud = self.cloud.unwrap_or_default();
        os.external_network_id = self.external_network_id.unwrap_or_default();
        os.ingress_floating_ip = self.ingress_floating_ip.unwrap_or_default();
        os.dns_nameservers = self.dns_nameservers.unwrap_or_default();
        os.node_flavor = self.node_flavor.unwrap_or_default();
        os.node_availability_zone = self.node_availability_zone.unwrap_or_default();
        os.node_image_name = self.node_image_name.unwrap_or_default();
        os.additional_ports = self.additional_ports;

        form
    }
}

/// Handles the 'generate' command - flags in, command out, no prompts
pub struct GenerateCommand;

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(ctx: &Context, registry: &PlatformRegistry, args: GenerateArgs) -> Result<()> {
        let copy = args.copy;
        let form = args.into_form();
        let platform_id = form.platform.clone().unwrap_or_default();

        let Some(platform) = registry.get(&platform_id) else {
            ctx.output.info(&format!(
                "{} clusters are not supported yet. Coming soon!",
                platform_id
            ));
            ctx.output.plain(NOT_IMPLEMENTED_COMMAND);
            return Ok(());
        };

        let mut problems = Vec::new();
        if !form.has_cluster_details() {
            problems.push(
                "cluster details: --name, --base-domain, --node-pool-replicas, --pull-secret and --ssh-key are all required"
                    .to_string(),
            );
        }
        for (index, title) in platform.step_titles().iter().enumerate() {
            if !platform.is_step_valid(index, &form) {
                match platform.step_requirement(index) {
                    Some(hint) => problems.push(format!("{}: {}", title.to_lowercase(), hint)),
                    None => problems.push(format!("{}: required inputs are missing", title.to_lowercase())),
                }
            }
        }
        if !problems.is_empty() {
            anyhow::bail!(
                "cannot generate the command yet:\n  - {}",
                problems.join("\n  - ")
            );
        }

        let command = platform.generate_command(&form);
        ctx.output.plain(&command);

        if copy {
            ctx.clipboard.copy(&command)?;
            ctx.output.success("Copied!");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockClipboard, MockOutput, MockUserInput};
    use std::sync::Arc;

    fn minimal_args() -> GenerateArgs {
        GenerateArgs {
            name: Some("test".to_string()),
            base_domain: Some("mydomain.com".to_string()),
            node_pool_replicas: Some("2".to_string()),
            pull_secret: Some("/ps".to_string()),
            ssh_key: Some("/key.pub".to_string()),
            platform: "openstack".to_string(),
            credentials_file: None,
            ca_cert_file: None,
            cloud: None,
            external_network_id: None,
            ingress_floating_ip: None,
            dns_nameservers: None,
            node_flavor: Some("m1.large".to_string()),
            node_availability_zone: None,
            node_image_name: None,
            additional_ports: Vec::new(),
            copy: false,
        }
    }

    fn mock_context() -> (Context, Arc<MockOutput>, Arc<MockClipboard>) {
        let output = Arc::new(MockOutput::new());
        let clipboard = Arc::new(MockClipboard::new());
        let ctx = Context::test_with(
            Arc::new(MockUserInput::new()),
            Arc::clone(&output) as Arc<dyn crate::traits::Output>,
            Arc::clone(&clipboard) as Arc<dyn crate::traits::Clipboard>,
        );
        (ctx, output, clipboard)
    }

    #[test]
    fn test_minimal_flags_print_the_command() {
        let (ctx, output, _clipboard) = mock_context();
        let registry = PlatformRegistry::with_defaults();

        GenerateCommand::execute(&ctx, &registry, minimal_args()).unwrap();

        assert_eq!(
            output.plain_lines(),
            vec![
                "hcp create cluster openstack --name test --base-domain mydomain.com \
                 --node-pool-replicas 2 --pull-secret /ps --ssh-key /key.pub \
                 --openstack-node-flavor m1.large"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_credentials_file_flag_switches_auth_mode() {
        let (ctx, output, _clipboard) = mock_context();
        let registry = PlatformRegistry::with_defaults();

        let mut args = minimal_args();
        args.credentials_file = Some("/creds.yaml".to_string());
        GenerateCommand::execute(&ctx, &registry, args).unwrap();

        let lines = output.plain_lines();
        assert!(lines[0].contains("--openstack-credentials-file /creds.yaml"));
    }

    #[test]
    fn test_repeatable_ports_are_emitted_in_order() {
        let (ctx, output, _clipboard) = mock_context();
        let registry = PlatformRegistry::with_defaults();

        let mut args = minimal_args();
        args.additional_ports = vec![
            PortSpec::parse("network-id:net-1,vnic-type:direct").unwrap(),
            PortSpec::parse("network-id:net-2,disable-port-security:true").unwrap(),
        ];
        GenerateCommand::execute(&ctx, &registry, args).unwrap();

        let lines = output.plain_lines();
        let first = lines[0].find("network-id:net-1,vnic-type:direct").unwrap();
        let second = lines[0]
            .find("network-id:net-2,disable-port-security:true")
            .unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_missing_required_flags_are_reported_together() {
        let (ctx, _output, _clipboard) = mock_context();
        let registry = PlatformRegistry::with_defaults();

        let mut args = minimal_args();
        args.name = None;
        args.node_flavor = None;
        let err = GenerateCommand::execute(&ctx, &registry, args).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("--name"));
        assert!(message.contains("node flavor"));
    }

    #[test]
    fn test_incomplete_port_blocks_generation() {
        let (ctx, _output, _clipboard) = mock_context();
        let registry = PlatformRegistry::with_defaults();

        let mut args = minimal_args();
        args.additional_ports = vec![PortSpec::parse("vnic-type:direct").unwrap()];
        let err = GenerateCommand::execute(&ctx, &registry, args).unwrap_err();

        assert!(err.to_string().contains("network ID"));
    }

    #[test]
    fn test_unsupported_platform_prints_placeholder() {
        let (ctx, output, _clipboard) = mock_context();
        let registry = PlatformRegistry::with_defaults();

        let mut args = minimal_args();
        args.platform = "aws".to_string();
        GenerateCommand::execute(&ctx, &registry, args).unwrap();

        assert!(output.has_info_containing("Coming soon"));
        assert_eq!(output.plain_lines(), vec![NOT_IMPLEMENTED_COMMAND.to_string()]);
    }

    #[test]
    fn test_copy_flag_uses_the_clipboard() {
        let (ctx, output, clipboard) = mock_context();
        let registry = PlatformRegistry::with_defaults();

        let mut args = minimal_args();
        args.copy = true;
        GenerateCommand::execute(&ctx, &registry, args).unwrap();

        assert_eq!(clipboard.copied_texts(), output.plain_lines());
    }
}
