//! The OpenStack platform: four wizard steps and the command serializer.

use super::Platform;
use crate::context::Context;
use crate::form::{ClusterForm, OpenStackForm, PortSpec};
use anyhow::Result;

const AUTHENTICATION: usize = 0;
const NETWORKING: usize = 1;
const NODE_CONFIGURATION: usize = 2;
const REVIEW: usize = 3;

const STEP_TITLES: &[&str] = &[
    "OpenStack authentication",
    "Networking",
    "Node configuration",
    "Review",
];

pub struct OpenStackPlatform;

impl Platform for OpenStackPlatform {
    fn id(&self) -> &'static str {
        "openstack"
    }

    fn display_name(&self) -> &'static str {
        "OpenStack"
    }

    fn step_titles(&self) -> &'static [&'static str] {
        STEP_TITLES
    }

    fn is_step_valid(&self, step: usize, form: &ClusterForm) -> bool {
        let os = &form.openstack;
        match step {
            AUTHENTICATION => os.os_cloud_set || !os.credentials_file.trim().is_empty(),
            NETWORKING => os.additional_ports.iter().all(PortSpec::is_complete),
            NODE_CONFIGURATION => !os.node_flavor.trim().is_empty(),
            // Review never blocks
            _ => true,
        }
    }

    fn step_requirement(&self, step: usize) -> Option<&'static str> {
        match step {
            AUTHENTICATION => Some("confirm OS_CLOUD is set or provide a credentials file"),
            NETWORKING => Some("every additional port needs a network ID"),
            NODE_CONFIGURATION => Some("the node flavor is required"),
            _ => None,
        }
    }

    fn prompt_step(&self, ctx: &Context, step: usize, form: &mut ClusterForm) -> Result<()> {
        match step {
            AUTHENTICATION => self.prompt_authentication(ctx, form),
            NETWORKING => self.prompt_networking(ctx, form),
            NODE_CONFIGURATION => self.prompt_node_configuration(ctx, form),
            REVIEW => self.prompt_review(ctx, form),
            _ => {
                // Unreachable with the derived step sequence
                ctx.output.warning("Nothing to configure on this step.");
                Ok(())
            }
        }
    }

    fn generate_command(&self, form: &ClusterForm) -> String {
        let os = &form.openstack;

        let mut cmd = format!(
            "hcp create cluster openstack\n  --name {}\n  --base-domain {}\n  --node-pool-replicas {}\n  --pull-secret {}\n  --ssh-key {}",
            form.name, form.base_domain, form.node_pool_replicas, form.pull_secret, form.ssh_key
        );

        if !os.os_cloud_set {
            cmd.push_str(&format!(
                "\n  --openstack-credentials-file {}",
                os.credentials_file
            ));
        }
        if !os.ca_cert_file.trim().is_empty() {
            cmd.push_str(&format!("\n  --openstack-ca-cert-file {}", os.ca_cert_file));
        }
        if !os.cloud.trim().is_empty() {
            cmd.push_str(&format!("\n  --openstack-cloud {}", os.cloud));
        }
        if !os.external_network_id.trim().is_empty() {
            cmd.push_str(&format!(
                "\n  --openstack-external-network-id {}",
                os.external_network_id
            ));
        }
        if !os.ingress_floating_ip.trim().is_empty() {
            cmd.push_str(&format!(
                "\n  --openstack-ingress-floating-ip {}",
                os.ingress_floating_ip
            ));
        }

        cmd.push_str(&format!("\n  --openstack-node-flavor {}", os.node_flavor));

        if !os.dns_nameservers.trim().is_empty() {
            cmd.push_str(&format!(
                "\n  --openstack-dns-nameservers {}",
                os.dns_nameservers
            ));
        }
        if !os.node_availability_zone.trim().is_empty() {
            cmd.push_str(&format!(
                "\n  --openstack-node-availability-zone {}",
                os.node_availability_zone
            ));
        }
        if !os.node_image_name.trim().is_empty() {
            cmd.push_str(&format!(
                "\n  --openstack-node-image-name {}",
                os.node_image_name
            ));
        }

        for port in os.additional_ports.iter().filter(|p| p.is_complete()) {
            cmd.push_str(&format!(
                "\n  --openstack-node-additional-port={}",
                port.flag_value()
            ));
        }

        // The line breaks keep the assembly readable; collapsing every
        // whitespace run is what yields the single-line shell command.
        cmd.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl OpenStackPlatform {
    fn prompt_authentication(&self, ctx: &Context, form: &mut ClusterForm) -> Result<()> {
        let os = &mut form.openstack;

        os.os_cloud_set = ctx
            .input
            .confirm("Is OS_CLOUD set in your environment?", os.os_cloud_set)?;

        if !os.os_cloud_set {
            os.credentials_file = ctx.input.text(
                "Credentials file",
                Some(&os.credentials_file),
                Some("Example: /path/to/clouds.yaml"),
            )?;
        }

        os.cloud = ctx.input.text(
            "Cloud name (optional)",
            Some(&os.cloud),
            Some("Entry in clouds.yaml; hcp defaults to openstack"),
        )?;

        os.ca_cert_file = ctx.input.text(
            "CA certificate file (optional)",
            Some(&os.ca_cert_file),
            Some("Example: /path/to/ca.crt"),
        )?;

        Ok(())
    }

    fn prompt_networking(&self, ctx: &Context, form: &mut ClusterForm) -> Result<()> {
        let os = &mut form.openstack;

        os.external_network_id = ctx.input.text(
            "External network ID (optional)",
            Some(&os.external_network_id),
            Some("Example: 64f629fd-f75b-4e66-96ad-94f6f2125ba4"),
        )?;

        os.ingress_floating_ip = ctx.input.text(
            "Ingress floating IP (optional)",
            Some(&os.ingress_floating_ip),
            Some("Example: 192.168.100.7"),
        )?;

        os.dns_nameservers = ctx.input.text(
            "DNS nameservers (optional)",
            Some(&os.dns_nameservers),
            Some("Comma-separated. Example: 1.1.1.1,8.8.8.8"),
        )?;

        ctx.output.subsection("Additional node ports");
        Self::edit_ports(ctx, os)
    }

    /// Port editor sub-loop: list the current entries, then add, edit or
    /// remove until the user is done. Order of the remaining entries is
    /// preserved throughout.
    fn edit_ports(ctx: &Context, os: &mut OpenStackForm) -> Result<()> {
        loop {
            if os.additional_ports.is_empty() {
                ctx.output.dimmed("No additional ports configured.");
            } else {
                for (index, port) in os.additional_ports.iter().enumerate() {
                    let summary = if port.is_complete() {
                        port.flag_value()
                    } else {
                        "network ID not set".to_string()
                    };
                    ctx.output.key_value(&format!("Port {}", index + 1), &summary);
                }
            }

            let mut actions = vec!["Add a port".to_string()];
            if !os.additional_ports.is_empty() {
                actions.push("Edit a port".to_string());
                actions.push("Remove a port".to_string());
            }
            actions.push("Done with ports".to_string());

            match ctx.input.select("Additional ports:", actions)?.as_str() {
                "Add a port" => {
                    os.add_port();
                    let index = os.additional_ports.len() - 1;
                    if let Some(port) = os.port_mut(index) {
                        Self::prompt_port(ctx, port)?;
                    }
                }
                "Edit a port" => {
                    if let Some(index) = Self::pick_port(ctx, os)? {
                        if let Some(port) = os.port_mut(index) {
                            Self::prompt_port(ctx, port)?;
                        }
                    }
                }
                "Remove a port" => {
                    if let Some(index) = Self::pick_port(ctx, os)? {
                        os.remove_port(index);
                    }
                }
                _ => {
                    if !os.additional_ports.iter().all(PortSpec::is_complete) {
                        ctx.output.warning(
                            "Ports without a network ID will block this step; edit or remove them to continue.",
                        );
                    }
                    return Ok(());
                }
            }
        }
    }

    fn prompt_port(ctx: &Context, port: &mut PortSpec) -> Result<()> {
        port.network_id = ctx.input.text(
            "Network ID",
            Some(&port.network_id),
            Some("Example: 64f629fd-f75b-4e66-96ad-94f6f2125ba4"),
        )?;

        port.vnic_type = ctx.input.text(
            "VNIC type (optional)",
            Some(&port.vnic_type),
            Some("Example: direct"),
        )?;

        port.address_pairs = ctx.input.text(
            "Address pairs (optional)",
            Some(&port.address_pairs),
            Some("Format: ip_address=mac_address,ip_address=mac_address"),
        )?;

        port.disable_port_security = ctx
            .input
            .confirm("Disable port security?", port.disable_port_security)?;

        Ok(())
    }

    fn prompt_node_configuration(&self, ctx: &Context, form: &mut ClusterForm) -> Result<()> {
        let os = &mut form.openstack;

        os.node_flavor = ctx.input.text(
            "Node flavor",
            Some(&os.node_flavor),
            Some("Flavor name for the node pool (required). Example: m1.large"),
        )?;

        os.node_availability_zone = ctx.input.text(
            "Availability zone (optional)",
            Some(&os.node_availability_zone),
            Some("Nova availability zone for the node pool"),
        )?;

        os.node_image_name = ctx.input.text(
            "Image name (optional)",
            Some(&os.node_image_name),
            Some("Glance image name for the node pool"),
        )?;

        Ok(())
    }

    fn prompt_review(&self, ctx: &Context, form: &mut ClusterForm) -> Result<()> {
        ctx.output.subsection("Summary");
        ctx.output.key_value("Cluster", &form.name);
        ctx.output.key_value("Base domain", &form.base_domain);
        ctx.output.key_value("Node pool replicas", &form.node_pool_replicas);
        ctx.output.key_value("Node flavor", &form.openstack.node_flavor);
        if !form.openstack.additional_ports.is_empty() {
            ctx.output.key_value(
                "Additional ports",
                &form.openstack.additional_ports.len().to_string(),
            );
        }

        ctx.output.subsection("Generated command");
        ctx.output.code(&self.generate_command(form));
        Ok(())
    }
}
