//! The answer record accumulated over one assistant session.
//!
//! `ClusterForm` holds the answers common to every platform plus a
//! platform-conditional section per supported platform (only OpenStack
//! today). Values are kept exactly as entered; validation is the step
//! gates' job and nothing here rejects input.

use anyhow::Result;

/// One additional network port to attach to worker nodes.
///
/// Only `network_id` is required for the port to make it into the
/// generated command; entries with an empty network id stay editable but
/// are skipped at serialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSpec {
    pub network_id: String,
    pub vnic_type: String,
    /// Free-form `ip_address=mac_address` list
    pub address_pairs: String,
    pub disable_port_security: bool,
}

impl PortSpec {
    /// Whether this port carries enough data to be emitted
    pub fn is_complete(&self) -> bool {
        !self.network_id.trim().is_empty()
    }

    /// The comma-joined `key:value` list used by the repeatable
    /// `--openstack-node-additional-port` flag. Optional attributes are
    /// appended only when non-empty; values are emitted as entered.
    pub fn flag_value(&self) -> String {
        let mut value = format!("network-id:{}", self.network_id);
        if !self.vnic_type.trim().is_empty() {
            value.push_str(&format!(",vnic-type:{}", self.vnic_type));
        }
        if !self.address_pairs.trim().is_empty() {
            value.push_str(&format!(",address-pairs:{}", self.address_pairs));
        }
        if self.disable_port_security {
            value.push_str(",disable-port-security:true");
        }
        value
    }

    /// Parse the `key:value[,key:value...]` syntax accepted by
    /// `--additional-port`, the inverse of [`PortSpec::flag_value`].
    ///
    /// Address-pair values may themselves contain commas (one per pair)
    /// and colons (MAC addresses), so a segment that does not start with
    /// a known key continues the preceding address-pairs value.
    pub fn parse(input: &str) -> Result<PortSpec> {
        let mut port = PortSpec::default();
        let mut in_address_pairs = false;

        for segment in input.split(',') {
            let recognized = segment
                .split_once(':')
                .filter(|(key, _)| {
                    matches!(
                        *key,
                        "network-id" | "vnic-type" | "address-pairs" | "disable-port-security"
                    )
                });

            match recognized {
                Some(("network-id", value)) => {
                    port.network_id = value.to_string();
                    in_address_pairs = false;
                }
                Some(("vnic-type", value)) => {
                    port.vnic_type = value.to_string();
                    in_address_pairs = false;
                }
                Some(("address-pairs", value)) => {
                    port.address_pairs = value.to_string();
                    in_address_pairs = true;
                }
                Some(("disable-port-security", value)) => {
                    port.disable_port_security = match value {
                        "true" => true,
                        "false" => false,
                        other => anyhow::bail!(
                            "disable-port-security must be true or false, got '{}'",
                            other
                        ),
                    };
                    in_address_pairs = false;
                }
                Some(_) => unreachable!("filter guarantees a known key"),
                None if in_address_pairs => {
                    port.address_pairs.push(',');
                    port.address_pairs.push_str(segment);
                }
                None => anyhow::bail!(
                    "unrecognized port attribute '{}' (expected network-id, vnic-type, address-pairs or disable-port-security)",
                    segment
                ),
            }
        }

        Ok(port)
    }
}

/// OpenStack-specific answers, filled in once that platform is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenStackForm {
    /// Credentials are available from the environment (OS_CLOUD)
    pub os_cloud_set: bool,
    pub credentials_file: String,
    pub ca_cert_file: String,
    pub cloud: String,
    pub external_network_id: String,
    pub ingress_floating_ip: String,
    /// Comma-separated list, passed through verbatim
    pub dns_nameservers: String,
    pub node_flavor: String,
    pub node_availability_zone: String,
    pub node_image_name: String,
    pub additional_ports: Vec<PortSpec>,
}

impl Default for OpenStackForm {
    fn default() -> Self {
        Self {
            os_cloud_set: true,
            credentials_file: String::new(),
            ca_cert_file: String::new(),
            cloud: String::new(),
            external_network_id: String::new(),
            ingress_floating_ip: String::new(),
            dns_nameservers: String::new(),
            node_flavor: String::new(),
            node_availability_zone: String::new(),
            node_image_name: String::new(),
            additional_ports: Vec::new(),
        }
    }
}

impl OpenStackForm {
    /// Append a fresh port entry with everything left to fill in
    pub fn add_port(&mut self) {
        self.additional_ports.push(PortSpec::default());
    }

    /// Mutable access to one port entry; None when the index is stale
    pub fn port_mut(&mut self, index: usize) -> Option<&mut PortSpec> {
        self.additional_ports.get_mut(index)
    }

    /// Remove one port entry, keeping the order of the rest. A stale
    /// index is ignored rather than panicking.
    pub fn remove_port(&mut self, index: usize) {
        if index < self.additional_ports.len() {
            self.additional_ports.remove(index);
        }
    }
}

/// The accumulated user input for one assistant session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterForm {
    pub name: String,
    pub base_domain: String,
    /// Kept as text; only non-emptiness is checked
    pub node_pool_replicas: String,
    pub pull_secret: String,
    pub ssh_key: String,
    /// None until the platform selection step
    pub platform: Option<String>,
    pub openstack: OpenStackForm,
}

impl ClusterForm {
    /// Whether every platform-independent required field has a value
    pub fn has_cluster_details(&self) -> bool {
        [
            &self.name,
            &self.base_domain,
            &self.node_pool_replicas,
            &self.pull_secret,
            &self.ssh_key,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_value_network_id_only() {
        let port = PortSpec {
            network_id: "net-1".to_string(),
            ..Default::default()
        };
        assert_eq!(port.flag_value(), "network-id:net-1");
    }

    #[test]
    fn test_flag_value_all_attributes() {
        let port = PortSpec {
            network_id: "net-1".to_string(),
            vnic_type: "direct".to_string(),
            address_pairs: "192.168.1.5=fa:16:3e:aa:bb:cc".to_string(),
            disable_port_security: true,
        };
        assert_eq!(
            port.flag_value(),
            "network-id:net-1,vnic-type:direct,address-pairs:192.168.1.5=fa:16:3e:aa:bb:cc,disable-port-security:true"
        );
    }

    #[test]
    fn test_flag_value_skips_blank_optional_attributes() {
        let port = PortSpec {
            network_id: "net-1".to_string(),
            vnic_type: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(port.flag_value(), "network-id:net-1");
    }

    #[test]
    fn test_parse_round_trips_flag_value() {
        let original = PortSpec {
            network_id: "net-1".to_string(),
            vnic_type: "normal".to_string(),
            address_pairs: "10.0.0.7=de:ad:be:ef:00:01".to_string(),
            disable_port_security: true,
        };
        let parsed = PortSpec::parse(&original.flag_value()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_address_pairs_with_commas_and_macs() {
        let parsed = PortSpec::parse(
            "network-id:net-1,address-pairs:10.0.0.7=de:ad:be:ef:00:01,10.0.0.8=de:ad:be:ef:00:02",
        )
        .unwrap();
        assert_eq!(parsed.network_id, "net-1");
        assert_eq!(
            parsed.address_pairs,
            "10.0.0.7=de:ad:be:ef:00:01,10.0.0.8=de:ad:be:ef:00:02"
        );
    }

    #[test]
    fn test_parse_rejects_unknown_attribute() {
        let result = PortSpec::parse("network-id:net-1,mtu:9000");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("mtu:9000"));
    }

    #[test]
    fn test_parse_rejects_bad_boolean() {
        let result = PortSpec::parse("network-id:net-1,disable-port-security:yes");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_without_network_id_is_structurally_accepted() {
        // The validity gate rejects it later; parsing itself does not.
        let parsed = PortSpec::parse("vnic-type:direct").unwrap();
        assert!(!parsed.is_complete());
        assert_eq!(parsed.vnic_type, "direct");
    }

    #[test]
    fn test_add_then_remove_port_restores_list() {
        let mut os = OpenStackForm::default();
        os.add_port();
        os.port_mut(0).unwrap().network_id = "net-1".to_string();
        os.add_port();
        os.port_mut(1).unwrap().network_id = "net-2".to_string();

        let before = os.additional_ports.clone();
        os.add_port();
        os.remove_port(2);
        assert_eq!(os.additional_ports, before);
    }

    #[test]
    fn test_remove_port_keeps_order() {
        let mut os = OpenStackForm::default();
        for id in ["net-1", "net-2", "net-3"] {
            os.add_port();
            os.additional_ports.last_mut().unwrap().network_id = id.to_string();
        }
        os.remove_port(1);
        let ids: Vec<&str> = os
            .additional_ports
            .iter()
            .map(|p| p.network_id.as_str())
            .collect();
        assert_eq!(ids, vec!["net-1", "net-3"]);
    }

    #[test]
    fn test_remove_port_tolerates_stale_index() {
        let mut os = OpenStackForm::default();
        os.add_port();
        os.remove_port(5);
        assert_eq!(os.additional_ports.len(), 1);
    }

    #[test]
    fn test_has_cluster_details_requires_all_fields() {
        let mut form = ClusterForm {
            name: "test".to_string(),
            base_domain: "mydomain.com".to_string(),
            node_pool_replicas: "2".to_string(),
            pull_secret: "/ps".to_string(),
            ssh_key: "/key.pub".to_string(),
            ..Default::default()
        };
        assert!(form.has_cluster_details());

        form.pull_secret = "   ".to_string();
        assert!(!form.has_cluster_details());
    }
}
