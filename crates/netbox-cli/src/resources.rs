//! Registry of the NetBox resources the CLI can address.
//!
//! Every entry names the config key holding its URL suffix and the fields
//! printed for it. Field paths are dotted (`site.name`); a segment that lands
//! on an array applies to each element (`tags.name`).

/// One printed column
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Column header
    pub label: &'static str,
    /// Dotted path into the JSON object
    pub path: &'static str,
}

const fn field(label: &'static str, path: &'static str) -> Field {
    Field { label, path }
}

/// A NetBox API resource
#[derive(Debug)]
pub struct Resource {
    /// Command-line name, e.g. `circuit-terminations`
    pub slug: &'static str,
    /// Human singular, e.g. `circuit termination`
    pub singular: &'static str,
    /// Human plural
    pub plural: &'static str,
    /// Dotted config key resolving to the URL suffix
    pub suffix_key: &'static str,
    /// Fields printed for each object
    pub fields: &'static [Field],
}

impl Resource {
    /// `CircuitTermination`
    #[must_use]
    pub fn pascal_singular(&self) -> String {
        pascal(self.singular)
    }

    /// `CircuitTerminations`
    #[must_use]
    pub fn pascal_plural(&self) -> String {
        pascal(self.plural)
    }
}

fn pascal(words: &str) -> String {
    words
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

/// Look up a resource by slug
#[must_use]
pub fn find(slug: &str) -> Option<&'static Resource> {
    RESOURCES.iter().find(|r| r.slug == slug)
}

/// Look up a resource by slug, listing the valid ones on failure
pub fn require(slug: &str) -> anyhow::Result<&'static Resource> {
    find(slug).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown resource: {slug}\n\nKnown resources: {}",
            slugs().collect::<Vec<_>>().join(", ")
        )
    })
}

/// Every registered slug, in registry order
pub fn slugs() -> impl Iterator<Item = &'static str> {
    RESOURCES.iter().map(|r| r.slug)
}

/// All registered resources
pub static RESOURCES: &[Resource] = &[
    // ------------------------------------------------------------------
    // Circuits
    // ------------------------------------------------------------------
    Resource {
        slug: "providers",
        singular: "provider",
        plural: "providers",
        suffix_key: "cmd.circuits.circuits_api_url.providers",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Slug", "slug"),
            field("Circuits", "circuit_count"),
            field("Description", "description"),
        ],
    },
    Resource {
        slug: "circuit-types",
        singular: "circuit type",
        plural: "circuit types",
        suffix_key: "cmd.circuits.circuits_api_url.circuit_types",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Slug", "slug"),
            field("Circuits", "circuit_count"),
            field("Description", "description"),
        ],
    },
    Resource {
        slug: "circuits",
        singular: "circuit",
        plural: "circuits",
        suffix_key: "cmd.circuits.circuits_api_url.circuits",
        fields: &[
            field("ID", "id"),
            field("CID", "cid"),
            field("Provider", "provider.name"),
            field("Type", "type.name"),
            field("Status", "status.label"),
            field("Tenant", "tenant.name"),
            field("Commit Rate (Kbps)", "commit_rate"),
            field("Description", "description"),
        ],
    },
    Resource {
        slug: "circuit-terminations",
        singular: "circuit termination",
        plural: "circuit terminations",
        suffix_key: "cmd.circuits.circuits_api_url.circuit_terminations",
        fields: &[
            field("ID", "id"),
            field("Circuit", "circuit.cid"),
            field("Side", "term_side"),
            field("Termination", "termination.display"),
            field("Port Speed (Kbps)", "port_speed"),
            field("Upstream Speed (Kbps)", "upstream_speed"),
            field("Cross-Connect", "xconnect_id"),
        ],
    },
    // ------------------------------------------------------------------
    // DCIM
    // ------------------------------------------------------------------
    Resource {
        slug: "regions",
        singular: "region",
        plural: "regions",
        suffix_key: "cmd.dcim.dcim_api_url.regions",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Slug", "slug"),
            field("Parent", "parent.name"),
            field("Sites", "site_count"),
        ],
    },
    Resource {
        slug: "sites",
        singular: "site",
        plural: "sites",
        suffix_key: "cmd.dcim.dcim_api_url.sites",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Slug", "slug"),
            field("Status", "status.label"),
            field("Region", "region.name"),
            field("Tenant", "tenant.name"),
            field("Facility", "facility"),
            field("Time Zone", "time_zone"),
            field("Tags", "tags.name"),
        ],
    },
    Resource {
        slug: "locations",
        singular: "location",
        plural: "locations",
        suffix_key: "cmd.dcim.dcim_api_url.locations",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Site", "site.name"),
            field("Parent", "parent.name"),
            field("Status", "status.label"),
        ],
    },
    Resource {
        slug: "racks",
        singular: "rack",
        plural: "racks",
        suffix_key: "cmd.dcim.dcim_api_url.racks",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Site", "site.name"),
            field("Location", "location.name"),
            field("Status", "status.label"),
            field("Role", "role.name"),
            field("Height (U)", "u_height"),
        ],
    },
    Resource {
        slug: "manufacturers",
        singular: "manufacturer",
        plural: "manufacturers",
        suffix_key: "cmd.dcim.dcim_api_url.manufacturers",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Slug", "slug"),
            field("Device Types", "devicetype_count"),
        ],
    },
    Resource {
        slug: "device-types",
        singular: "device type",
        plural: "device types",
        suffix_key: "cmd.dcim.dcim_api_url.device_types",
        fields: &[
            field("ID", "id"),
            field("Manufacturer", "manufacturer.name"),
            field("Model", "model"),
            field("Slug", "slug"),
            field("Part Number", "part_number"),
            field("Height (U)", "u_height"),
            field("Full Depth", "is_full_depth"),
            field("Devices", "device_count"),
        ],
    },
    Resource {
        slug: "device-roles",
        singular: "device role",
        plural: "device roles",
        suffix_key: "cmd.dcim.dcim_api_url.device_roles",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Slug", "slug"),
            field("Color", "color"),
            field("VM Role", "vm_role"),
            field("Devices", "device_count"),
        ],
    },
    Resource {
        slug: "platforms",
        singular: "platform",
        plural: "platforms",
        suffix_key: "cmd.dcim.dcim_api_url.platforms",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Slug", "slug"),
            field("Manufacturer", "manufacturer.name"),
            field("Devices", "device_count"),
        ],
    },
    Resource {
        slug: "devices",
        singular: "device",
        plural: "devices",
        suffix_key: "cmd.dcim.dcim_api_url.devices",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Type", "device_type.model"),
            field("Role", "role.name"),
            field("Site", "site.name"),
            field("Rack", "rack.name"),
            field("Status", "status.label"),
            field("Primary IP", "primary_ip.address"),
            field("Serial", "serial"),
            field("Tags", "tags.name"),
        ],
    },
    Resource {
        slug: "interfaces",
        singular: "interface",
        plural: "interfaces",
        suffix_key: "cmd.dcim.dcim_api_url.interfaces",
        fields: &[
            field("ID", "id"),
            field("Device", "device.name"),
            field("Name", "name"),
            field("Type", "type.label"),
            field("Enabled", "enabled"),
            field("MTU", "mtu"),
            field("MAC Address", "mac_address"),
            field("Description", "description"),
        ],
    },
    Resource {
        slug: "cables",
        singular: "cable",
        plural: "cables",
        suffix_key: "cmd.dcim.dcim_api_url.cables",
        fields: &[
            field("ID", "id"),
            field("Label", "label"),
            field("Type", "type"),
            field("Status", "status.label"),
            field("A Side", "a_terminations.object.display"),
            field("B Side", "b_terminations.object.display"),
            field("Length", "length"),
        ],
    },
    // ------------------------------------------------------------------
    // IPAM
    // ------------------------------------------------------------------
    Resource {
        slug: "aggregates",
        singular: "aggregate",
        plural: "aggregates",
        suffix_key: "cmd.ipam.ipam_api_url.aggregates",
        fields: &[
            field("ID", "id"),
            field("Prefix", "prefix"),
            field("RIR", "rir.name"),
            field("Added", "date_added"),
            field("Description", "description"),
        ],
    },
    Resource {
        slug: "prefixes",
        singular: "prefix",
        plural: "prefixes",
        suffix_key: "cmd.ipam.ipam_api_url.prefixes",
        fields: &[
            field("ID", "id"),
            field("Prefix", "prefix"),
            field("Status", "status.label"),
            field("VRF", "vrf.name"),
            field("VLAN", "vlan.name"),
            field("Role", "role.name"),
            field("Tenant", "tenant.name"),
            field("Description", "description"),
        ],
    },
    Resource {
        slug: "ip-addresses",
        singular: "ip address",
        plural: "ip addresses",
        suffix_key: "cmd.ipam.ipam_api_url.ip_addresses",
        fields: &[
            field("ID", "id"),
            field("Address", "address"),
            field("Status", "status.label"),
            field("VRF", "vrf.name"),
            field("DNS Name", "dns_name"),
            field("Assigned To", "assigned_object.display"),
            field("Tenant", "tenant.name"),
        ],
    },
    Resource {
        slug: "vlans",
        singular: "vlan",
        plural: "vlans",
        suffix_key: "cmd.ipam.ipam_api_url.vlans",
        fields: &[
            field("ID", "id"),
            field("VID", "vid"),
            field("Name", "name"),
            field("Site", "site.name"),
            field("Group", "group.name"),
            field("Status", "status.label"),
        ],
    },
    Resource {
        slug: "vrfs",
        singular: "vrf",
        plural: "vrfs",
        suffix_key: "cmd.ipam.ipam_api_url.vrfs",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("RD", "rd"),
            field("Tenant", "tenant.name"),
            field("Unique", "enforce_unique"),
        ],
    },
    // ------------------------------------------------------------------
    // Tenancy
    // ------------------------------------------------------------------
    Resource {
        slug: "tenant-groups",
        singular: "tenant group",
        plural: "tenant groups",
        suffix_key: "cmd.tenancy.tenancy_api_url.tenant_groups",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Slug", "slug"),
            field("Parent", "parent.name"),
            field("Tenants", "tenant_count"),
        ],
    },
    Resource {
        slug: "tenants",
        singular: "tenant",
        plural: "tenants",
        suffix_key: "cmd.tenancy.tenancy_api_url.tenants",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Slug", "slug"),
            field("Group", "group.name"),
            field("Description", "description"),
        ],
    },
    // ------------------------------------------------------------------
    // Virtualization
    // ------------------------------------------------------------------
    Resource {
        slug: "clusters",
        singular: "cluster",
        plural: "clusters",
        suffix_key: "cmd.virtualization.virtualization_api_url.clusters",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Type", "type.name"),
            field("Group", "group.name"),
            field("Status", "status.label"),
            field("Virtual Machines", "virtualmachine_count"),
        ],
    },
    Resource {
        slug: "virtual-machines",
        singular: "virtual machine",
        plural: "virtual machines",
        suffix_key: "cmd.virtualization.virtualization_api_url.virtual_machines",
        fields: &[
            field("ID", "id"),
            field("Name", "name"),
            field("Status", "status.label"),
            field("Cluster", "cluster.name"),
            field("Role", "role.name"),
            field("vCPUs", "vcpus"),
            field("Memory (MB)", "memory"),
            field("Disk (GB)", "disk"),
            field("Primary IP", "primary_ip.address"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_unique() {
        let slugs: HashSet<_> = slugs().collect();
        assert_eq!(slugs.len(), RESOURCES.len());
    }

    #[test]
    fn test_suffix_keys_well_formed() {
        for resource in RESOURCES {
            let segments: Vec<_> = resource.suffix_key.split('.').collect();
            assert_eq!(segments.len(), 4, "{}", resource.suffix_key);
            assert_eq!(segments[0], "cmd");
            assert_eq!(segments[2], format!("{}_api_url", segments[1]));
            assert_eq!(segments[3], resource.slug.replace('-', "_"));
            assert_eq!(resource.fields[0].path, "id");
        }
    }

    #[test]
    fn test_pascal_names() {
        let termination = find("circuit-terminations").unwrap();
        assert_eq!(termination.pascal_singular(), "CircuitTermination");
        assert_eq!(termination.pascal_plural(), "CircuitTerminations");
        assert_eq!(find("ip-addresses").unwrap().pascal_plural(), "IpAddresses");
    }

    #[test]
    fn test_require_unknown() {
        let err = require("widgets").unwrap_err();
        assert!(err.to_string().contains("Known resources: providers"));
    }
}
