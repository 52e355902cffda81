use ocm_base::object_type;

object_type! {
    /// Capability granted to an account, organization or subscription.
    resource Capability, CapabilityBuilder {
        kind: "Capability",
        link_kind: "CapabilityLink",
        fields: {
            /// True if the capability comes from the parent resource
            inherited, get_inherited: value bool = "inherited" @ 3,
            /// Name of the capability, e.g. `capability.cluster.subscribed_ocp`
            name, get_name: value String = "name" @ 4,
            /// Value of the capability
            value, get_value: value String = "value" @ 5,
        }
    }
}
