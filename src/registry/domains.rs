use super::spec::{HttpMethod, ParameterSpec as P, ToolSpec};
use crate::models::ResponseShape;

pub(super) const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_domains",
        description: "Get a list of the available domains.",
        method: HttpMethod::Get,
        path_template: "/domains",
        parameters: &[],
        body_shape: None,
        response_shape: ResponseShape::Domains,
    },
    ToolSpec {
        name: "get_domains_domainId",
        description: "Get information about a specific domain.",
        method: HttpMethod::Get,
        path_template: "/domains/{domainId}",
        parameters: &[P::path(
            "domainId",
            "The id of the domain to get information about.",
        )],
        body_shape: None,
        response_shape: ResponseShape::Domain,
    },
];
