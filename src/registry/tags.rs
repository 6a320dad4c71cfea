use super::spec::{HttpMethod, ParamKind as K, ParameterSpec as P, ToolSpec};
use crate::models::{BodyShape, ResponseShape};

pub(super) const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_projects_projectId_tags",
        description: "Get the tags for a given project and iteration.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/tags",
        parameters: &[
            P::path("projectId", "The project id."),
            P::query(
                "iterationId",
                K::String,
                "The iteration id. Defaults to workspace.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::Tags,
    },
    ToolSpec {
        name: "post_projects_projectId_tags",
        description: "Create a tag for the project.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/tags",
        parameters: &[
            P::path("projectId", "The project id."),
            P::query("name", K::String, "The tag name.").required(),
            P::query("description", K::String, "Optional description for the tag."),
            P::query("type", K::String, "Optional type for the tag."),
        ],
        body_shape: None,
        response_shape: ResponseShape::Tag,
    },
    ToolSpec {
        name: "get_projects_projectId_tags_tagId",
        description: "Get information about a specific tag.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/tags/{tagId}",
        parameters: &[
            P::path("projectId", "The project this tag belongs to."),
            P::path("tagId", "The tag id."),
            P::query(
                "iterationId",
                K::String,
                "The iteration to retrieve this tag from. Optional, defaults to current training set.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::Tag,
    },
    ToolSpec {
        name: "patch_projects_projectId_tags_tagId",
        description: "Update a tag.",
        method: HttpMethod::Patch,
        path_template: "/projects/{projectId}/tags/{tagId}",
        parameters: &[
            P::path("projectId", "The project id."),
            P::path("tagId", "The id of the target tag."),
            P::body(
                "description",
                K::String,
                "Input parameter: Gets or sets the description of the tag.",
            )
            .required(),
            P::body("id", K::String, "Input parameter: Gets the Tag ID."),
            P::body(
                "imageCount",
                K::Number,
                "Input parameter: Gets the number of images with this tag.",
            ),
            P::body(
                "name",
                K::String,
                "Input parameter: Gets or sets the name of the tag.",
            )
            .required(),
            P::body(
                "type",
                K::String,
                "Input parameter: Gets or sets the type of the tag.",
            )
            .required(),
        ],
        body_shape: Some(BodyShape::Tag),
        response_shape: ResponseShape::Tag,
    },
    ToolSpec {
        name: "delete_projects_projectId_tags_tagId",
        description: "Delete a tag from the project.",
        method: HttpMethod::Delete,
        path_template: "/projects/{projectId}/tags/{tagId}",
        parameters: &[
            P::path("projectId", "The project id."),
            P::path("tagId", "Id of the tag to be deleted."),
        ],
        body_shape: None,
        response_shape: ResponseShape::ServiceMessage,
    },
];
