use super::spec::{HttpMethod, ParamKind as K, ParameterSpec as P, ToolSpec};
use crate::models::{BodyShape, ResponseShape};

pub(super) const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_projects",
        description: "Get your projects.",
        method: HttpMethod::Get,
        path_template: "/projects",
        parameters: &[],
        body_shape: None,
        response_shape: ResponseShape::Projects,
    },
    ToolSpec {
        name: "post_projects",
        description: "Create a project.",
        method: HttpMethod::Post,
        path_template: "/projects",
        parameters: &[
            P::query("name", K::String, "Name of the project.").required(),
            P::query("description", K::String, "The description of the project."),
            P::query(
                "domainId",
                K::String,
                "The id of the domain to use for this project. Defaults to General.",
            ),
            P::query(
                "classificationType",
                K::String,
                "The type of classifier to create for this project.",
            ),
            P::query(
                "targetExportPlatforms",
                K::Array,
                "List of platforms the trained model is intending exporting to.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::Project,
    },
    ToolSpec {
        name: "post_projects_import",
        description: "Imports a project.",
        method: HttpMethod::Post,
        path_template: "/projects/import",
        parameters: &[P::query(
            "token",
            K::String,
            "Token generated from the export project call.",
        )
        .required()],
        body_shape: None,
        response_shape: ResponseShape::Project,
    },
    ToolSpec {
        name: "get_projects_projectId",
        description: "Get a specific project.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}",
        parameters: &[P::path("projectId", "The id of the project to get.")],
        body_shape: None,
        response_shape: ResponseShape::Project,
    },
    ToolSpec {
        name: "patch_projects_projectId",
        description: "Update a specific project.",
        method: HttpMethod::Patch,
        path_template: "/projects/{projectId}",
        parameters: &[
            P::path("projectId", "The id of the project to update."),
            P::body(
                "settings",
                K::Object,
                "Input parameter: Represents settings associated with a project.",
            )
            .required(),
            P::body(
                "description",
                K::String,
                "Input parameter: Gets or sets the description of the project.",
            )
            .required(),
            P::body(
                "lastModified",
                K::String,
                "Input parameter: Gets the date this project was last modified.",
            ),
            P::body("status", K::String, "Input parameter: Gets the status of the project."),
            P::body(
                "thumbnailUri",
                K::String,
                "Input parameter: Gets the thumbnail url representing the image.",
            ),
            P::body(
                "created",
                K::String,
                "Input parameter: Gets the date this project was created.",
            ),
            P::body(
                "name",
                K::String,
                "Input parameter: Gets or sets the name of the project.",
            )
            .required(),
            P::body(
                "drModeEnabled",
                K::Boolean,
                "Input parameter: Gets if the Disaster Recovery (DR) mode is on, indicating the project is temporarily read-only.",
            ),
            P::body("id", K::String, "Input parameter: Gets the project id."),
        ],
        body_shape: Some(BodyShape::Project),
        response_shape: ResponseShape::Project,
    },
    ToolSpec {
        name: "delete_projects_projectId",
        description: "Delete a specific project.",
        method: HttpMethod::Delete,
        path_template: "/projects/{projectId}",
        parameters: &[P::path("projectId", "The project id.")],
        body_shape: None,
        response_shape: ResponseShape::ServiceMessage,
    },
    ToolSpec {
        name: "get_projects_projectId_export",
        description: "Exports a project.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/export",
        parameters: &[P::path("projectId", "The project id of the project to export.")],
        body_shape: None,
        response_shape: ResponseShape::ProjectExport,
    },
    ToolSpec {
        name: "post_projects_projectId_train",
        description: "Queues project for training.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/train",
        parameters: &[
            P::path("projectId", "The project id."),
            P::query(
                "trainingType",
                K::String,
                "The type of training to use to train the project (default: Regular).",
            ),
            P::query(
                "reservedBudgetInHours",
                K::Number,
                "The number of hours reserved as budget for training (if applicable).",
            ),
            P::query(
                "forceTrain",
                K::Boolean,
                "Whether to force train even if dataset and configuration does not change (default: false).",
            ),
            P::query(
                "notificationEmailAddress",
                K::String,
                "The email address to send notification to when training finishes (default: null).",
            ),
            P::body(
                "selectedTags",
                K::Array,
                "Input parameter: List of tags selected for this training session, other tags in the project will be ignored.",
            ),
        ],
        body_shape: Some(BodyShape::TrainingParameters),
        response_shape: ResponseShape::Iteration,
    },
    ToolSpec {
        name: "get_projects_projectId_iterations",
        description: "Get iterations for the project.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/iterations",
        parameters: &[P::path("projectId", "The project id.")],
        body_shape: None,
        response_shape: ResponseShape::Iterations,
    },
    ToolSpec {
        name: "get_projects_projectId_iterations_iterationId",
        description: "Get a specific iteration.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/iterations/{iterationId}",
        parameters: &[
            P::path("projectId", "The id of the project the iteration belongs to."),
            P::path("iterationId", "The id of the iteration to get."),
        ],
        body_shape: None,
        response_shape: ResponseShape::Iteration,
    },
    ToolSpec {
        name: "patch_projects_projectId_iterations_iterationId",
        description: "Update a specific iteration.",
        method: HttpMethod::Patch,
        path_template: "/projects/{projectId}/iterations/{iterationId}",
        parameters: &[
            P::path("projectId", "Project id."),
            P::path("iterationId", "Iteration id."),
            P::body(
                "reservedBudgetInHours",
                K::Number,
                "Input parameter: Gets the reserved advanced training budget for the iteration.",
            ),
            P::body("status", K::String, "Input parameter: Gets the current iteration status."),
            P::body(
                "exportableTo",
                K::Array,
                "Input parameter: A set of platforms this iteration can export to.",
            ),
            P::body(
                "trainingTimeInMinutes",
                K::Number,
                "Input parameter: Gets the training time for the iteration.",
            ),
            P::body(
                "classificationType",
                K::String,
                "Input parameter: Gets the classification type of the project.",
            ),
            P::body(
                "originalPublishResourceId",
                K::String,
                "Input parameter: Resource Provider Id this iteration was originally published to.",
            ),
            P::body(
                "created",
                K::String,
                "Input parameter: Gets the time this iteration was completed.",
            ),
            P::body("publishName", K::String, "Input parameter: Name of the published model."),
            P::body("id", K::String, "Input parameter: Gets the id of the iteration."),
            P::body(
                "domainId",
                K::String,
                "Input parameter: Get or sets a guid of the domain the iteration has been trained on.",
            ),
            P::body(
                "exportable",
                K::Boolean,
                "Input parameter: Whether the iteration can be exported to another format for download.",
            ),
            P::body(
                "trainedAt",
                K::String,
                "Input parameter: Gets the time this iteration was last modified.",
            ),
            P::body(
                "lastModified",
                K::String,
                "Input parameter: Gets the time this iteration was last modified.",
            ),
            P::body(
                "name",
                K::String,
                "Input parameter: Gets or sets the name of the iteration.",
            )
            .required(),
            P::body(
                "trainingType",
                K::String,
                "Input parameter: Gets the training type of the iteration.",
            ),
        ],
        body_shape: Some(BodyShape::Iteration),
        response_shape: ResponseShape::Iteration,
    },
    ToolSpec {
        name: "delete_projects_projectId_iterations_iterationId",
        description: "Delete a specific iteration of a project.",
        method: HttpMethod::Delete,
        path_template: "/projects/{projectId}/iterations/{iterationId}",
        parameters: &[
            P::path("projectId", "The project id."),
            P::path("iterationId", "The iteration id."),
        ],
        body_shape: None,
        response_shape: ResponseShape::ServiceMessage,
    },
    ToolSpec {
        name: "post_projects_projectId_iterations_iterationId_publish",
        description: "Publish a specific iteration.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/iterations/{iterationId}/publish",
        parameters: &[
            P::path("projectId", "The project id."),
            P::path("iterationId", "The iteration id."),
            P::query(
                "publishName",
                K::String,
                "The name to give the published iteration.",
            )
            .required(),
            P::query(
                "predictionId",
                K::String,
                "The id of the prediction resource to publish to.",
            )
            .required(),
        ],
        body_shape: None,
        response_shape: ResponseShape::Flag,
    },
    ToolSpec {
        name: "delete_projects_projectId_iterations_iterationId_publish",
        description: "Unpublish a specific iteration.",
        method: HttpMethod::Delete,
        path_template: "/projects/{projectId}/iterations/{iterationId}/publish",
        parameters: &[
            P::path("projectId", "The project id."),
            P::path("iterationId", "The iteration id."),
        ],
        body_shape: None,
        response_shape: ResponseShape::ServiceMessage,
    },
    ToolSpec {
        name: "get_projects_projectId_iterations_iterationId_export",
        description: "Get the list of exports for a specific iteration.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/iterations/{iterationId}/export",
        parameters: &[
            P::path("projectId", "The project id."),
            P::path("iterationId", "The iteration id."),
        ],
        body_shape: None,
        response_shape: ResponseShape::Exports,
    },
    ToolSpec {
        name: "post_projects_projectId_iterations_iterationId_export",
        description: "Export a trained iteration.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/iterations/{iterationId}/export",
        parameters: &[
            P::path("projectId", "The project id."),
            P::path("iterationId", "The iteration id."),
            P::query("platform", K::String, "The target platform.").required(),
            P::query(
                "flavor",
                K::String,
                "The flavor of the target platform.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::Export,
    },
    ToolSpec {
        name: "get_projects_projectId_iterations_iterationId_performance",
        description: "Get detailed performance information about an iteration.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/iterations/{iterationId}/performance",
        parameters: &[
            P::path("projectId", "The id of the project the iteration belongs to."),
            P::path("iterationId", "The id of the iteration to get."),
            P::query(
                "threshold",
                K::String,
                "The threshold used to determine true predictions.",
            ),
            P::query(
                "overlapThreshold",
                K::String,
                "If applicable, the bounding box overlap threshold used to determine true predictions.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::IterationPerformance,
    },
    ToolSpec {
        name: "get_projects_projectId_iterations_iterationId_performance_images",
        description: "Get image with its prediction for a given project iteration.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/iterations/{iterationId}/performance/images",
        parameters: &[
            P::path("projectId", "The project id."),
            P::path("iterationId", "The iteration id. Defaults to workspace."),
            P::query(
                "tagIds",
                K::Array,
                "A list of tags ids to filter the images. Defaults to all tagged images when null. Limited to 20.",
            ),
            P::query("orderBy", K::String, "The ordering. Defaults to newest."),
            P::query(
                "take",
                K::Number,
                "Maximum number of images to return. Defaults to 50, limited to 256.",
            ),
            P::query(
                "skip",
                K::Number,
                "Number of images to skip before beginning the image batch. Defaults to 0.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::ImagePerformances,
    },
    ToolSpec {
        name: "get_projects_projectId_iterations_iterationId_performance_images_count",
        description: "Gets the number of images tagged with the provided {tagIds} that have prediction results from training for the provided iteration {iterationId}.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/iterations/{iterationId}/performance/images/count",
        parameters: &[
            P::path("projectId", "The project id."),
            P::path("iterationId", "The iteration id. Defaults to workspace."),
            P::query(
                "tagIds",
                K::Array,
                "A list of tags ids to filter the images to count. Defaults to all tags when null.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::Count,
    },
];
