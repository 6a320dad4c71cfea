use super::spec::{HttpMethod, ParamKind as K, ParameterSpec as P, ToolSpec};
use crate::models::{BodyShape, ResponseShape};

pub(super) const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "post_projects_projectId_predictions_query",
        description: "Get images that were sent to your prediction endpoint.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/predictions/query",
        parameters: &[
            P::path("projectId", "The project id."),
            P::body("startTime", K::String, ""),
            P::body("endTime", K::String, ""),
            P::body("session", K::String, ""),
            P::body("tags", K::Array, ""),
            P::body("continuation", K::String, ""),
            P::body("iterationId", K::String, ""),
            P::body("maxCount", K::Number, ""),
            P::body("application", K::String, ""),
            P::body("orderBy", K::String, ""),
        ],
        body_shape: Some(BodyShape::PredictionQueryToken),
        response_shape: ResponseShape::PredictionQueryResult,
    },
    ToolSpec {
        name: "delete_projects_projectId_predictions",
        description: "Delete a set of predicted images and their associated prediction results.",
        method: HttpMethod::Delete,
        path_template: "/projects/{projectId}/predictions",
        parameters: &[
            P::path("projectId", "The project id."),
            P::query(
                "ids",
                K::Array,
                "The prediction ids. Limited to 64.",
            )
            .required(),
        ],
        body_shape: None,
        response_shape: ResponseShape::ServiceMessage,
    },
    ToolSpec {
        name: "post_projects_projectId_quicktest_url",
        description: "Quick test an image url.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/quicktest/url",
        parameters: &[
            P::path("projectId", "The project to evaluate against."),
            P::query(
                "iterationId",
                K::String,
                "Optional. Specifies the id of a particular iteration to evaluate against. The default iteration for the project will be used when not specified.",
            ),
            P::query(
                "store",
                K::Boolean,
                "Optional. Specifies whether or not to store the result of this prediction. The default is true, to store.",
            ),
            P::body("url", K::String, "Input parameter: Url of the image.").required(),
        ],
        body_shape: Some(BodyShape::ImageUrl),
        response_shape: ResponseShape::ImagePrediction,
    },
];
