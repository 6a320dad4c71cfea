use super::spec::{HttpMethod, ParamKind as K, ParameterSpec as P, ToolSpec};
use crate::models::{BodyShape, ResponseShape};

const PROJECT: P = P::path("projectId", "The project id.");

const IMAGE_BATCH_TAG_IDS: P = P::body(
    "tagIds",
    K::Array,
    "Input parameter: Tag ids applied to every image in the batch.",
);

pub(super) const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "get_projects_projectId_images_id",
        description: "Get images by id for a given project iteration.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/images/id",
        parameters: &[
            PROJECT,
            P::query(
                "imageIds",
                K::Array,
                "The list of image ids to retrieve. Limited to 256.",
            ),
            P::query(
                "iterationId",
                K::String,
                "The iteration id. Defaults to workspace.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::Images,
    },
    ToolSpec {
        name: "delete_projects_projectId_images",
        description: "Delete images from the set of training images.",
        method: HttpMethod::Delete,
        path_template: "/projects/{projectId}/images",
        parameters: &[
            PROJECT,
            P::query(
                "imageIds",
                K::Array,
                "Ids of the images to be deleted. Limited to 256 images per batch.",
            ),
            P::query(
                "allImages",
                K::Boolean,
                "Flag to specify delete all images, specify this flag or a list of images. Using this flag will return a 202 response to indicate the images are being deleted.",
            ),
            P::query(
                "allIterations",
                K::Boolean,
                "Removes these images from all iterations, not just the current workspace. Using this flag will return a 202 response to indicate the images are being deleted.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::ServiceMessage,
    },
    ToolSpec {
        name: "post_projects_projectId_images_files",
        description: "Add the provided batch of images to the set of training images.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/images/files",
        parameters: &[
            PROJECT,
            P::body(
                "images",
                K::Array,
                "Input parameter: Images with base64 contents, optional tag ids and regions.",
            ),
            IMAGE_BATCH_TAG_IDS,
        ],
        body_shape: Some(BodyShape::ImageFileCreateBatch),
        response_shape: ResponseShape::ImageCreateSummary,
    },
    ToolSpec {
        name: "post_projects_projectId_images_urls",
        description: "Add the provided images urls to the set of training images.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/images/urls",
        parameters: &[
            PROJECT,
            P::body(
                "images",
                K::Array,
                "Input parameter: Image urls with optional tag ids and regions.",
            ),
            IMAGE_BATCH_TAG_IDS,
        ],
        body_shape: Some(BodyShape::ImageUrlCreateBatch),
        response_shape: ResponseShape::ImageCreateSummary,
    },
    ToolSpec {
        name: "post_projects_projectId_images_predictions",
        description: "Add the specified predicted images to the set of training images.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/images/predictions",
        parameters: &[
            PROJECT,
            P::body(
                "images",
                K::Array,
                "Input parameter: Stored prediction image ids with optional tag ids and regions.",
            ),
            IMAGE_BATCH_TAG_IDS,
        ],
        body_shape: Some(BodyShape::ImageIdCreateBatch),
        response_shape: ResponseShape::ImageCreateSummary,
    },
    ToolSpec {
        name: "post_projects_projectId_images_regions",
        description: "Create a set of image regions.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/images/regions",
        parameters: &[
            PROJECT,
            P::body(
                "regions",
                K::Array,
                "Input parameter: Regions to create, each with imageId, tagId, left, top, width and height.",
            ),
        ],
        body_shape: Some(BodyShape::ImageRegionCreateBatch),
        response_shape: ResponseShape::ImageRegionCreateSummary,
    },
    ToolSpec {
        name: "delete_projects_projectId_images_regions",
        description: "Delete a set of image regions.",
        method: HttpMethod::Delete,
        path_template: "/projects/{projectId}/images/regions",
        parameters: &[
            PROJECT,
            P::query(
                "regionIds",
                K::Array,
                "Regions to delete. Limited to 64.",
            )
            .required(),
        ],
        body_shape: None,
        response_shape: ResponseShape::ServiceMessage,
    },
    ToolSpec {
        name: "post_projects_projectId_images_tags",
        description: "Associate a set of images with a set of tags.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/images/tags",
        parameters: &[
            PROJECT,
            P::body(
                "tags",
                K::Array,
                "Input parameter: Image and tag id pairs. Limited to 128 per batch.",
            ),
        ],
        body_shape: Some(BodyShape::ImageTagCreateBatch),
        response_shape: ResponseShape::ImageTagCreateSummary,
    },
    ToolSpec {
        name: "delete_projects_projectId_images_tags",
        description: "Remove a set of tags from a set of images.",
        method: HttpMethod::Delete,
        path_template: "/projects/{projectId}/images/tags",
        parameters: &[
            PROJECT,
            P::query(
                "imageIds",
                K::Array,
                "Image ids. Limited to 64 images.",
            )
            .required(),
            P::query(
                "tagIds",
                K::Array,
                "Tags to be deleted from the specified images. Limited to 20 tags.",
            )
            .required(),
        ],
        body_shape: None,
        response_shape: ResponseShape::ServiceMessage,
    },
    ToolSpec {
        name: "get_projects_projectId_images_tagged",
        description: "Get tagged images for a given project iteration.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/images/tagged",
        parameters: &[
            PROJECT,
            P::query(
                "iterationId",
                K::String,
                "The iteration id. Defaults to workspace.",
            ),
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
        response_shape: ResponseShape::Images,
    },
    ToolSpec {
        name: "get_projects_projectId_images_tagged_count",
        description: "Gets the number of images tagged with the provided {tagIds}.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/images/tagged/count",
        parameters: &[
            PROJECT,
            P::query(
                "iterationId",
                K::String,
                "The iteration id. Defaults to workspace.",
            ),
            P::query(
                "tagIds",
                K::Array,
                "A list of tags ids to filter the images to count. Defaults to all tags when null.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::Count,
    },
    ToolSpec {
        name: "get_projects_projectId_images_untagged",
        description: "Get untagged images for a given project iteration.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/images/untagged",
        parameters: &[
            PROJECT,
            P::query(
                "iterationId",
                K::String,
                "The iteration id. Defaults to workspace.",
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
        response_shape: ResponseShape::Images,
    },
    ToolSpec {
        name: "get_projects_projectId_images_untagged_count",
        description: "Gets the number of untagged images.",
        method: HttpMethod::Get,
        path_template: "/projects/{projectId}/images/untagged/count",
        parameters: &[
            PROJECT,
            P::query(
                "iterationId",
                K::String,
                "The iteration id. Defaults to workspace.",
            ),
        ],
        body_shape: None,
        response_shape: ResponseShape::Count,
    },
    ToolSpec {
        name: "post_projects_projectId_images_imageId_regionproposals",
        description: "Get region proposals for an image. Returns empty array if no proposals are found.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/images/{imageId}/regionproposals",
        parameters: &[PROJECT, P::path("imageId", "The image id.")],
        body_shape: None,
        response_shape: ResponseShape::ImageRegionProposal,
    },
    ToolSpec {
        name: "post_projects_projectId_tagsandregions_suggestions",
        description: "Suggest tags and regions for an array/batch of untagged images. Returns empty array if no tags are found.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/tagsandregions/suggestions",
        parameters: &[
            PROJECT,
            P::query(
                "iterationId",
                K::String,
                "IterationId to use for tag and region suggestion.",
            )
            .required(),
            P::query(
                "imageIds",
                K::Array,
                "Array of image ids tag suggestion are needed for. Use GetUntaggedImages API to get imageIds.",
            )
            .required(),
        ],
        body_shape: None,
        response_shape: ResponseShape::SuggestedTagsAndRegions,
    },
    ToolSpec {
        name: "post_projects_projectId_images_suggested",
        description: "Get untagged images whose suggested tags match given tags. Returns empty array if no images are found.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/images/suggested",
        parameters: &[
            PROJECT,
            P::query(
                "iterationId",
                K::String,
                "IterationId to use for the suggested tags and regions.",
            )
            .required(),
            P::body(
                "tagIds",
                K::Array,
                "Input parameter: Existing TagIds in project to filter suggested tags on.",
            ),
            P::body(
                "threshold",
                K::Number,
                "Input parameter: Confidence threshold to filter suggested tags on.",
            ),
            P::body(
                "session",
                K::String,
                "Input parameter: SessionId for database query. Initially set to null but later used to paginate.",
            ),
            P::body(
                "continuation",
                K::String,
                "Input parameter: Continuation Id for database pagination. Initially null but later used to paginate.",
            ),
            P::body(
                "maxCount",
                K::Number,
                "Input parameter: Maximum number of results you want to be returned in the response.",
            ),
            P::body(
                "sortBy",
                K::String,
                "Input parameter: OrderBy. Ordering mechanism for your results.",
            ),
        ],
        body_shape: Some(BodyShape::SuggestedTagAndRegionQueryToken),
        response_shape: ResponseShape::SuggestedTagAndRegionQuery,
    },
    ToolSpec {
        name: "post_projects_projectId_images_suggested_count",
        description: "Get count of images whose suggested tags match given tags and their probabilities are greater than or equal to the given threshold. Returns count as 0 if none found.",
        method: HttpMethod::Post,
        path_template: "/projects/{projectId}/images/suggested/count",
        parameters: &[
            PROJECT,
            P::query(
                "iterationId",
                K::String,
                "IterationId to use for the suggested tags and regions.",
            )
            .required(),
            P::body(
                "tagIds",
                K::Array,
                "Input parameter: Existing TagIds in project to get suggested tags count for.",
            ),
            P::body(
                "threshold",
                K::Number,
                "Input parameter: Confidence threshold to filter suggested tags on.",
            ),
        ],
        body_shape: Some(BodyShape::TagFilter),
        response_shape: ResponseShape::CountByTag,
    },
];
