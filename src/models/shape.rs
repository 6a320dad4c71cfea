use super::*;
use crate::errors::ToolError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A decoded, typed response value that can still be rendered generically.
pub trait TypedPayload: fmt::Debug + Send + Sync {
    fn to_pretty_json(&self) -> serde_json::Result<String>;
    fn to_json_value(&self) -> serde_json::Result<Value>;
}

impl<T> TypedPayload for T
where
    T: Serialize + fmt::Debug + Send + Sync,
{
    fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn to_json_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    Project,
    Iteration,
    Tag,
    TrainingParameters,
    ImageUrl,
    ImageUrlCreateBatch,
    ImageFileCreateBatch,
    ImageIdCreateBatch,
    ImageRegionCreateBatch,
    ImageTagCreateBatch,
    PredictionQueryToken,
    SuggestedTagAndRegionQueryToken,
    TagFilter,
}

impl BodyShape {
    pub fn name(self) -> &'static str {
        match self {
            BodyShape::Project => "Project",
            BodyShape::Iteration => "Iteration",
            BodyShape::Tag => "Tag",
            BodyShape::TrainingParameters => "TrainingParameters",
            BodyShape::ImageUrl => "ImageUrl",
            BodyShape::ImageUrlCreateBatch => "ImageUrlCreateBatch",
            BodyShape::ImageFileCreateBatch => "ImageFileCreateBatch",
            BodyShape::ImageIdCreateBatch => "ImageIdCreateBatch",
            BodyShape::ImageRegionCreateBatch => "ImageRegionCreateBatch",
            BodyShape::ImageTagCreateBatch => "ImageTagCreateBatch",
            BodyShape::PredictionQueryToken => "PredictionQueryToken",
            BodyShape::SuggestedTagAndRegionQueryToken => "SuggestedTagAndRegionQueryToken",
            BodyShape::TagFilter => "TagFilter",
        }
    }

    /// Decodes the whole argument mapping into this shape and re-encodes it.
    /// Keys the shape does not know are dropped.
    pub fn encode(self, args: &Map<String, Value>) -> Result<Vec<u8>, ToolError> {
        match self {
            BodyShape::Project => reencode::<Project>(args),
            BodyShape::Iteration => reencode::<Iteration>(args),
            BodyShape::Tag => reencode::<Tag>(args),
            BodyShape::TrainingParameters => reencode::<TrainingParameters>(args),
            BodyShape::ImageUrl => reencode::<ImageUrl>(args),
            BodyShape::ImageUrlCreateBatch => reencode::<ImageUrlCreateBatch>(args),
            BodyShape::ImageFileCreateBatch => reencode::<ImageFileCreateBatch>(args),
            BodyShape::ImageIdCreateBatch => reencode::<ImageIdCreateBatch>(args),
            BodyShape::ImageRegionCreateBatch => reencode::<ImageRegionCreateBatch>(args),
            BodyShape::ImageTagCreateBatch => reencode::<ImageTagCreateBatch>(args),
            BodyShape::PredictionQueryToken => reencode::<PredictionQueryToken>(args),
            BodyShape::SuggestedTagAndRegionQueryToken => {
                reencode::<SuggestedTagAndRegionQueryToken>(args)
            }
            BodyShape::TagFilter => reencode::<TagFilter>(args),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Project,
    Projects,
    ProjectExport,
    Iteration,
    Iterations,
    IterationPerformance,
    Export,
    Exports,
    Domain,
    Domains,
    Tag,
    Tags,
    Images,
    ImagePerformances,
    ImageCreateSummary,
    ImageRegionCreateSummary,
    ImageTagCreateSummary,
    ImageRegionProposal,
    ImagePrediction,
    PredictionQueryResult,
    SuggestedTagsAndRegions,
    SuggestedTagAndRegionQuery,
    Count,
    CountByTag,
    Flag,
    /// The service's `{code, message}` record. Deletes answer with it, or with
    /// nothing at all.
    ServiceMessage,
}

impl ResponseShape {
    pub fn decode(self, raw: &[u8]) -> serde_json::Result<Box<dyn TypedPayload>> {
        match self {
            ResponseShape::Project => decode_as::<Project>(raw),
            ResponseShape::Projects => decode_as::<Vec<Project>>(raw),
            ResponseShape::ProjectExport => decode_as::<ProjectExport>(raw),
            ResponseShape::Iteration => decode_as::<Iteration>(raw),
            ResponseShape::Iterations => decode_as::<Vec<Iteration>>(raw),
            ResponseShape::IterationPerformance => decode_as::<IterationPerformance>(raw),
            ResponseShape::Export => decode_as::<Export>(raw),
            ResponseShape::Exports => decode_as::<Vec<Export>>(raw),
            ResponseShape::Domain => decode_as::<Domain>(raw),
            ResponseShape::Domains => decode_as::<Vec<Domain>>(raw),
            ResponseShape::Tag => decode_as::<Tag>(raw),
            ResponseShape::Tags => decode_as::<Vec<Tag>>(raw),
            ResponseShape::Images => decode_as::<Vec<Image>>(raw),
            ResponseShape::ImagePerformances => decode_as::<Vec<ImagePerformance>>(raw),
            ResponseShape::ImageCreateSummary => decode_as::<ImageCreateSummary>(raw),
            ResponseShape::ImageRegionCreateSummary => decode_as::<ImageRegionCreateSummary>(raw),
            ResponseShape::ImageTagCreateSummary => decode_as::<ImageTagCreateSummary>(raw),
            ResponseShape::ImageRegionProposal => decode_as::<ImageRegionProposal>(raw),
            ResponseShape::ImagePrediction => decode_as::<ImagePrediction>(raw),
            ResponseShape::PredictionQueryResult => decode_as::<PredictionQueryResult>(raw),
            ResponseShape::SuggestedTagsAndRegions => {
                decode_as::<Vec<SuggestedTagAndRegion>>(raw)
            }
            ResponseShape::SuggestedTagAndRegionQuery => {
                decode_as::<SuggestedTagAndRegionQuery>(raw)
            }
            ResponseShape::Count => decode_as::<i64>(raw),
            ResponseShape::CountByTag => decode_as::<BTreeMap<String, i64>>(raw),
            ResponseShape::Flag => decode_as::<bool>(raw),
            ResponseShape::ServiceMessage => decode_as::<CustomVisionError>(raw),
        }
    }
}

fn decode_as<T>(raw: &[u8]) -> serde_json::Result<Box<dyn TypedPayload>>
where
    T: DeserializeOwned + TypedPayload + 'static,
{
    let value: T = serde_json::from_slice(raw)?;
    Ok(Box::new(value))
}

fn reencode<T>(args: &Map<String, Value>) -> Result<Vec<u8>, ToolError>
where
    T: DeserializeOwned + Serialize,
{
    let typed: T = serde_json::from_value(Value::Object(args.clone())).map_err(|err| {
        let field = offending_field::<T>(args);
        let detail = match field.as_deref() {
            Some(field) => format!("field `{}`: {}", field, err),
            None => err.to_string(),
        };
        ToolError::serialization(format!(
            "Failed to convert arguments to request type: {}",
            detail
        ))
        .with_details(serde_json::json!({ "field": field }))
    })?;
    serde_json::to_vec(&typed).map_err(|err| {
        ToolError::serialization(format!("Failed to encode request body: {}", err))
    })
}

// Every shape field is optional or defaulted, so a single-key object only fails
// to decode when that key carries a value of the wrong type.
fn offending_field<T: DeserializeOwned>(args: &Map<String, Value>) -> Option<String> {
    args.iter()
        .find(|(key, value)| {
            let mut single = Map::new();
            single.insert((*key).clone(), (*value).clone());
            serde_json::from_value::<T>(Value::Object(single)).is_err()
        })
        .map(|(key, _)| key.clone())
}
