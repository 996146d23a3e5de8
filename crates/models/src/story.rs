//! Short video stories on the home screen.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::localized::{from_json_opt, to_json_opt, LocalizedText};
use crate::resource::{require_id, BatchPolicy, IdStrategy, Resource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub title: Option<Json>,
    pub video_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Story {
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub title: Option<LocalizedText>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Resource for Entity {
    type Record = Story;

    const NAME: &'static str = "stories";
    const LABEL: &'static str = "Stories";
    const BATCH_POLICY: BatchPolicy = BatchPolicy::DestructiveReplace;
    const ID_STRATEGY: IdStrategy = IdStrategy::CallerSupplied;

    fn into_active_model(r: Story) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: Set(require_id(r.id)?),
            category: Set(r.category),
            image_url: Set(r.image_url),
            title: Set(to_json_opt("title", r.title.as_ref())?),
            video_url: Set(r.video_url),
        })
    }

    fn to_record(m: Model) -> Result<Story, ModelError> {
        Ok(Story {
            id: m.id,
            category: m.category,
            image_url: m.image_url,
            title: from_json_opt("title", m.title)?,
            video_url: m.video_url,
        })
    }
}
