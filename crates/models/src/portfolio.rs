//! Before/after showcase of finished renovations.
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::localized::{from_json_opt, to_json_opt, LocalizedText};
use crate::resource::{BatchPolicy, IdStrategy, Resource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "type")]
    pub kind: Option<String>,
    pub title: Option<Json>,
    pub img_before: Option<String>,
    pub img_after: Option<String>,
    pub area: Option<String>,
    pub term: Option<String>,
    pub cost: Option<String>,
    pub location: Option<String>,
    pub is_new_building: bool,
    pub tags: Option<Json>,
    pub description: Option<Json>,
    pub works_completed: Option<Json>,
    pub budget: Option<String>,
    pub duration: Option<String>,
    pub team: Option<Json>,
    pub materials: Option<Json>,
    pub gallery: Option<Json>,
    pub video_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamMember {
    pub name: LocalizedText,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PortfolioItem {
    /// Omitted on create; the store assigns it.
    #[serde(default)]
    pub id: Option<i64>,
    /// `living`, `kitchen`, `bath` or `bedroom`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<LocalizedText>,
    #[serde(default)]
    pub img_before: Option<String>,
    #[serde(default)]
    pub img_after: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_new_building: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub works_completed: Option<Vec<WorkGroup>>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub team: Option<Vec<TeamMember>>,
    #[serde(default)]
    pub materials: Option<Vec<String>>,
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Resource for Entity {
    type Record = PortfolioItem;

    const NAME: &'static str = "portfolio";
    const LABEL: &'static str = "Portfolio";
    const BATCH_POLICY: BatchPolicy = BatchPolicy::DestructiveReplace;
    const ID_STRATEGY: IdStrategy = IdStrategy::Generated;

    fn into_active_model(r: PortfolioItem) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: r.id.map_or(NotSet, Set),
            kind: Set(r.kind),
            title: Set(to_json_opt("title", r.title.as_ref())?),
            img_before: Set(r.img_before),
            img_after: Set(r.img_after),
            area: Set(r.area),
            term: Set(r.term),
            cost: Set(r.cost),
            location: Set(r.location),
            is_new_building: Set(r.is_new_building),
            tags: Set(to_json_opt("tags", r.tags.as_ref())?),
            description: Set(to_json_opt("description", r.description.as_ref())?),
            works_completed: Set(to_json_opt("worksCompleted", r.works_completed.as_ref())?),
            budget: Set(r.budget),
            duration: Set(r.duration),
            team: Set(to_json_opt("team", r.team.as_ref())?),
            materials: Set(to_json_opt("materials", r.materials.as_ref())?),
            gallery: Set(to_json_opt("gallery", r.gallery.as_ref())?),
            video_url: Set(r.video_url),
        })
    }

    fn to_record(m: Model) -> Result<PortfolioItem, ModelError> {
        Ok(PortfolioItem {
            id: Some(m.id),
            kind: m.kind,
            title: from_json_opt("title", m.title)?,
            img_before: m.img_before,
            img_after: m.img_after,
            area: m.area,
            term: m.term,
            cost: m.cost,
            location: m.location,
            is_new_building: m.is_new_building,
            tags: from_json_opt("tags", m.tags)?,
            description: from_json_opt("description", m.description)?,
            works_completed: from_json_opt("worksCompleted", m.works_completed)?,
            budget: m.budget,
            duration: m.duration,
            team: from_json_opt("team", m.team)?,
            materials: from_json_opt("materials", m.materials)?,
            gallery: from_json_opt("gallery", m.gallery)?,
            video_url: m.video_url,
        })
    }
}
