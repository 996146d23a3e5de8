//! Shop catalog items (materials, furniture, lighting, plumbing, decor).
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::localized::{from_json_opt, to_json_opt, LocalizedText};
use crate::resource::{require_id, BatchPolicy, IdStrategy, Resource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "catalog")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub category: Option<String>,
    pub title: Option<Json>,
    pub description: Option<Json>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub images: Option<Json>,
    pub specs: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// One row of a product's spec sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Spec {
    pub label: LocalizedText,
    pub value: LocalizedText,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogItem {
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: Option<LocalizedText>,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub specs: Option<Vec<Spec>>,
}

impl Resource for Entity {
    type Record = CatalogItem;

    const NAME: &'static str = "catalog";
    const LABEL: &'static str = "Catalog";
    const BATCH_POLICY: BatchPolicy = BatchPolicy::DestructiveReplace;
    const ID_STRATEGY: IdStrategy = IdStrategy::CallerSupplied;

    fn into_active_model(r: CatalogItem) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: Set(require_id(r.id)?),
            category: Set(r.category),
            title: Set(to_json_opt("title", r.title.as_ref())?),
            description: Set(to_json_opt("description", r.description.as_ref())?),
            price: Set(r.price),
            image: Set(r.image),
            images: Set(to_json_opt("images", r.images.as_ref())?),
            specs: Set(to_json_opt("specs", r.specs.as_ref())?),
        })
    }

    fn to_record(m: Model) -> Result<CatalogItem, ModelError> {
        Ok(CatalogItem {
            id: m.id,
            category: m.category,
            title: from_json_opt("title", m.title)?,
            description: from_json_opt("description", m.description)?,
            price: m.price,
            image: m.image,
            images: from_json_opt("images", m.images)?,
            specs: from_json_opt("specs", m.specs)?,
        })
    }
}
