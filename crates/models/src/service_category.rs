//! Service categories shown on the services screen, each with its price list.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::localized::{from_json_opt, to_json_opt, LocalizedText};
use crate::resource::{BatchPolicy, IdStrategy, Resource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: Option<Json>,
    pub icon: Option<String>,
    pub services: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceCategory {
    /// Generated (UUID v4) when omitted or blank.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<LocalizedText>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Individual services with their prices; kept opaque.
    #[serde(default)]
    pub services: Option<Vec<Json>>,
}

impl Resource for Entity {
    type Record = ServiceCategory;

    const NAME: &'static str = "services";
    const LABEL: &'static str = "Services";
    const BATCH_POLICY: BatchPolicy = BatchPolicy::DestructiveReplace;
    const ID_STRATEGY: IdStrategy = IdStrategy::Generated;

    fn into_active_model(r: ServiceCategory) -> Result<ActiveModel, ModelError> {
        let id = match r.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };
        Ok(ActiveModel {
            id: Set(id),
            title: Set(to_json_opt("title", r.title.as_ref())?),
            icon: Set(r.icon),
            services: Set(r.services.map(Json::Array)),
        })
    }

    fn to_record(m: Model) -> Result<ServiceCategory, ModelError> {
        Ok(ServiceCategory {
            id: Some(m.id),
            title: from_json_opt("title", m.title)?,
            icon: m.icon,
            services: from_json_opt("services", m.services)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_is_generated() {
        let record: ServiceCategory = serde_json::from_value(serde_json::json!({
            "title": {"ru": "Электрика", "en": "Electrics"},
            "icon": "zap"
        }))
        .unwrap();
        let am = Entity::into_active_model(record).unwrap();
        let id = am.id.clone().unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn supplied_id_is_kept() {
        let record = ServiceCategory { id: Some("electrics".into()), title: None, icon: None, services: None };
        let am = Entity::into_active_model(record).unwrap();
        assert_eq!(am.id.unwrap(), "electrics");
    }
}
