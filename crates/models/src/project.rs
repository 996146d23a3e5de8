//! Client renovation projects. Payments and the timeline are embedded JSON arrays.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::localized::{from_json, from_json_opt, to_json, to_json_opt, LocalizedText};
use crate::resource::{require_id, BatchPolicy, IdStrategy, Resource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub client_name: Json,
    pub address: Option<Json>,
    pub phone: Option<String>,
    pub total_estimate: Option<f64>,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<String>,
    pub current_stage: Option<Json>,
    pub contract_number: Option<String>,
    pub telegram_id: Option<String>,
    pub stage: Option<Json>,
    pub forecast: Option<Json>,
    pub finance: Option<Json>,
    pub payments: Option<Json>,
    pub timeline: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Wire shape of a project. Nested collections (`payments`, `timeline`,
/// `finance`) are opaque: only their outer shape is checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub id: String,
    pub client_name: LocalizedText,
    #[serde(default)]
    pub address: Option<LocalizedText>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub total_estimate: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub current_stage: Option<LocalizedText>,
    #[serde(default)]
    pub contract_number: Option<String>,
    #[serde(default)]
    pub telegram_id: Option<String>,
    #[serde(default)]
    pub stage: Option<LocalizedText>,
    #[serde(default)]
    pub forecast: Option<Json>,
    #[serde(default)]
    pub finance: Option<serde_json::Map<String, Json>>,
    #[serde(default)]
    pub payments: Option<Vec<Json>>,
    #[serde(default)]
    pub timeline: Option<Vec<Json>>,
}

impl Resource for Entity {
    type Record = Project;

    const NAME: &'static str = "projects";
    const LABEL: &'static str = "Projects";
    const BATCH_POLICY: BatchPolicy = BatchPolicy::DestructiveReplace;
    const ID_STRATEGY: IdStrategy = IdStrategy::CallerSupplied;

    fn into_active_model(r: Project) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: Set(require_id(r.id)?),
            client_name: Set(to_json("clientName", &r.client_name)?),
            address: Set(to_json_opt("address", r.address.as_ref())?),
            phone: Set(r.phone),
            total_estimate: Set(r.total_estimate),
            start_date: Set(r.start_date),
            deadline: Set(r.deadline),
            status: Set(r.status),
            current_stage: Set(to_json_opt("currentStage", r.current_stage.as_ref())?),
            contract_number: Set(r.contract_number),
            telegram_id: Set(r.telegram_id),
            stage: Set(to_json_opt("stage", r.stage.as_ref())?),
            forecast: Set(r.forecast.filter(|v| !v.is_null())),
            finance: Set(r.finance.map(Json::Object)),
            payments: Set(r.payments.map(Json::Array)),
            timeline: Set(r.timeline.map(Json::Array)),
        })
    }

    fn to_record(m: Model) -> Result<Project, ModelError> {
        Ok(Project {
            id: m.id,
            client_name: from_json("clientName", m.client_name)?,
            address: from_json_opt("address", m.address)?,
            phone: m.phone,
            total_estimate: m.total_estimate,
            start_date: m.start_date,
            deadline: m.deadline,
            status: m.status,
            current_stage: from_json_opt("currentStage", m.current_stage)?,
            contract_number: m.contract_number,
            telegram_id: m.telegram_id,
            stage: from_json_opt("stage", m.stage)?,
            forecast: m.forecast.filter(|v| !v.is_null()),
            finance: from_json_opt("finance", m.finance)?,
            payments: from_json_opt("payments", m.payments)?,
            timeline: from_json_opt("timeline", m.timeline)?,
        })
    }
}
