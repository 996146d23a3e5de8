//! Customer leads captured by the calculator, the booking form or by phone.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::localized::{from_json_opt, to_json_opt, LocalizedText};
use crate::resource::{require_id, BatchPolicy, IdStrategy, Resource};

pub const DEFAULT_STATUS: &str = "new";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: Option<Json>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub status: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub calculator_data: Option<Json>,
    pub booking_data: Option<Json>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalculatorData {
    pub area: f64,
    /// `new` or `secondary` housing.
    #[serde(rename = "type")]
    pub kind: String,
    /// `economy`, `standard` or `premium`.
    pub level: String,
    pub estimated_cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingData {
    pub date: String,
    pub time: String,
    pub address: String,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Lead {
    pub id: String,
    #[serde(default)]
    pub name: Option<LocalizedText>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Free-form pipeline stage; not enforced.
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub calculator_data: Option<CalculatorData>,
    #[serde(default)]
    pub booking_data: Option<BookingData>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_status() -> String { DEFAULT_STATUS.to_string() }

impl Resource for Entity {
    type Record = Lead;

    const NAME: &'static str = "leads";
    const LABEL: &'static str = "Leads";
    const BATCH_POLICY: BatchPolicy = BatchPolicy::UpsertEach;
    const ID_STRATEGY: IdStrategy = IdStrategy::CallerSupplied;

    fn into_active_model(r: Lead) -> Result<ActiveModel, ModelError> {
        let status = if r.status.trim().is_empty() { default_status() } else { r.status };
        Ok(ActiveModel {
            id: Set(require_id(r.id)?),
            name: Set(to_json_opt("name", r.name.as_ref())?),
            phone: Set(r.phone),
            source: Set(r.source),
            status: Set(status),
            date: Set(r.date),
            time: Set(r.time),
            calculator_data: Set(to_json_opt("calculatorData", r.calculator_data.as_ref())?),
            booking_data: Set(to_json_opt("bookingData", r.booking_data.as_ref())?),
            notes: Set(r.notes),
        })
    }

    fn to_record(m: Model) -> Result<Lead, ModelError> {
        Ok(Lead {
            id: m.id,
            name: from_json_opt("name", m.name)?,
            phone: m.phone,
            source: m.source,
            status: m.status,
            date: m.date,
            time: m.time,
            calculator_data: from_json_opt("calculatorData", m.calculator_data)?,
            booking_data: from_json_opt("bookingData", m.booking_data)?,
            notes: m.notes,
        })
    }
}
