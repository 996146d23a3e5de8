use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::resource::{BatchPolicy, IdStrategy, Resource};

/// Price table consumed by the renovation cost calculator.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "calculator_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub prices: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorSettings {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub prices: Option<Json>,
}

impl Resource for Entity {
    type Record = CalculatorSettings;

    const NAME: &'static str = "settings";
    const LABEL: &'static str = "Settings";
    const BATCH_POLICY: BatchPolicy = BatchPolicy::UpsertEach;
    const ID_STRATEGY: IdStrategy = IdStrategy::Generated;

    fn into_active_model(r: CalculatorSettings) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: r.id.map_or(NotSet, Set),
            prices: Set(r.prices.filter(|v| !v.is_null())),
        })
    }

    fn to_record(m: Model) -> Result<CalculatorSettings, ModelError> {
        Ok(CalculatorSettings { id: Some(m.id), prices: m.prices })
    }
}
