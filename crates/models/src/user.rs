//! Telegram users of the web app. Wire fields stay snake_case, as the bot sends them.
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::resource::{BatchPolicy, IdStrategy, Resource};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub telegram_id: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

fn default_active() -> bool { true }

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    #[serde(default)]
    pub id: Option<i32>,
    pub telegram_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl User {
    pub fn new(telegram_id: impl Into<String>) -> Self {
        Self {
            id: None,
            telegram_id: telegram_id.into(),
            username: None,
            first_name: None,
            last_name: None,
            phone: None,
            is_active: true,
        }
    }
}

impl Resource for Entity {
    type Record = User;

    const NAME: &'static str = "users";
    const LABEL: &'static str = "Users";
    const BATCH_POLICY: BatchPolicy = BatchPolicy::UpsertEach;
    const ID_STRATEGY: IdStrategy = IdStrategy::Generated;

    fn into_active_model(r: User) -> Result<ActiveModel, ModelError> {
        if r.telegram_id.trim().is_empty() {
            return Err(ModelError::required("telegram_id"));
        }
        Ok(ActiveModel {
            id: r.id.map_or(NotSet, Set),
            telegram_id: Set(r.telegram_id),
            username: Set(r.username),
            first_name: Set(r.first_name),
            last_name: Set(r.last_name),
            phone: Set(r.phone),
            is_active: Set(r.is_active),
        })
    }

    fn to_record(m: Model) -> Result<User, ModelError> {
        Ok(User {
            id: Some(m.id),
            telegram_id: m.telegram_id,
            username: m.username,
            first_name: m.first_name,
            last_name: m.last_name,
            phone: m.phone,
            is_active: m.is_active,
        })
    }
}

pub async fn find_by_telegram_id<C: ConnectionTrait>(db: &C, telegram_id: &str) -> Result<Option<Model>, DbErr> {
    Entity::find().filter(Column::TelegramId.eq(telegram_id)).one(db).await
}

/// Body of `POST /users/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    pub telegram_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<NewUser> for User {
    fn from(n: NewUser) -> Self {
        Self {
            id: None,
            telegram_id: n.telegram_id,
            username: n.username,
            first_name: n.first_name,
            last_name: n.last_name,
            phone: n.phone,
            is_active: true,
        }
    }
}
