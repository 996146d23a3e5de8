use sea_orm::{ActiveModelTrait, DatabaseConnection};
use tracing::{info, instrument};

use models::resource::Resource;
use models::user::{self, NewUser, User};
use crate::errors::ServiceError;

/// Get-or-create by Telegram id. Returns the stored user and whether this call created it.
///
/// Two concurrent registrations of one id race on the unique index; the loser
/// re-reads and returns the winner's row.
#[instrument(skip_all, fields(telegram_id = %new_user.telegram_id))]
pub async fn register(db: &DatabaseConnection, new_user: NewUser) -> Result<(User, bool), ServiceError> {
    if let Some(existing) = user::find_by_telegram_id(db, &new_user.telegram_id).await? {
        return Ok((user::Entity::to_record(existing)?, false));
    }

    let telegram_id = new_user.telegram_id.clone();
    let am = user::Entity::into_active_model(User::from(new_user))?;
    match am.insert(db).await {
        Ok(created) => {
            info!(id = created.id, "user registered");
            Ok((user::Entity::to_record(created)?, true))
        }
        Err(e) if e.sql_err().is_some() => {
            let winner = user::find_by_telegram_id(db, &telegram_id)
                .await?
                .ok_or_else(|| ServiceError::from(e))?;
            Ok((user::Entity::to_record(winner)?, false))
        }
        Err(e) => Err(e.into()),
    }
}

/// Get a user by Telegram id.
pub async fn get_by_telegram_id(db: &DatabaseConnection, telegram_id: &str) -> Result<User, ServiceError> {
    let found = user::find_by_telegram_id(db, telegram_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;
    Ok(user::Entity::to_record(found)?)
}
