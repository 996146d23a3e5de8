//! Generic store operations shared by every resource kind.
//!
//! - `list_all`: every row of the kind, in store order.
//! - `upsert_one`: insert, or replace every column of the row with the same key.
//! - `batch_sync`: apply the kind's [`BatchPolicy`] inside one transaction.
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityName, EntityTrait,
    IdenStatic, IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, Statement, TransactionTrait,
};
use tracing::{error, info, instrument};

use models::resource::{BatchPolicy, Resource};

use crate::errors::ServiceError;

pub async fn list_all<R>(db: &DatabaseConnection) -> Result<Vec<R::Record>, ServiceError>
where
    R: Resource,
{
    let rows = R::find().all(db).await?;
    let records = rows
        .into_iter()
        .map(|m| R::to_record(m).map_err(ServiceError::from))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

#[instrument(skip_all, fields(kind = R::NAME))]
pub async fn upsert_one<R>(db: &DatabaseConnection, record: R::Record) -> Result<(), ServiceError>
where
    R: Resource,
    R::Model: IntoActiveModel<R::ActiveModel>,
    R::ActiveModel: Send + Sync,
{
    let am = R::into_active_model(record)?;
    let explicit_key = key_is_set::<R>(&am);
    upsert_model::<R, _>(db, am).await?;
    if explicit_key {
        resync_sequence::<R, _>(db).await?;
    }
    info!(kind = R::NAME, "record saved");
    Ok(())
}

/// Reconcile the stored collection with `records` according to `R::BATCH_POLICY`.
/// Any failing record rolls the whole batch back; returns the number of records applied.
#[instrument(skip_all, fields(kind = R::NAME, count = records.len()))]
pub async fn batch_sync<R>(db: &DatabaseConnection, records: Vec<R::Record>) -> Result<usize, ServiceError>
where
    R: Resource,
    R::Model: IntoActiveModel<R::ActiveModel>,
    R::ActiveModel: Send + Sync,
{
    let models = records
        .into_iter()
        .map(R::into_active_model)
        .collect::<Result<Vec<_>, _>>()?;
    let count = models.len();

    let txn = db.begin().await?;
    match apply_batch::<R, _>(&txn, models).await {
        Ok(()) => {
            txn.commit().await?;
            info!(kind = R::NAME, count, policy = ?R::BATCH_POLICY, "batch committed");
            Ok(count)
        }
        Err(e) => {
            error!(kind = R::NAME, count, policy = ?R::BATCH_POLICY, error = %e, "batch rolled back");
            txn.rollback().await?;
            Err(e.into())
        }
    }
}

async fn apply_batch<R, C>(conn: &C, models: Vec<R::ActiveModel>) -> Result<(), DbErr>
where
    R: Resource,
    R::Model: IntoActiveModel<R::ActiveModel>,
    R::ActiveModel: Send + Sync,
    C: ConnectionTrait,
{
    let explicit_keys = models.iter().any(key_is_set::<R>);
    match R::BATCH_POLICY {
        BatchPolicy::DestructiveReplace => {
            let deleted = R::delete_many().exec(conn).await?.rows_affected;
            info!(kind = R::NAME, deleted, "cleared before replace");
            for am in models {
                R::insert(am).exec_without_returning(conn).await?;
            }
        }
        BatchPolicy::UpsertEach => {
            for am in models {
                upsert_model::<R, _>(conn, am).await?;
            }
        }
    }
    if explicit_keys {
        resync_sequence::<R, _>(conn).await?;
    }
    Ok(())
}

async fn upsert_model<R, C>(conn: &C, am: R::ActiveModel) -> Result<(), DbErr>
where
    R: Resource,
    R::Model: IntoActiveModel<R::ActiveModel>,
    R::ActiveModel: Send + Sync,
    C: ConnectionTrait,
{
    R::insert(am).on_conflict(replace_on_key::<R>()).exec_without_returning(conn).await?;
    Ok(())
}

/// `ON CONFLICT (<pk>) DO UPDATE SET <every other column> = excluded.<column>`
fn replace_on_key<R: Resource>() -> OnConflict {
    let keys: Vec<R::Column> = <R::PrimaryKey as Iterable>::iter().map(|k| k.into_column()).collect();
    let others: Vec<R::Column> = <R::Column as Iterable>::iter()
        .filter(|c| !keys.iter().any(|k| k.as_str() == c.as_str()))
        .collect();
    let mut on_conflict = OnConflict::columns(keys);
    if others.is_empty() {
        on_conflict.do_nothing();
    } else {
        on_conflict.update_columns(others);
    }
    on_conflict
}

fn key_is_set<R: Resource>(am: &R::ActiveModel) -> bool {
    <R::PrimaryKey as Iterable>::iter().all(|k| am.get(k.into_column()).is_set())
}

/// Writes that carry explicit integer ids leave a Postgres serial sequence behind
/// the table; move it past `MAX(id)` so later generated ids do not collide.
/// SQLite derives the next rowid from the table itself.
async fn resync_sequence<R, C>(conn: &C) -> Result<(), DbErr>
where
    R: Resource,
    C: ConnectionTrait,
{
    if conn.get_database_backend() != DatabaseBackend::Postgres || !<R::PrimaryKey as PrimaryKeyTrait>::auto_increment() {
        return Ok(());
    }
    let Some(key) = <R::PrimaryKey as Iterable>::iter().next() else {
        return Ok(());
    };
    let table = R::default().table_name().to_string();
    let column = key.into_column().as_str().to_string();
    let sql = format!(
        r#"SELECT setval(pg_get_serial_sequence('"{table}"', '{column}'), COALESCE((SELECT MAX("{column}") FROM "{table}"), 0) + 1, false)"#
    );
    conn.execute(Statement::from_string(DatabaseBackend::Postgres, sql)).await?;
    Ok(())
}
