use sea_orm::DbErr;
use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        // 约束冲突（唯一键、外键）按校验错误返回
        if let Some(sql) = e.sql_err() {
            return Self::Validation(sql.to_string());
        }
        match e {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::StoreUnavailable(e.to_string()),
            other => Self::Db(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn connection_failures_are_unavailable() {
        let err: ServiceError = DbErr::Conn(RuntimeErr::Internal("refused".into())).into();
        assert!(matches!(err, ServiceError::StoreUnavailable(_)));
    }

    #[test]
    fn other_db_errors_stay_internal() {
        let err: ServiceError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, ServiceError::Db(ref m) if m.contains("boom")));
    }

    #[test]
    fn model_errors_convert() {
        let err: ServiceError = ModelError::required("id").into();
        assert!(matches!(err, ServiceError::Model(ModelError::Validation(ref m)) if m == "id required"));
    }
}
