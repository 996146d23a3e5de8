//! Localized text and JSON column helpers shared by every resource schema.
use std::collections::BTreeMap;

use sea_orm::entity::prelude::Json;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::ModelError;

/// Text keyed by language code (`ru`, `en`, `uz`), or a plain string.
///
/// The front-end sends either form; both are stored as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Translations(BTreeMap<String, String>),
    Plain(String),
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocalizedText {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::Translations(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }
}

pub(crate) fn to_json<T: Serialize>(field: &'static str, value: &T) -> Result<Json, ModelError> {
    serde_json::to_value(value).map_err(|e| ModelError::Validation(format!("{field}: {e}")))
}

pub(crate) fn to_json_opt<T: Serialize>(field: &'static str, value: Option<&T>) -> Result<Option<Json>, ModelError> {
    value.map(|v| to_json(field, v)).transpose()
}

pub(crate) fn from_json<T: DeserializeOwned>(field: &'static str, value: Json) -> Result<T, ModelError> {
    serde_json::from_value(value).map_err(|e| ModelError::Decode { field, message: e.to_string() })
}

pub(crate) fn from_json_opt<T: DeserializeOwned>(field: &'static str, value: Option<Json>) -> Result<Option<T>, ModelError> {
    match value {
        None | Some(Json::Null) => Ok(None),
        Some(v) => from_json(field, v).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_map_and_plain_forms() {
        let map: LocalizedText = serde_json::from_str(r#"{"ru":"Диван","en":"Sofa"}"#).unwrap();
        assert_eq!(map, LocalizedText::from([("en", "Sofa"), ("ru", "Диван")]));

        let plain: LocalizedText = serde_json::from_str(r#""Диван""#).unwrap();
        assert_eq!(plain, LocalizedText::Plain("Диван".into()));
    }

    #[test]
    fn rejects_non_text_values() {
        assert!(serde_json::from_str::<LocalizedText>("42").is_err());
        assert!(serde_json::from_str::<LocalizedText>(r#"{"ru": 1}"#).is_err());
    }

    #[test]
    fn null_column_decodes_to_none() {
        let v: Option<LocalizedText> = from_json_opt("title", Some(Json::Null)).unwrap();
        assert!(v.is_none());
    }

    #[test]
    fn malformed_column_reports_field() {
        let err = from_json::<LocalizedText>("title", serde_json::json!(7)).unwrap_err();
        assert!(matches!(err, ModelError::Decode { field: "title", .. }));
    }
}
