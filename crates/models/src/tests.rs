use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};
use serde_json::json;

use crate::resource::Resource;
use crate::{calculator_setting, catalog, db, lead, portfolio, project, story, user, LocalizedText, ModelError};

fn sofa() -> serde_json::Value {
    json!({
        "id": "sofa-001",
        "category": "furniture",
        "title": {"ru": "Диван", "en": "Sofa", "uz": "Divan"},
        "price": 850,
        "images": []
    })
}

#[test]
fn catalog_record_accepts_front_end_shape() {
    let item: catalog::CatalogItem = serde_json::from_value(sofa()).unwrap();
    assert_eq!(item.price, Some(850.0));
    assert_eq!(item.title, Some(LocalizedText::from([("ru", "Диван"), ("en", "Sofa"), ("uz", "Divan")])));
    assert!(item.description.is_none());
}

#[test]
fn unknown_fields_are_rejected() {
    let mut body = sofa();
    body["colour"] = json!("red");
    let err = serde_json::from_value::<catalog::CatalogItem>(body).unwrap_err();
    assert!(err.to_string().contains("colour"));
}

#[test]
fn missing_caller_id_is_a_shape_error() {
    let err = serde_json::from_value::<story::Story>(json!({"category": "promo"})).unwrap_err();
    assert!(err.to_string().contains("id"));
}

#[test]
fn blank_caller_id_is_rejected() {
    let item = story::Story { id: "  ".into(), category: None, image_url: None, title: None, video_url: None };
    let err = story::Entity::into_active_model(item).unwrap_err();
    assert!(matches!(err, ModelError::Validation(msg) if msg.contains("id")));
}

#[test]
fn lead_status_defaults_to_new() {
    let lead: lead::Lead = serde_json::from_value(json!({
        "id": "lead-1",
        "name": "Азиз",
        "source": "calculator",
        "calculatorData": {"area": 54.5, "type": "secondary", "level": "standard", "estimatedCost": 1200},
    }))
    .unwrap();
    assert_eq!(lead.status, lead::DEFAULT_STATUS);
    assert_eq!(lead.calculator_data.as_ref().map(|c| c.kind.as_str()), Some("secondary"));
}

#[test]
fn portfolio_without_id_leaves_key_to_store() {
    let item: portfolio::PortfolioItem = serde_json::from_value(json!({
        "type": "kitchen",
        "title": {"ru": "Кухня", "en": "Kitchen"},
        "team": [{"name": "Мадина А.", "role": "Дизайнер", "avatar": "a.jpg"}]
    }))
    .unwrap();
    assert!(!item.is_new_building);
    let am = portfolio::Entity::into_active_model(item).unwrap();
    assert!(matches!(am.id, ActiveValue::NotSet));
}

#[test]
fn user_defaults_and_blank_telegram_id() {
    let u: user::User = serde_json::from_value(json!({"telegram_id": "abc"})).unwrap();
    assert!(u.is_active);
    assert!(user::Entity::into_active_model(user::User::new(" ")).is_err());
    // users keep snake_case on the wire
    assert!(serde_json::from_value::<user::User>(json!({"telegramId": "abc"})).is_err());
}

#[test]
fn batch_messages_follow_policy() {
    assert_eq!(catalog::Entity::batch_message(), "Catalog synchronized");
    assert_eq!(portfolio::Entity::batch_message(), "Portfolio synchronized");
    assert_eq!(lead::Entity::batch_message(), "Batch upserted");
    assert_eq!(calculator_setting::Entity::batch_message(), "Batch upserted");
}

#[tokio::test]
async fn project_round_trips_through_sqlite() {
    let conn = db::connect_with_config(&db::DatabaseConfig::in_memory()).await.unwrap();
    migration::Migrator::up(&conn, None).await.unwrap();

    let record: project::Project = serde_json::from_value(json!({
        "id": "p-17",
        "clientName": {"ru": "Иванов", "en": "Ivanov"},
        "status": "process",
        "totalEstimate": 125000000.0,
        "finance": {"total": 100, "paid": 40, "remaining": 60},
        "payments": [{"id": "pay-1", "date": "2025-02-01", "amount": 40, "comment": "аванс"}],
        "timeline": []
    }))
    .unwrap();

    project::Entity::into_active_model(record.clone()).unwrap().insert(&conn).await.unwrap();

    let rows = project::Entity::find().all(&conn).await.unwrap();
    assert_eq!(rows.len(), 1);
    let back = project::Entity::to_record(rows.into_iter().next().unwrap()).unwrap();
    assert_eq!(back, record);
}
