use std::net::SocketAddr;
use std::path::PathBuf;

use configs::AppConfig;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
    root: PathBuf,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

/// Fresh in-memory database and a throwaway static directory per test.
async fn start_server() -> anyhow::Result<TestApp> {
    let root = std::env::temp_dir().join(format!("remont-e2e-{}", Uuid::new_v4()));
    let mut cfg = AppConfig::default();
    cfg.media.static_dir = root.join("static").to_string_lossy().into_owned();
    cfg.media.upload_dir = root.join("static/uploads").to_string_lossy().into_owned();

    let db = models::db::connect_with_config(&models::db::DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;

    let app = server::build_app(db, &cfg);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, root })
}

fn sofa() -> Value {
    json!({
        "id": "sofa-001",
        "category": "furniture",
        "title": {"ru": "Диван", "en": "Sofa", "uz": "Divan"},
        "price": 850,
        "images": []
    })
}

#[tokio::test]
async fn e2e_root_and_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let body = c.get(app.url("/")).send().await?.json::<Value>().await?;
    assert_eq!(body["message"], "Telegram Web App API is running!");

    let res = c.get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_catalog_batch_then_list() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/api/v1/catalog/batch")).json(&json!([sofa()])).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["message"], "Catalog synchronized");

    let list = c.get(app.url("/api/v1/catalog/")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 1);
    let item = &list[0];
    assert_eq!(item["id"], "sofa-001");
    assert_eq!(item["category"], "furniture");
    assert_eq!(item["title"]["uz"], "Divan");
    assert_eq!(item["price"].as_f64(), Some(850.0));
    assert_eq!(item["images"], json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_upsert_and_destructive_replace() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    for id in ["a", "b"] {
        let res = c
            .post(app.url("/api/v1/stories/"))
            .json(&json!({"id": id, "category": "promo", "imageUrl": "/static/uploads/x.jpg", "title": "Акция"}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
        assert_eq!(res.json::<Value>().await?["message"], "Saved successfully");
    }

    // duplicate id in one batch: rolled back, a and b survive
    let dup = json!([{"id": "c", "category": "team"}, {"id": "c", "category": "team"}]);
    let res = c.post(app.url("/api/v1/stories/batch")).json(&dup).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let list = c.get(app.url("/api/v1/stories")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 2);

    let res = c.post(app.url("/api/v1/stories/batch")).json(&json!([{"id": "c", "category": "reviews"}])).send().await?;
    assert_eq!(res.json::<Value>().await?["message"], "Stories synchronized");
    let list = c.get(app.url("/api/v1/stories/")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "c");
    Ok(())
}

#[tokio::test]
async fn e2e_leads_batch_upserts() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    c.post(app.url("/api/v1/leads/"))
        .json(&json!({"id": "l-1", "phone": "+998901112233", "source": "phone", "date": "2025-03-01", "time": "10:00"}))
        .send()
        .await?;
    let res = c
        .post(app.url("/api/v1/leads/batch"))
        .json(&json!([{"id": "l-2", "source": "booking",
                       "bookingData": {"date": "2025-03-02", "time": "12:00", "address": "Ташкент"}}]))
        .send()
        .await?;
    assert_eq!(res.json::<Value>().await?["message"], "Batch upserted");

    let list = c.get(app.url("/api/v1/leads/")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|l| l["status"] == "new"));
    Ok(())
}

#[tokio::test]
async fn e2e_portfolio_keeps_timestamp_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let id: i64 = 1_760_000_000_000;

    let body = json!([{"id": id, "type": "living", "title": "ЖК Бунёдкор", "area": "74 м²", "isNewBuilding": true}]);
    let res = c.post(app.url("/api/v1/portfolio/batch")).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["message"], "Portfolio synchronized");

    let list = c.get(app.url("/api/v1/portfolio/")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"].as_i64(), Some(id));
    assert_eq!(list[0]["type"], "living");
    Ok(())
}

#[tokio::test]
async fn e2e_validation_errors_are_400() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let mut unknown = sofa();
    unknown["colour"] = json!("red");
    let res = c.post(app.url("/api/v1/catalog/")).json(&unknown).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Validation Error");
    assert!(body["detail"].as_str().unwrap_or_default().contains("colour"));

    let res = c.post(app.url("/api/v1/projects/")).json(&json!({"clientName": "Иванов"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.post(app.url("/api/v1/catalog/")).body("{not json").header("content-type", "application/json").send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_register_twice_same_user() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let body = json!({"telegram_id": "abc", "username": "aziz", "first_name": "Aziz"});

    let res = c.post(app.url("/api/v1/users/register")).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let first = res.json::<Value>().await?;
    assert_eq!(first["is_active"], true);

    let res = c.post(app.url("/api/v1/users/register")).json(&body).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let second = res.json::<Value>().await?;
    assert_eq!(second["id"], first["id"]);

    let found = c.get(app.url("/api/v1/users/abc")).send().await?.json::<Value>().await?;
    assert_eq!(found["id"], first["id"]);

    let users = c.get(app.url("/api/v1/users/")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(users.len(), 1);

    let res = c.get(app.url("/api/v1/users/missing")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["detail"], "User not found");
    Ok(())
}

#[tokio::test]
async fn e2e_upload_and_fetch_back() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let bytes: Vec<u8> = (0u8..=255).cycle().take(4096).collect();

    let part = reqwest::multipart::Part::bytes(bytes.clone()).file_name("photo.png");
    let form = reqwest::multipart::Form::new().part("file", part);
    let res = c.post(app.url("/api/v1/media/upload")).multipart(form).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let url = res.json::<Value>().await?["url"].as_str().unwrap_or_default().to_string();
    assert!(url.starts_with("/static/uploads/"));
    assert!(url.ends_with(".png"));

    let fetched = c.get(app.url(&url)).send().await?;
    assert_eq!(fetched.status(), HttpStatusCode::OK);
    assert_eq!(fetched.bytes().await?.to_vec(), bytes);
    Ok(())
}

#[tokio::test]
async fn e2e_upload_multiple() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let form = reqwest::multipart::Form::new()
        .part("files", reqwest::multipart::Part::bytes(b"one".to_vec()).file_name("a.jpg"))
        .part("files", reqwest::multipart::Part::bytes(b"two".to_vec()).file_name("b.mp4"));
    let res = c.post(app.url("/api/v1/media/upload-multiple")).multipart(form).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let urls = res.json::<Value>().await?["urls"].as_array().cloned().unwrap_or_default();
    assert_eq!(urls.len(), 2);
    assert!(urls[0].as_str().unwrap_or_default().ends_with(".jpg"));
    assert!(urls[1].as_str().unwrap_or_default().ends_with(".mp4"));

    let form = reqwest::multipart::Form::new().text("note", "no files here");
    let res = c.post(app.url("/api/v1/media/upload-multiple")).multipart(form).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_lists_resource_routes() -> anyhow::Result<()> {
    let app = start_server().await?;
    let doc = reqwest::get(app.url("/api-docs/openapi.json")).await?.json::<Value>().await?;
    let paths = doc["paths"].as_object().cloned().unwrap_or_default();
    for kind in ["catalog", "leads", "projects", "portfolio", "services", "stories", "settings", "users"] {
        assert!(paths.contains_key(&format!("/api/v1/{kind}/")), "missing {kind}");
        assert!(paths.contains_key(&format!("/api/v1/{kind}/batch")), "missing {kind} batch");
    }
    assert!(paths.contains_key("/api/v1/users/register"));
    Ok(())
}
