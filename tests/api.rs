//! End-to-end tests against a real PostgreSQL.
//!
//! Set `TEST_DATABASE_URL` to run them; without it every test returns early.
//! Each test works in its own schema so list results are exact.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use restaurant_api::{build_router, AppState, Gateway};
use serde_json::{json, Value};
use sqlx::postgres::{PgConnectOptions, PgPool};
use std::str::FromStr;
use tower::ServiceExt;
use uuid::Uuid;

struct TestApp {
    router: Router,
    gateway: Gateway,
    admin: PgPool,
    schema: String,
}

impl TestApp {
    async fn start() -> Option<TestApp> {
        let url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => {
                eprintln!("TEST_DATABASE_URL not set, skipping");
                return None;
            }
        };
        let options = PgConnectOptions::from_str(&url).expect("TEST_DATABASE_URL");
        let admin = PgPool::connect_with(options.clone()).await.expect("connect admin pool");
        let schema = format!("test_{}", Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&admin)
            .await
            .expect("create schema");

        let gateway = Gateway::new(options.options([("search_path", schema.as_str())]), 2);
        gateway.connect().await.expect("gateway connect");
        let router = build_router(AppState::new(gateway.clone(), "restaurant-api-test"));
        Some(TestApp {
            router,
            gateway,
            admin,
            schema,
        })
    }

    async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_restaurant(&self, name: &str) -> Value {
        let (status, body) = self
            .call(
                "POST",
                "/restaurants/",
                Some(json!({"name": name, "street_address": "1 Main St", "description": null})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body
    }

    async fn create_menu_item(&self, restaurant_id: &str, name: &str, price: i32) -> (StatusCode, Value) {
        self.call(
            "POST",
            "/menu-items/",
            Some(json!({"name": name, "price": price, "restaurant_id": restaurant_id})),
        )
        .await
    }

    async fn finish(self) {
        self.gateway.disconnect().await;
        let _ = sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await;
        self.admin.close().await;
    }
}

#[tokio::test]
async fn restaurant_create_then_get_returns_same_entity() {
    let Some(app) = TestApp::start().await else { return };

    let created = app.create_restaurant("Cafe A").await;
    let id = created["id"].as_str().expect("generated id");
    assert!(Uuid::parse_str(id).is_ok());
    assert_eq!(created["name"], "Cafe A");
    assert_eq!(created["street_address"], "1 Main St");
    assert_eq!(created["description"], Value::Null);

    let (status, fetched) = app.call("GET", &format!("/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    app.finish().await;
}

#[tokio::test]
async fn restaurant_update_overwrites_every_field() {
    let Some(app) = TestApp::start().await else { return };

    let (_, created) = app
        .call(
            "POST",
            "/restaurants",
            Some(json!({"name": "Old", "street_address": "Old St", "description": "cosy"})),
        )
        .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .call(
            "PUT",
            &format!("/restaurants/{id}"),
            Some(json!({"name": "New", "street_address": "New St"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "New");
    assert_eq!(updated["street_address"], "New St");
    assert_eq!(updated["description"], Value::Null);

    let (_, fetched) = app.call("GET", &format!("/restaurants/{id}"), None).await;
    assert_eq!(fetched, updated);

    app.finish().await;
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let Some(app) = TestApp::start().await else { return };

    let created = app.create_restaurant("Short-lived").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.call("DELETE", &format!("/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Restaurant deleted successfully"}));

    let (status, body) = app.call("GET", &format!("/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Restaurant not found");

    let (status, _) = app.call("DELETE", &format!("/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.finish().await;
}

#[tokio::test]
async fn unknown_ids_are_not_found_never_server_errors() {
    let Some(app) = TestApp::start().await else { return };

    let restaurant = app.create_restaurant("Anchor").await;
    let rid = restaurant["id"].as_str().unwrap();
    let missing = Uuid::new_v4();

    let restaurant_body = json!({"name": "x", "street_address": "y"});
    let item_body = json!({"name": "x", "price": 1, "restaurant_id": rid});
    let cases = [
        ("GET", format!("/restaurants/{missing}"), None),
        ("PUT", format!("/restaurants/{missing}"), Some(restaurant_body)),
        ("DELETE", format!("/restaurants/{missing}"), None),
        ("GET", format!("/menu-items/{missing}"), None),
        ("PUT", format!("/menu-items/{missing}"), Some(item_body)),
        ("DELETE", format!("/menu-items/{missing}"), None),
    ];
    for (method, uri, body) in cases {
        let (status, resp) = app.call(method, &uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(resp["error"]["code"], "not_found");
    }

    app.finish().await;
}

#[tokio::test]
async fn menu_item_with_unknown_restaurant_is_not_persisted() {
    let Some(app) = TestApp::start().await else { return };

    let (status, body) = app
        .create_menu_item(&Uuid::new_v4().to_string(), "Ghost", 100)
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "database_error");

    let (status, items) = app.call("GET", "/menu-items/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items, json!([]));

    app.finish().await;
}

#[tokio::test]
async fn storage_error_does_not_leak_database_detail() {
    let Some(app) = TestApp::start().await else { return };

    let (status, body) = app
        .create_menu_item(&Uuid::new_v4().to_string(), "Ghost", 100)
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"]["message"].as_str().expect("message");
    assert_eq!(message, "internal server error");
    assert!(!message.contains("menu_items"));
    assert!(!message.contains("foreign key"));

    app.finish().await;
}

#[tokio::test]
async fn list_returns_exactly_what_was_created() {
    let Some(app) = TestApp::start().await else { return };

    let (status, empty) = app.call("GET", "/restaurants/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty, json!([]));

    let mut ids = Vec::new();
    for name in ["One", "Two", "Three"] {
        let created = app.create_restaurant(name).await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let (_, listed) = app.call("GET", "/restaurants", None).await;
    let mut listed_ids: Vec<String> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect();
    listed_ids.sort();
    ids.sort();
    assert_eq!(listed_ids, ids);

    app.finish().await;
}

#[tokio::test]
async fn restaurant_with_menu_items_cannot_be_deleted() {
    let Some(app) = TestApp::start().await else { return };

    let cafe = app.create_restaurant("Cafe A").await;
    let rid = cafe["id"].as_str().unwrap();

    let (status, latte) = app.create_menu_item(rid, "Latte", 450).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(latte["name"], "Latte");
    assert_eq!(latte["price"], 450);
    assert_eq!(latte["restaurant_id"], rid);
    let item_id = latte["id"].as_str().unwrap();

    let (status, fetched) = app.call("GET", &format!("/menu-items/{item_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, latte);

    let (status, body) = app.call("DELETE", &format!("/restaurants/{rid}"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "conflict");

    let (status, _) = app.call("GET", &format!("/restaurants/{rid}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.call("GET", &format!("/menu-items/{item_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.call("DELETE", &format!("/menu-items/{item_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Menu item deleted successfully");

    let (status, _) = app.call("DELETE", &format!("/restaurants/{rid}"), None).await;
    assert_eq!(status, StatusCode::OK);

    app.finish().await;
}

#[tokio::test]
async fn menu_item_update_replaces_all_fields() {
    let Some(app) = TestApp::start().await else { return };

    let first = app.create_restaurant("First").await;
    let second = app.create_restaurant("Second").await;
    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();

    let (_, item) = app.create_menu_item(first_id, "Tea", 300).await;
    let item_id = item["id"].as_str().unwrap();

    let (status, updated) = app
        .call(
            "PUT",
            &format!("/menu-items/{item_id}"),
            Some(json!({"name": "Green Tea", "price": 350, "restaurant_id": second_id})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": item_id, "name": "Green Tea", "price": 350, "restaurant_id": second_id})
    );

    let (status, _) = app
        .call(
            "PUT",
            &format!("/menu-items/{item_id}"),
            Some(json!({"name": "Lost", "price": 1, "restaurant_id": Uuid::new_v4()})),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, fetched) = app.call("GET", &format!("/menu-items/{item_id}"), None).await;
    assert_eq!(fetched, updated);

    app.finish().await;
}

#[tokio::test]
async fn reconnect_reruns_table_creation_and_keeps_rows() {
    let Some(app) = TestApp::start().await else { return };

    let created = app.create_restaurant("Survivor").await;
    let id = created["id"].as_str().unwrap().to_string();

    app.gateway.disconnect().await;
    assert!(!app.gateway.is_connected());
    let (status, _) = app.call("GET", "/restaurants/", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    app.gateway.connect().await.expect("reconnect runs table creation again");
    assert!(app.gateway.is_connected());
    app.gateway.connect().await.expect("connect while connected is a no-op");

    let (status, fetched) = app.call("GET", &format!("/restaurants/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = app.call("GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    app.finish().await;
}
