use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::build_router;
use server::state::ServerState;

fn app() -> Router {
    build_router(ServerState::in_memory(), CorsLayer::very_permissive())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder.header("content-type", "application/json").body(Body::from(v.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

async fn crear_ciudad(app: &Router, nombre: &str, pais: &str) -> anyhow::Result<String> {
    let (status, body) = call(app, Method::POST, "/cities", Some(json!({"nombre": nombre, "pais": pais, "numeroHabitantes": 100000}))).await?;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    Ok(body["id"].as_str().unwrap_or_default().to_string())
}

async fn crear_supermercado(app: &Router, nombre: &str) -> anyhow::Result<String> {
    let body = json!({"nombre": nombre, "longitud": -57.63, "latitud": -25.28, "paginaWeb": "https://www.superseis.com.py"});
    let (status, body) = call(app, Method::POST, "/supermarkets", Some(body)).await?;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    Ok(body["id"].as_str().unwrap_or_default().to_string())
}

#[tokio::test]
async fn health_and_openapi() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = call(&app, Method::GET, "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/cities/{ciudadId}/supermarkets").is_some());
    Ok(())
}

#[tokio::test]
async fn city_crud_round() -> anyhow::Result<()> {
    let app = app();
    let id = crear_ciudad(&app, "Ciudad del Este", "Paraguay").await?;

    let (status, body) = call(&app, Method::GET, &format!("/cities/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numeroHabitantes"], 100000);
    assert_eq!(body["supermercados"], json!([]));

    let (status, list) = call(&app, Method::GET, "/cities", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let update = json!({"nombre": "Encarnación", "pais": "Paraguay", "numeroHabitantes": 130000});
    let (status, body) = call(&app, Method::PUT, &format!("/cities/{id}"), Some(update)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre"], "Encarnación");

    let (status, _) = call(&app, Method::DELETE, &format!("/cities/{id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = call(&app, Method::GET, &format!("/cities/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No se encontró la ciudad con el id suministrado");
    Ok(())
}

#[tokio::test]
async fn city_outside_whitelist_is_rejected() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = call(&app, Method::POST, "/cities", Some(json!({"nombre": "Santiago", "pais": "Chile", "numeroHabitantes": 6000000}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["message"], "El país al que pertenece la ciudad debe ser Argentina, Ecuador ó Paraguay");
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_are_rejected_before_the_managers() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = call(&app, Method::POST, "/cities", Some(json!({"nombre": "Quito"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"].as_array().map(Vec::len), Some(2));

    let (status, body) = call(&app, Method::POST, "/supermarkets", Some(json!({"nombre": "Supermercado Santa María", "longitud": "oeste"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_array().is_some_and(|d| d.iter().any(|f| f["field"] == "paginaWeb")));
    Ok(())
}

#[tokio::test]
async fn unparseable_ids_are_not_found() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/supermarkets/0", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No se encontró un supermercado con el id suministrado");

    let (status, _) = call(&app, Method::DELETE, "/cities/0", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn supermarket_name_rule() -> anyhow::Result<()> {
    let app = app();
    let body = json!({"nombre": "Stock", "longitud": 1.0, "latitud": 2.0, "paginaWeb": "https://stock.com.py"});
    let (status, body) = call(&app, Method::POST, "/supermarkets", Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "El nombre del supermercado debe tener más de 10 caracteres");

    let id = crear_supermercado(&app, "Stock Mariscal López").await?;
    let short = json!({"nombre": "Stock", "longitud": 1.0, "latitud": 2.0, "paginaWeb": "https://stock.com.py"});
    let (status, _) = call(&app, Method::PUT, &format!("/supermarkets/{id}"), Some(short)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(&app, Method::GET, &format!("/supermarkets/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre"], "Stock Mariscal López");
    assert_eq!(body["paginaWeb"], "https://www.superseis.com.py");
    Ok(())
}

#[tokio::test]
async fn association_lifecycle() -> anyhow::Result<()> {
    let app = app();
    let ciudad = crear_ciudad(&app, "Guayaquil", "Ecuador").await?;
    let s1 = crear_supermercado(&app, "Supermaxi Urdesa Central").await?;
    let s2 = crear_supermercado(&app, "Mi Comisariato Centro").await?;
    let base = format!("/cities/{ciudad}/supermarkets");

    let (status, body) = call(&app, Method::POST, &format!("{base}/{s1}"), None).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["supermercados"].as_array().map(Vec::len), Some(1));

    // linking twice changes nothing
    let (status, body) = call(&app, Method::POST, &format!("{base}/{s1}"), None).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["supermercados"].as_array().map(Vec::len), Some(1));

    let (status, body) = call(&app, Method::GET, &format!("{base}/{s2}"), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Not Associated");
    assert_eq!(body["message"], "El supermercado con el id suministrado no está asociado con la ciudad");

    let (status, body) = call(&app, Method::PUT, &base, Some(json!([{"id": s2}]))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["supermercados"][0]["id"], json!(s2));

    let (status, list) = call(&app, Method::GET, &base, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, body) = call(&app, Method::GET, &format!("/supermarkets/{s2}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ciudades"][0]["nombre"], "Guayaquil");

    let (status, _) = call(&app, Method::DELETE, &format!("{base}/{s2}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = call(&app, Method::DELETE, &format!("{base}/{s2}"), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, list) = call(&app, Method::GET, &base, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn replace_all_with_unknown_supermarket_is_not_found() -> anyhow::Result<()> {
    let app = app();
    let ciudad = crear_ciudad(&app, "Córdoba", "Argentina").await?;
    let s1 = crear_supermercado(&app, "Hiper Libertad Córdoba").await?;
    let base = format!("/cities/{ciudad}/supermarkets");
    call(&app, Method::POST, &format!("{base}/{s1}"), None).await?;

    let body = json!([{"id": "00000000-0000-0000-0000-000000000000"}]);
    let (status, _) = call(&app, Method::PUT, &base, Some(body)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::PUT, &base, Some(json!({"id": s1}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = call(&app, Method::GET, &base, None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn deleting_a_supermarket_unlinks_it() -> anyhow::Result<()> {
    let app = app();
    let ciudad = crear_ciudad(&app, "Mendoza", "Argentina").await?;
    let s1 = crear_supermercado(&app, "Vea Mendoza Centro").await?;
    call(&app, Method::POST, &format!("/cities/{ciudad}/supermarkets/{s1}"), None).await?;

    let (status, _) = call(&app, Method::DELETE, &format!("/supermarkets/{s1}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = call(&app, Method::GET, &format!("/cities/{ciudad}"), None).await?;
    assert_eq!(body["supermercados"], json!([]));
    Ok(())
}

#[tokio::test]
async fn replace_all_on_missing_city_reports_the_city() -> anyhow::Result<()> {
    let app = app();
    let uri = "/cities/11111111-1111-1111-1111-111111111111/supermarkets";
    let (status, body) = call(&app, Method::PUT, uri, Some(json!([{"id": "0"}]))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No se encontró la ciudad con el id suministrado");

    let ciudad = crear_ciudad(&app, "Luque", "Paraguay").await?;
    let (status, body) = call(&app, Method::PUT, &format!("/cities/{ciudad}/supermarkets"), Some(json!([{"id": "0"}]))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No se encontró un supermercado con el id suministrado");
    Ok(())
}
