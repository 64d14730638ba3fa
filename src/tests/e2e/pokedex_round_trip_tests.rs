use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use crate::modules::pokemons::pokedex::Pokedex;
use crate::shared::infrastructure::snapshot_store::json_file::JsonFileSnapshotStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::create_pokemon::CreatePokemonBuilder;
use crate::tests::fixtures::state::read_json;

struct TempFile(PathBuf);

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[fixture]
fn pokemons_file() -> TempFile {
    TempFile(std::env::temp_dir().join(format!("pokedex_e2e_{}.json", Uuid::now_v7())))
}

async fn boot(path: &Path) -> Router {
    let store = Arc::new(JsonFileSnapshotStore::new(path));
    let pokedex = Pokedex::load(store).await.expect("load failed");
    router(AppState::new(pokedex))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

async fn snapshot_of_gets(app: &Router) -> Vec<(StatusCode, Value)> {
    let mut results = Vec::new();
    for id in -1..=7 {
        results.push(send(app, "GET", &format!("/api/pokemons/{id}"), None).await);
    }
    results
}

#[rstest]
#[tokio::test]
async fn it_should_replay_the_same_reads_after_reloading_from_the_file(pokemons_file: TempFile) {
    let app = boot(&pokemons_file.0).await;
    let bulbasaur = CreatePokemonBuilder::new().to_json();
    let charmander = CreatePokemonBuilder::new()
        .name(json!({"english": "Charmander", "japanese": "ヒトカゲ", "chinese": "小火龙", "french": "Salamèche"}))
        .types(json!(["fire"]))
        .image(json!("charmander.png"))
        .to_json();

    for body in [&bulbasaur, &charmander, &bulbasaur, &charmander] {
        let (status, _) = send(&app, "POST", "/api/pokemons", Some(body.clone())).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = send(&app, "PUT", "/api/pokemons/2", Some(json!({"image": "x.png"}))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", "/api/pokemons/3", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "POST", "/api/pokemons", Some(charmander)).await;
    assert_eq!(status, StatusCode::OK);

    let before = snapshot_of_gets(&app).await;
    let reloaded = boot(&pokemons_file.0).await;
    let after = snapshot_of_gets(&reloaded).await;

    assert_eq!(before, after);

    let found: Vec<i64> = after
        .iter()
        .filter(|(status, _)| *status == StatusCode::OK)
        .map(|(_, body)| body["pokemon"]["id"].as_i64().unwrap())
        .collect();
    assert_eq!(found, vec![1, 2, 4, 5]);
    assert_eq!(after[3].1["pokemon"]["image"], json!("x.png"));

    let (_, listing) = send(&reloaded, "GET", "/api/pokemons", None).await;
    assert!(listing["pokemons"][2].is_null());
}
