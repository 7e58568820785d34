use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use problem_details_api::shared::{
    infrastructure::persistence::database_service::DatabaseService,
    interfaces::rest::middleware::with_api_pipeline,
};
use serde_json::Value;
use tower::ServiceExt;

use super::{fakes::FakeDataStore, fixtures::fixture_routes};

pub struct DatabaseHarness {
    pub database: Arc<DatabaseService<FakeDataStore>>,
}

impl DatabaseHarness {
    pub fn store(&self) -> &FakeDataStore {
        self.database.store()
    }
}

pub fn create_database_harness() -> DatabaseHarness {
    DatabaseHarness {
        database: Arc::new(DatabaseService::new(FakeDataStore::new())),
    }
}

pub fn create_slow_database_harness(connect_delay: Duration) -> DatabaseHarness {
    DatabaseHarness {
        database: Arc::new(DatabaseService::new(FakeDataStore::with_connect_delay(
            connect_delay,
        ))),
    }
}

pub fn pipeline_app() -> Router {
    with_api_pipeline(fixture_routes())
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("infallible router")
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("json body")
}
