use actix_cors::Cors;
use actix_web::{web, web::Data, App, HttpResponse, HttpServer};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::fixtures::FixtureStore;
use crate::graphql::{build_schema, GraphQLSchema};

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServingConfig {
    pub port: u16,
}

impl Default for ServingConfig {
    fn default() -> Self {
        ServingConfig { port: 8000 }
    }
}

pub async fn run_and_serve(config: ServingConfig, store: FixtureStore) -> std::io::Result<()> {
    let schema: GraphQLSchema = build_schema(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(TracingLogger::default())
            .app_data(Data::new(schema.clone()))
            .configure(configure)
    })
    .bind(("0.0.0.0", config.port))?;

    info!("Server is running on port {}", config.port);
    server.run().await
}

/// Any origin, method and header is accepted.
fn cors() -> Cors {
    Cors::permissive()
}

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(GRAPHQL_PATH)
            .route(web::post().to(index))
            .route(web::get().to(index_playground)),
    );
}

async fn index(schema: web::Data<GraphQLSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn index_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new(GRAPHQL_PATH)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::{header, Method};
    use actix_web::test;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::fixtures::sample;

    use super::*;

    fn schema() -> GraphQLSchema {
        build_schema(FixtureStore::new(
            vec![sample::user(1, "Ann", "Lee")],
            vec![sample::todo(10, 1, false), sample::todo(11, 999, true)],
        ))
    }

    #[actix_web::test]
    async fn post_executes_query_with_cors_headers() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .app_data(Data::new(schema()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(GRAPHQL_PATH)
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .set_json(json!({ "query": "{ getTodos { id fullName } }" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "data": {
                    "getTodos": [
                        { "id": "10", "fullName": "Ann Lee" },
                        { "id": "11", "fullName": "" },
                    ]
                }
            })
        );
    }

    #[actix_web::test]
    async fn preflight_is_accepted_from_any_origin() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .app_data(Data::new(schema()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(GRAPHQL_PATH)
            .insert_header((header::ORIGIN, "https://somewhere.example"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let allowed = resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok());
        assert!(matches!(allowed, Some("https://somewhere.example") | Some("*")));
    }

    #[actix_web::test]
    async fn invalid_query_returns_graphql_errors() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(schema()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(GRAPHQL_PATH)
            .set_json(json!({ "query": "{ getTodos { nope } }" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let errors = body["errors"].as_array().expect("errors array");
        assert!(!errors.is_empty());
        assert!(errors[0]["message"].as_str().unwrap_or_default().contains("nope"));
    }

    #[actix_web::test]
    async fn get_serves_playground() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri(GRAPHQL_PATH).to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("text/html; charset=utf-8")
        );
    }
}
