use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use super::schema::PetSchema;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// Serve the schema over HTTP: GraphiQL on GET /, GraphQL on POST /.
pub async fn run_server(schema: PetSchema, port: u16) -> std::io::Result<()> {
    let app = Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)));

    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    tracing::info!(port, "GraphQL server listening");
    axum::serve(listener, app).await
}
