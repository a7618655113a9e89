use axum::serve;
use f1_dashboard_api::routes::make_app;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let app = match make_app().await {
        Ok(app) => app,
        Err(err) => panic!("{}", err),
    };

    // Bind to a TCP listener
    let listener = TcpListener::bind("127.0.0.1:3000").await;
    info!("Listening on http://127.0.0.1:3000");

    match listener {
        Ok(res) => serve(res, app).await.unwrap(),
        Err(err) => panic!("{}", err),
    }
}
