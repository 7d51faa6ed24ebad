use mock_server::{response, Routes};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");

    let routes = Routes::new().route(
        "/",
        response(
            200,
            "OK",
            &[("Content-Type", "text/plain")],
            "hello from mock-server\n",
        ),
    );
    mock_server::run(listener, routes).await
}
