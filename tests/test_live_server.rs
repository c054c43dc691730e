//! Live-server test: binds an ephemeral port, serves the embedded catalog and
//! calls it over real HTTP.

use product_lookup_api::{build_app, AppState, Catalog};
use reqwest::StatusCode;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn serves_lookups_over_http() -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(AppState::new(Catalog::embedded()?));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    let product = client
        .get(format!("{}/product/101", base_url))
        .send()
        .await?;
    assert_eq!(product.status(), StatusCode::OK);
    let product = product.json::<serde_json::Value>().await?;
    assert_eq!(product["status"], "success");
    assert_eq!(product["product"]["id"], 101);

    let distance = client
        .get(format!("{}/warehouse/distance", base_url))
        .query(&[("postal_code", "465540")])
        .send()
        .await?;
    assert_eq!(distance.status(), StatusCode::OK);
    let distance = distance.json::<serde_json::Value>().await?;
    assert_eq!(distance["distance_in_kilometers"], 138.6);

    let missing = client
        .get(format!("{}/product/999", base_url))
        .send()
        .await?;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    let missing = missing.json::<serde_json::Value>().await?;
    assert_eq!(missing["status"], "error");
    assert_eq!(
        missing["message"],
        "Invalid product id. Valid product id range is 100 to 110."
    );

    let docs = client
        .get(format!("{}/api-docs/", base_url))
        .send()
        .await?;
    assert_eq!(docs.status(), StatusCode::OK);

    server.abort();
    let _ = server.await;
    Ok(())
}
