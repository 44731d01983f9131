#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    legal_pages::server::run().await;
}

#[cfg(not(feature = "server"))]
fn main() {
    legal_pages::run_app();
}
