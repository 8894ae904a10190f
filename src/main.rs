#[tokio::main]
async fn main() {
    if let Err(e) = medtimeline_lib::run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
