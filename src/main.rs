#[tokio::main]
async fn main() -> std::io::Result<()> {
    lingua_relay::run_with_config().await
}
