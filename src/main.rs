#[tokio::main]
async fn main() -> std::io::Result<()> {
    sky_story::run_with_config().await.map(|_| ())
}
