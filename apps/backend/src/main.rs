#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ielts_practice_backend::run().await
}
