#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    meeting_reminder::run().await
}
