use membership::configuration::Settings;
use membership::startup::Application;
use membership::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("membership".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = Settings::get().expect("Failed to read configuration.");
    let app = Application::build(config).await?;
    app.server.await?;

    Ok(())
}
