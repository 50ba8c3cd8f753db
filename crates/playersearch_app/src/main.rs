use playersearch_infrastructure::{services::ServiceRegistry, settings::Settings};

use playersearch_console::console::ConsoleController;
use playersearch_console::logger;

#[tokio::main]
async fn main() {
    let settings = Settings::new().expect("Could not parse settings");

    logger::setup(&settings.logger.level);

    let services =
        ServiceRegistry::new(&settings).expect("Could not initialize the player service");

    ConsoleController::run(settings, services).await;
}
