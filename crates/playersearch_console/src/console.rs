use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use playersearch_infrastructure::services::ServiceRegistry;
use playersearch_infrastructure::settings::Settings;
use playersearch_interface::players::service::PlayersServiceHandle;

use crate::commands::{Command, HELP};
use crate::render::{render_state, RenderOptions};
use crate::search_controller::SearchController;

pub struct ConsoleController {
    controller: SearchController,
    options: RenderOptions,
    output: UnboundedSender<String>,
    // Searches run concurrently with the prompt, no cancellation.
    searches: JoinSet<()>,
}

impl ConsoleController {
    pub fn new(
        players_service: PlayersServiceHandle,
        settings: &Settings,
        output: UnboundedSender<String>,
    ) -> Self {
        Self {
            controller: SearchController::new(players_service, &settings.search),
            options: RenderOptions {
                show_details: settings.render.show_details,
                show_fetch_errors: settings.search.show_fetch_errors,
            },
            output,
            searches: JoinSet::new(),
        }
    }

    pub async fn run(settings: Settings, service_registry: ServiceRegistry) {
        info!(environment = %settings.environment, "searching players on {}", settings.service);

        let (output, mut printer) = mpsc::unbounded_channel::<String>();
        let printing = tokio::spawn(async move {
            while let Some(text) = printer.recv().await {
                println!("{}", text);
            }
        });

        let mut console = Self::new(service_registry.players_service, &settings, output);
        console.serve(BufReader::new(tokio::io::stdin())).await;

        // Closing the last sender ends the printer once everything is flushed.
        drop(console);
        if let Err(e) = printing.await {
            error!("the output task stopped unexpectedly: {}", e);
        }
    }

    // Reads commands until `/quit` or the end of the input. On end of input the
    // searches still in flight are awaited, `/quit` drops them.
    pub async fn serve<R: AsyncBufRead + Unpin>(&mut self, reader: R) {
        self.say(HELP);

        let mut lines = reader.lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    error!("could not read the input: {}", e);
                    break;
                }
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => {
                    self.searches.abort_all();
                    return;
                }
                Ok(command) => self.handle(command).await,
                Err(e) => self.say(e.to_string()),
            }
        }

        while self.searches.join_next().await.is_some() {}
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::Search(text) => {
                self.controller.set_input(text);
                self.dispatch().await;
            }
            Command::Input(text) => {
                self.controller.set_input(text);
                self.say(format!("Input: '{}'", self.controller.input()));
            }
            Command::Mode(mode) => {
                self.controller.set_mode(mode);
                self.say(format!("Search mode: {}", mode));
            }
            Command::Rerun => self.dispatch().await,
            Command::Show => {
                let state = self.controller.state().await;
                self.say(render_state(&state, &self.options));
            }
            Command::Help => self.say(HELP),
            Command::Quit => {}
        }
    }

    async fn dispatch(&mut self) {
        let pending = match self.controller.begin_search().await {
            Ok(pending) => pending,
            Err(e) => {
                debug!("search skipped: {}", e);
                return;
            }
        };

        self.say(format!(
            "Searching players by {} for '{}'...",
            pending.mode(),
            pending.query()
        ));

        // Release the searches that already finished.
        while self.searches.try_join_next().is_some() {}

        let output = self.output.clone();
        let options = self.options;
        self.searches.spawn(async move {
            if let Some(state) = pending.run().await {
                let _ = output.send(render_state(&state, &options));
            }
        });
    }

    fn say(&self, text: impl Into<String>) {
        // The receiver only goes away on shutdown.
        let _ = self.output.send(text.into());
    }
}
