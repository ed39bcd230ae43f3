//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use lplan_app::message::Message;
use lplan_app::process::process_message;
use lplan_app::signals;
use lplan_app::state::AppState;
use lplan_app::ModalNotifier;
use lplan_client::PlanGenerator;
use lplan_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the TUI until the user quits
pub async fn run<G>(mut state: AppState, generator: Arc<G>) -> Result<()>
where
    G: PlanGenerator + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    let notifier = ModalNotifier::new(msg_tx.clone());

    info!("TUI started (endpoint {})", state.settings.endpoint.url);
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &generator, &notifier);

    ratatui::restore();
    info!("TUI stopped");
    result
}

/// Main event loop
fn run_loop<G>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    generator: &Arc<G>,
    notifier: &ModalNotifier,
) -> Result<()>
where
    G: PlanGenerator + Sync + 'static,
{
    while !state.should_quit() {
        // Generation results, notices and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, generator, notifier);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, generator, notifier);
        }
    }

    Ok(())
}
