//! Main chat event loop
//!
//! Draws the current screen, feeds key and paste events to the app, and
//! runs each chat request on its own task so the UI keeps redrawing while
//! a reply is pending.

mod keybindings;
mod lifecycle;

pub use self::keybindings::{handle_key_event, handle_paste};
pub use self::lifecycle::{restore_terminal, setup_terminal, ChatTerminal};

use crate::core::app::{App, TurnRequest};
use crate::core::chat_client::{ChatBackend, ChatError, OpenAiClient};
use crate::core::router;
use crate::ui::renderer::ui;
use ratatui::crossterm::event::{self, Event};
use std::{error::Error, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

type TurnOutcome = (u64, Result<String, ChatError>);

pub async fn run_chat(mut app: App, client: reqwest::Client) -> Result<(), Box<dyn Error>> {
    let mut terminal = setup_terminal()?;
    info!(screen = ?app.screen, "Workbench UI started");

    let result = event_loop(&mut terminal, &mut app, &client).await;
    let restored = restore_terminal(&mut terminal);

    app.session.cancel_pending();
    info!("Workbench UI stopped");
    result?;
    restored
}

async fn event_loop(
    terminal: &mut ChatTerminal,
    app: &mut App,
    client: &reqwest::Client,
) -> Result<(), Box<dyn Error>> {
    let (tx, mut rx) = mpsc::unbounded_channel::<TurnOutcome>();

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(turn) = handle_key_event(app, key) {
                        spawn_turn(app, client, turn, tx.clone());
                    }
                }
                Event::Paste(text) => handle_paste(app, &text),
                _ => {}
            }
        }

        while let Ok((id, result)) = rx.try_recv() {
            app.complete_turn(id, result);
        }

        if app.should_exit() {
            return Ok(());
        }
    }
}

fn spawn_turn(
    app: &mut App,
    client: &reqwest::Client,
    turn: TurnRequest,
    tx: mpsc::UnboundedSender<TurnOutcome>,
) {
    let Some(backend) = openai_backend(app, client) else {
        app.complete_turn(turn.id, Err(ChatError::MissingApiKey));
        return;
    };
    spawn_request(backend, turn, tx);
}

fn openai_backend(app: &App, client: &reqwest::Client) -> Option<Arc<dyn ChatBackend>> {
    let api_key = app.api_key()?;
    Some(Arc::new(OpenAiClient::new(
        client.clone(),
        app.session.base_url.clone(),
        api_key,
    )))
}

/// Run `turn` on its own task. The outcome is sent on `tx` unless the
/// turn's token is cancelled first, in which case nothing is sent.
fn spawn_request(
    backend: Arc<dyn ChatBackend>,
    turn: TurnRequest,
    tx: mpsc::UnboundedSender<TurnOutcome>,
) -> JoinHandle<()> {
    let TurnRequest {
        id,
        mode,
        request,
        cancel_token,
    } = turn;

    tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => {
                debug!(request_id = id, "Chat request cancelled");
            }
            result = router::send(backend.as_ref(), mode, request) => {
                let _ = tx.send((id, result));
            }
        }
    })
}
