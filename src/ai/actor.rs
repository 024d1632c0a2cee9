//! Generation actor for async processing of reply requests

use tokio::sync::mpsc;

use super::client::HfClient;
use super::prompts::Tone;

/// Commands that can be sent to the generation actor
#[derive(Debug)]
pub enum AiCommand {
    /// Generate a reply for an email in the given tone.
    /// `seq` identifies the attempt so stale settlements can be discarded.
    GenerateReply {
        seq: u64,
        email: String,
        tone: Tone,
    },
    /// Shutdown the actor
    Shutdown,
}

/// Events emitted by the generation actor
#[derive(Debug, Clone)]
pub enum AiEvent {
    /// Reply text ready for attempt `seq`
    Reply { seq: u64, text: String },
    /// Attempt `seq` failed; `error` is the user-facing message
    Failed { seq: u64, error: String },
}

/// Handle for communicating with the generation actor
pub struct AiActorHandle {
    pub cmd_tx: mpsc::Sender<AiCommand>,
    pub event_rx: mpsc::Receiver<AiEvent>,
}

/// Spawn the generation actor task
pub fn spawn_ai_actor(client: HfClient) -> AiActorHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    let (event_tx, event_rx) = mpsc::channel(32);

    tokio::spawn(ai_actor_loop(client, cmd_rx, event_tx));

    AiActorHandle { cmd_tx, event_rx }
}

async fn ai_actor_loop(
    client: HfClient,
    mut cmd_rx: mpsc::Receiver<AiCommand>,
    event_tx: mpsc::Sender<AiEvent>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            AiCommand::GenerateReply { seq, email, tone } => {
                // One attempt per command; a failed attempt settles
                // immediately and the user re-triggers explicitly.
                let event = match client.generate_reply(&email, tone).await {
                    Ok(text) => AiEvent::Reply { seq, text },
                    Err(e) => AiEvent::Failed {
                        seq,
                        error: e.to_string(),
                    },
                };
                if event_tx.send(event).await.is_err() {
                    tracing::warn!("generation actor: event receiver dropped");
                    break;
                }
            }

            AiCommand::Shutdown => {
                break;
            }
        }
    }
}
