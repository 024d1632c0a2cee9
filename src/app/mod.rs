//! Application core - manages state and coordinates the generation actor

mod actions;
mod event_loop;
pub mod render_thread;
pub mod state;

use anyhow::Result;

use render_thread::RenderThread;

use crate::ai::{AiActorHandle, AiCommand, HfClient, spawn_ai_actor};
use crate::config::Config;
use crate::constants::API_TOKEN_ENV;
use crate::input::KeyBindings;
use state::AppState;

pub struct App {
    pub(crate) config: Config,
    pub(crate) state: AppState,
    pub(crate) bindings: KeyBindings,
    /// Generation actor handle (None when no API token is configured)
    pub(crate) ai_actor: Option<AiActorHandle>,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing changed.
    pub(crate) dirty: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let token = config
            .ai
            .resolve_token(std::env::var(API_TOKEN_ENV).ok());
        let token_configured = token.is_some();

        // Spawn the generation actor only with a credential in hand; a
        // missing token surfaces as a config error on the first attempt.
        let ai_actor = token.map(|token| {
            let client = HfClient::new(token, config.ai.endpoint.clone());
            spawn_ai_actor(client)
        });

        if !token_configured {
            tracing::warn!("no API token configured; generation will be refused");
        }

        let state = AppState {
            token_configured,
            ..Default::default()
        };

        let mut app = Self {
            config,
            state,
            bindings: KeyBindings::new(),
            ai_actor,
            dirty: true, // Start dirty for initial render
        };

        if token_configured {
            app.state
                .set_status("Paste an email, pick a tone, Ctrl+G to generate");
        } else {
            app.state
                .set_status("No API token - set REDRAFT_API_TOKEN or run 'redraft setup'");
        }

        app
    }

    pub async fn run(&mut self) -> Result<()> {
        // Spawn background render thread (owns terminal setup/teardown)
        let render_thread = RenderThread::spawn()?;

        // Run event loop
        let result = self.event_loop(&render_thread).await;

        // Shutdown render thread (handles terminal cleanup)
        render_thread.shutdown();

        // Shutdown the generation actor
        if let Some(ref ai) = self.ai_actor {
            ai.cmd_tx.send(AiCommand::Shutdown).await.ok();
        }

        result
    }
}
