use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use tokio::runtime::Handle;

use crate::common::ChatCommand;
use crate::config::AppConfig;
use crate::identity::{self, Identity};
use crate::network::{ChatApi, ChatClientHandle};
use crate::storage::LocalStore;

use super::Page;
use super::components::{
    about, chat_area, chat_header, home, input_bar,
    name_prompt::{self, NamePromptAction},
    nav, toasts,
};
use super::state::AppState;

/// Frames are also driven by the clock (badge expiry, toasts, polled events).
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct ChatApp {
    page: Page,
    config: AppConfig,
    runtime: Handle,
    api: Arc<dyn ChatApi>,
    store: LocalStore,
    identity: Identity,
    state: AppState,
    /// Present only while the chat view is mounted.
    client: Option<ChatClientHandle>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        runtime: Handle,
        api: Arc<dyn ChatApi>,
        store: LocalStore,
        identity: Identity,
    ) -> Self {
        Self::with_parts(config, runtime, api, store, identity)
    }

    fn with_parts(
        config: AppConfig,
        runtime: Handle,
        api: Arc<dyn ChatApi>,
        store: LocalStore,
        identity: Identity,
    ) -> Self {
        let state = AppState::new(config.new_message_window());
        Self {
            page: Page::Home,
            config,
            runtime,
            api,
            store,
            identity,
            state,
            client: None,
        }
    }

    fn navigate(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        if self.page == Page::Chat {
            self.unmount_chat();
        }
        self.page = page;
        if page == Page::Chat {
            self.mount_chat();
        }
    }

    fn mount_chat(&mut self) {
        self.state = AppState::new(self.config.new_message_window());
        self.client = Some(ChatClientHandle::spawn(
            &self.runtime,
            Arc::clone(&self.api),
            &self.identity,
            self.config.poll_interval(),
        ));
        log::info!("Chat view mounted as {}", self.identity.display_name());
    }

    fn unmount_chat(&mut self) {
        if self.client.take().is_some() {
            log::info!("Chat view unmounted");
        }
    }

    fn handle_chat_events(&mut self, now: Instant) {
        let Some(client) = self.client.as_mut() else {
            return;
        };
        while let Some(event) = client.try_recv() {
            self.state.apply_event(event, now);
        }
    }

    fn send_message(&mut self) {
        let Some(text) = self.state.take_outgoing() else {
            return;
        };
        let queued = self
            .client
            .as_ref()
            .is_some_and(|client| client.send(ChatCommand::SendMessage(text)));
        if !queued {
            self.state.sending = false;
        }
    }

    fn submit_name(&mut self, now: Instant) {
        match identity::set_display_name(&self.store, &mut self.identity, &self.state.name_input)
        {
            Ok(Some(name)) => {
                log::info!("Display name set to {name}");
                self.state.name_saved(&name, now);
                if let Some(client) = &self.client {
                    client.send(ChatCommand::SetUsername(name));
                }
            }
            Ok(None) => {}
            Err(err) => log::error!("Failed to save display name: {err}"),
        }
    }

    fn render_chat(&mut self, ui: &mut egui::Ui, now: Instant) {
        let new_message = self.state.new_message.is_active(now);
        if chat_header::render(ui, self.identity.display_name(), new_message) {
            self.state.renaming = true;
            self.state.name_input = self.identity.username.clone().unwrap_or_default();
        }
        ui.separator();

        chat_area::render(
            ui,
            &self.state.messages,
            &self.identity.user_id,
            &mut self.state.scroll_to_bottom,
        );

        ui.separator();
        let can_send = self.state.can_send();
        if input_bar::render(ui, &mut self.state.input_text, can_send) {
            self.send_message();
        }
    }

    fn render_overlays(&mut self, ctx: &egui::Context, now: Instant) {
        let first_name = self.identity.needs_name_prompt();
        if first_name || self.state.renaming {
            match name_prompt::render(ctx, &mut self.state.name_input, !first_name) {
                Some(NamePromptAction::Submit) => self.submit_name(now),
                Some(NamePromptAction::Cancel) => {
                    self.state.renaming = false;
                    self.state.name_input.clear();
                }
                None => {}
            }
        }

        toasts::render(ctx, &mut self.state.toasts, now);
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.handle_chat_events(now);

        let mut target = None;
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            target = nav::render(ui, self.page);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Home => {
                if let Some(page) = home::render(ui) {
                    target = Some(page);
                }
            }
            Page::About => about::render(ui),
            Page::Chat => self.render_chat(ui, now),
        });

        if self.page == Page::Chat {
            self.render_overlays(ctx, now);
        }

        if let Some(page) = target {
            self.navigate(page);
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
