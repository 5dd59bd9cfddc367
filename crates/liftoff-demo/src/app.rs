//! Demo application state, messages and view
//!
//! Hosts one modal whose slotted content edits the modal's own title, and
//! an independent bus listener that mirrors the last broadcast status in the
//! page body.

use iced::widget::{button, column, container, row, stack, text, text_input};
use iced::{Element, Length, Size, Subscription, Task, Theme};

use liftoff_widgets::theme::PAGE_BG;
use liftoff_widgets::{
    bus_subscription, BusEvent, BusSubscription, EventBus, ModalMessage, ModalStatus,
    ModalWidget, MODAL_EVENT,
};

use crate::config::{self, Config};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the modal widget
    Modal(ModalMessage),
    /// Notification seen by the page-level listener
    StatusEvent(BusEvent),
    WindowResized(Size),
    /// Title input edited inside the dialog
    DraftTitleChanged(String),
    ApplyTitle,
    SaveConfig,
    SaveConfigComplete(Result<(), String>),
}

/// Demo application
pub struct DemoApp {
    config: Config,
    modal: ModalWidget,
    /// External listener, independent of the widget
    status_listener: BusSubscription,
    last_status: Option<bool>,
    notifications_seen: usize,
    viewport_width: f32,
    draft_title: String,
    status: String,
}

impl DemoApp {
    /// Create the app and attach the modal to a fresh bus
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let bus = EventBus::new();
        let status_listener = bus.subscribe(MODAL_EVENT);

        let mut modal = ModalWidget::new(bus);
        if !config.modal.title.is_empty() {
            modal = modal.with_title(config.modal.title.clone());
        }
        modal.attach();

        if config.modal.start_open {
            log::info!("Opening modal on startup");
            modal.open();
        }

        let app = Self {
            draft_title: config.modal.title.clone(),
            viewport_width: config.window.width,
            config,
            modal,
            status_listener,
            last_status: None,
            notifications_seen: 0,
            status: String::new(),
        };

        (app, Task::none())
    }

    /// Update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Modal(msg) => self.modal.update(msg),
            Message::StatusEvent(event) => match ModalStatus::from_event(&event) {
                Ok(status) => {
                    self.last_status = Some(status.modal_status);
                    self.notifications_seen += 1;
                }
                Err(e) => log::warn!("Page listener: ignoring notification: {}", e),
            },
            Message::WindowResized(size) => {
                self.viewport_width = size.width;
            }
            Message::DraftTitleChanged(title) => {
                self.draft_title = title;
            }
            Message::ApplyTitle => {
                let title = self.draft_title.trim().to_string();
                log::info!("Setting modal title to {:?}", title);
                self.config.modal.title = title.clone();
                self.modal.update(ModalMessage::SetTitle(Some(title)));
            }
            Message::SaveConfig => {
                let config = self.config.clone();
                self.status = String::from("Saving...");
                return Task::perform(
                    async move {
                        config::save_config(&config, &config::default_config_path())
                            .map_err(|e| e.to_string())
                    },
                    Message::SaveConfigComplete,
                );
            }
            Message::SaveConfigComplete(result) => match result {
                Ok(()) => {
                    log::info!("Config saved successfully");
                    self.status = String::from("Config saved");
                }
                Err(e) => {
                    log::error!("Failed to save config: {}", e);
                    self.status = format!("Failed to save: {}", e);
                }
            },
        }

        Task::none()
    }

    /// Render the UI
    pub fn view(&self) -> Element<'_, Message> {
        let last = match self.last_status {
            None => String::from("Modal has not been toggled yet"),
            Some(true) => String::from("Last broadcast: open"),
            Some(false) => String::from("Last broadcast: closed"),
        };

        let page = container(
            column![
                text("Liftoff").size(32),
                text("Press the round button in the corner to open the dialog.").size(14),
                text(last).size(14),
                text(format!("Notifications seen: {}", self.notifications_seen)).size(12),
                text(self.status.as_str()).size(12),
            ]
            .spacing(8),
        )
        .center(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(PAGE_BG.into()),
            text_color: Some(iced::Color::BLACK),
            ..Default::default()
        });

        let slot: Element<'_, Message> = column![
            text("Rename this dialog:").size(14),
            text_input("Title", &self.draft_title)
                .on_input(Message::DraftTitleChanged)
                .on_submit(Message::ApplyTitle)
                .padding(6),
            row![
                button(text("Apply")).on_press(Message::ApplyTitle),
                button(text("Save")).on_press(Message::SaveConfig),
            ]
            .spacing(8),
        ]
        .spacing(8)
        .into();

        let modal = self.modal.view(self.viewport_width, slot, Message::Modal);

        stack![page, modal].into()
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Bus notifications for the widget and the page listener, plus resizes
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.modal.subscription().map(Message::Modal),
            bus_subscription(&self.status_listener).map(Message::StatusEvent),
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        ])
    }

    pub fn modal(&self) -> &ModalWidget {
        &self.modal
    }
}
