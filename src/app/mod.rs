// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the modal
//! viewer and the toast notifications.
//!
//! The `App` struct wires the components together and translates their
//! effects into work: opening the modal, starting downloads, fetching images
//! and the one-shot stats request.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery::manifest;
use crate::i18n::fluent::I18n;
use crate::net::{stats, HttpClient};
use crate::ui::gallery::{self, GalleryView};
use crate::ui::image_cache::ImageCache;
use crate::ui::modal::{self, ModalController};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// `None` when the configured server URL is unusable.
    client: Option<HttpClient>,
    download_dir: PathBuf,
    gallery: GalleryView,
    modal: ModalController,
    images: ImageCache,
    notifications: notifications::Manager,
    /// Instant of the last tick; every time-dependent view reads it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.gallery.items().len())
            .field("modal_visible", &self.modal.is_visible())
            .field("download_dir", &self.download_dir)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, translations and the manifest, then starts the stats
    /// request and the image fetches.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(server) = flags.server {
            config.server.url = server;
        }

        let i18n = I18n::new(flags.lang, &config);
        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let client = match HttpClient::new(&config.server.url, config.server.session_cookie.as_deref()) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(error = %err, "HTTP client unavailable, images will not load");
                None
            }
        };

        let items = match flags.manifest_path.as_deref() {
            Some(path) => match manifest::load_from_path(Path::new(path)) {
                Ok(items) => {
                    tracing::info!(path, count = items.len(), "Gallery manifest loaded");
                    items
                }
                Err(err) => {
                    tracing::warn!(path, error = %err, "Gallery manifest could not be loaded");
                    notifications.push(Notification::warning("notification-manifest-load-error"));
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let now = Instant::now();
        let mut gallery = GalleryView::new(items);
        gallery.start_entrance(now);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            download_dir: paths::get_cli_download_dir().unwrap_or_else(|| config.download_dir()),
            images: ImageCache::new(config.image_cache_entries()),
            client,
            gallery,
            modal: ModalController::new(),
            notifications,
            now,
        };

        let mut tasks = Vec::new();
        if let Some(client) = app.client.clone() {
            tasks.push(Task::perform(stats::fetch_user_stats(client), Message::StatsFetched));
        }

        tasks.push(app.load_visible_images());

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let count = self.gallery.items().len();
        if count == 0 {
            self.i18n.tr("window-title")
        } else {
            self.i18n
                .tr_with_args("window-title-with-count", &[("count", count.to_string().as_str())])
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_escape_subscription(self.modal.is_visible()),
            subscription::create_tick_subscription(
                self.gallery.is_animating(self.now),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => match self.gallery.handle_message(message) {
                gallery::Effect::None => Task::none(),
                gallery::Effect::OpenModal(id) => {
                    let Some(item) = self.gallery.item(id) else {
                        return Task::none();
                    };
                    self.modal.open_item(item);
                    let url = item.image_url.clone();
                    update::request_image(&mut self.images, self.client.as_ref(), &url)
                }
                gallery::Effect::Download(target) => self.download(target),
                gallery::Effect::LoadImages(_) => self.load_visible_images(),
            },
            Message::Modal(message) => match self.modal.handle_message(message) {
                modal::Effect::None => Task::none(),
                modal::Effect::Download(target) => self.download(target),
            },
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::EscapePressed => {
                self.modal.handle_escape();
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                self.notifications.tick_at(now);
                Task::none()
            }
            Message::StatsFetched(result) => {
                stats::log_stats_result(&result);
                Task::none()
            }
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(&mut self.images, &url, result);
                Task::none()
            }
            Message::DownloadFinished { filename, result } => {
                update::handle_download_finished(&filename, result);
                Task::none()
            }
        }
    }

    fn load_visible_images(&mut self) -> Task<Message> {
        update::request_images(
            &mut self.images,
            self.client.as_ref(),
            self.gallery
                .visible_items()
                .iter()
                .map(|item| item.image_url.as_str()),
        )
    }

    fn download(&mut self, target: crate::gallery::DownloadTarget) -> Task<Message> {
        update::begin_download(
            &mut self.notifications,
            self.client.as_ref(),
            target,
            self.download_dir.clone(),
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            modal: &self.modal,
            images: &self.images,
            notifications: &self.notifications,
            now: self.now,
        })
    }
}
