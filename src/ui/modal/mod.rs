// SPDX-License-Identifier: MPL-2.0
//! Image modal viewer.
//!
//! A single [`ModalController`] is reused for every gallery item: opening it
//! overwrites the displayed fields, closing only hides it. While it is
//! visible the gallery behind it must not scroll.

mod view;

pub use view::view;

use crate::gallery::{DownloadTarget, GalleryItem};

/// Messages emitted by the modal view.
#[derive(Debug, Clone)]
pub enum Message {
    /// Press on the dimmed area around the panel.
    BackdropPressed,
    ClosePressed,
    DownloadPressed,
}

/// Side effects the application performs for the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Download(DownloadTarget),
}

/// Everything the modal displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub image_url: String,
    pub title: String,
    pub timestamp: String,
    pub description: Option<String>,
    /// Extra labelled fields as `(i18n label key, value)`.
    pub details: Vec<(&'static str, String)>,
    /// What the modal's download button fetches.
    pub download: DownloadTarget,
    pub visible: bool,
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `url` with the given caption. Inputs are displayed as given.
    ///
    /// The modal's download button will fetch `url` and save it as `title`.
    pub fn open(
        &mut self,
        url: impl Into<String>,
        title: impl Into<String>,
        timestamp: impl Into<String>,
        description: Option<String>,
    ) {
        let url = url.into();
        let title = title.into();
        self.state = ModalState {
            download: DownloadTarget::new(url.clone(), title.clone()),
            image_url: url,
            title,
            timestamp: timestamp.into(),
            description,
            details: Vec::new(),
            visible: true,
        };
        tracing::debug!(url = %self.state.image_url, "Modal opened");
    }

    /// Shows a gallery item, downloading through the item's own target.
    pub fn open_item(&mut self, item: &GalleryItem) {
        self.open(
            item.image_url.clone(),
            item.filename.clone(),
            item.display_timestamp(),
            item.prompt.clone(),
        );
        self.state.download = item.download.clone();
        self.state.details = [
            ("modal-model-label", &item.model),
            ("modal-size-label", &item.size),
            ("modal-quality-label", &item.quality),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.clone().map(|v| (label, v)))
        .collect();
    }

    /// Hides the modal. The displayed fields are kept until the next open.
    pub fn close(&mut self) {
        if self.state.visible {
            tracing::debug!("Modal closed");
        }
        self.state.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    /// Gallery scrolling is locked exactly while the modal is shown.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.state.visible
    }

    #[must_use]
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Escape closes a visible modal. Returns whether anything changed.
    pub fn handle_escape(&mut self) -> bool {
        if !self.state.visible {
            return false;
        }
        self.close();
        true
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::BackdropPressed | Message::ClosePressed => {
                self.close();
                Effect::None
            }
            Message::DownloadPressed => Effect::Download(self.state.download.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::ItemId;

    fn item() -> GalleryItem {
        let mut item = GalleryItem::new(
            ItemId(3),
            "/media/fox.png",
            "fox.png",
            "2024-05-01 10:20:30",
        )
        .with_prompt("a red fox")
        .with_download(DownloadTarget::new("/media/fox-full.png", "fox-full.png"));
        item.model = Some("img3".to_string());
        item.quality = Some("hd".to_string());
        item
    }

    #[test]
    fn new_modal_is_hidden() {
        let modal = ModalController::new();
        assert!(!modal.is_visible());
        assert!(!modal.is_scroll_locked());
    }

    #[test]
    fn open_sets_exactly_the_given_values() {
        let mut modal = ModalController::new();
        modal.open("https://x/a.png", "a.png", "2024-01-01", Some("desc".into()));

        let state = modal.state();
        assert_eq!(state.image_url, "https://x/a.png");
        assert_eq!(state.title, "a.png");
        assert_eq!(state.timestamp, "2024-01-01");
        assert_eq!(state.description.as_deref(), Some("desc"));
        assert!(modal.is_visible());
        assert!(modal.is_scroll_locked());
    }

    #[test]
    fn open_accepts_empty_values() {
        let mut modal = ModalController::new();
        modal.open("", "", "", None);
        assert!(modal.is_visible());
        assert_eq!(modal.state().image_url, "");
    }

    #[test]
    fn close_hides_and_unlocks_but_keeps_fields() {
        let mut modal = ModalController::new();
        modal.open("https://x/a.png", "a.png", "2024-01-01", None);
        modal.close();

        assert!(!modal.is_visible());
        assert!(!modal.is_scroll_locked());
        assert_eq!(modal.state().image_url, "https://x/a.png");
    }

    #[test]
    fn reopening_overwrites_previous_item() {
        let mut modal = ModalController::new();
        modal.open_item(&item());
        modal.open("/media/b.png", "b.png", "", None);

        let state = modal.state();
        assert_eq!(state.title, "b.png");
        assert!(state.description.is_none());
        assert!(state.details.is_empty());
        assert_eq!(state.download, DownloadTarget::new("/media/b.png", "b.png"));
    }

    #[test]
    fn open_item_uses_item_fields() {
        let mut modal = ModalController::new();
        modal.open_item(&item());

        let state = modal.state();
        assert_eq!(state.image_url, "/media/fox.png");
        assert_eq!(state.title, "fox.png");
        assert_eq!(state.timestamp, "2024-05-01 10:20");
        assert_eq!(state.description.as_deref(), Some("a red fox"));
        assert_eq!(
            state.details,
            vec![
                ("modal-model-label", "img3".to_string()),
                ("modal-quality-label", "hd".to_string()),
            ]
        );
    }

    #[test]
    fn escape_closes_only_when_visible() {
        let mut modal = ModalController::new();
        assert!(!modal.handle_escape());
        assert!(!modal.is_visible());

        modal.open("a", "b", "c", None);
        assert!(modal.handle_escape());
        assert!(!modal.is_visible());
        assert!(!modal.handle_escape());
    }

    #[test]
    fn backdrop_and_close_button_close() {
        let mut modal = ModalController::new();
        modal.open("a", "b", "c", None);
        assert_eq!(modal.handle_message(Message::BackdropPressed), Effect::None);
        assert!(!modal.is_visible());

        modal.open("a", "b", "c", None);
        assert_eq!(modal.handle_message(Message::ClosePressed), Effect::None);
        assert!(!modal.is_visible());
    }

    #[test]
    fn download_uses_current_target_and_keeps_modal_open() {
        let mut modal = ModalController::new();
        modal.open_item(&item());

        let effect = modal.handle_message(Message::DownloadPressed);
        assert_eq!(
            effect,
            Effect::Download(DownloadTarget::new("/media/fox-full.png", "fox-full.png"))
        );
        assert!(modal.is_visible());
    }
}
