// SPDX-License-Identifier: MPL-2.0
//! Gallery grid component.
//!
//! Holds the loaded items and the little UI state that belongs to the grid
//! (hovered card, entrance clock). Presses are translated into [`Effect`]s
//! the application carries out: opening the modal or starting a download.

pub mod animation;
mod view;

pub use view::view;

use crate::gallery::{DownloadTarget, GalleryItem, ItemId};
use animation::{CardTransform, Entrance};
use std::ops::Range;
use std::time::Instant;

/// Where a press on a card landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOrigin {
    /// Anywhere on the card outside its download control.
    Card,
    /// The card's nested download control.
    DownloadControl,
}

#[derive(Debug, Clone)]
pub enum Message {
    Pressed { item: ItemId, origin: PressOrigin },
    HoverEnter(ItemId),
    HoverLeave(ItemId),
    /// The grid viewport moved or was resized.
    Scrolled {
        offset_y: f32,
        width: f32,
        height: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenModal(ItemId),
    Download(DownloadTarget),
    /// These items came into view and need their images.
    LoadImages(Range<usize>),
}

#[derive(Debug, Default)]
pub struct GalleryView {
    items: Vec<GalleryItem>,
    hovered: Option<ItemId>,
    entrance_start: Option<Instant>,
    /// Items near the viewport; all items until the first scroll report.
    visible: Range<usize>,
}

impl GalleryView {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let visible = 0..items.len();
        Self {
            items,
            hovered: None,
            entrance_start: None,
            visible,
        }
    }

    /// Starts the staggered entrance at `now`.
    pub fn start_entrance(&mut self, now: Instant) {
        self.entrance_start = Some(now);
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.get(id.index())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items currently in or next to the viewport, top to bottom.
    pub fn visible_items(&self) -> &[GalleryItem] {
        &self.items[self.visible.clone()]
    }

    #[must_use]
    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    #[must_use]
    pub fn transform(&self, id: ItemId) -> CardTransform {
        CardTransform::for_hover(self.hovered == Some(id))
    }

    /// Entrance state of `id`; settled when no entrance was started.
    #[must_use]
    pub fn entrance(&self, id: ItemId, now: Instant) -> Entrance {
        match self.entrance_start {
            Some(start) => animation::entrance_at(id.index(), start, now),
            None => Entrance::SETTLED,
        }
    }

    /// Whether some card is still entering at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.entrance_start {
            Some(start) if !self.items.is_empty() => {
                now < animation::entrance_end(self.items.len(), start)
            }
            _ => false,
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Pressed { item, origin } => {
                let Some(found) = self.item(item) else {
                    tracing::warn!(item = item.index(), "Press on unknown gallery item");
                    return Effect::None;
                };
                match origin {
                    PressOrigin::Card => Effect::OpenModal(item),
                    PressOrigin::DownloadControl => Effect::Download(found.download.clone()),
                }
            }
            Message::HoverEnter(item) => {
                self.hovered = Some(item);
                Effect::None
            }
            Message::HoverLeave(item) => {
                // Enter of the next card may arrive before leave of the previous one
                if self.hovered == Some(item) {
                    self.hovered = None;
                }
                Effect::None
            }
            Message::Scrolled {
                offset_y,
                width,
                height,
            } => {
                let visible = view::visible_items(offset_y, width, height, self.items.len());
                if visible == self.visible {
                    return Effect::None;
                }
                self.visible = visible.clone();
                Effect::LoadImages(visible)
            }
        }
    }
}
