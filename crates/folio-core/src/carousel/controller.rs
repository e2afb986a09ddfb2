use std::fmt;

use tracing::debug;

use super::{CardRole, SwipeDirection};
use crate::{Error, Result};

/// Owns the active index of a fixed-length carousel
///
/// `active_index` always lies in `[0, item_count)` when there are items.
/// With one item or none, next/prev leave the state untouched.
#[derive(Debug, Clone, Default)]
pub struct CarouselController {
    active_index: usize,
    item_count: usize,
}

impl CarouselController {
    pub fn new(item_count: usize) -> Self {
        Self {
            active_index: 0,
            item_count,
        }
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Navigation controls only make sense with more than one card
    #[inline]
    pub fn is_navigable(&self) -> bool {
        self.item_count > 1
    }

    /// Replace the item list length, keeping the active index when it is
    /// still valid
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if self.active_index >= item_count {
            self.active_index = 0;
        }
    }

    pub fn next(&mut self) {
        if !self.is_navigable() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.item_count;
        debug!(active = self.active_index, "Carousel next");
    }

    pub fn prev(&mut self) {
        if !self.is_navigable() {
            return;
        }
        self.active_index = (self.active_index + self.item_count - 1) % self.item_count;
        debug!(active = self.active_index, "Carousel prev");
    }

    /// Jump straight to `index` (dot navigation)
    ///
    /// Indices outside `[0, item_count)`, including negative ones, are
    /// rejected and leave the state unchanged.
    pub fn jump_to<I>(&mut self, index: I) -> Result<()>
    where
        I: TryInto<usize> + Copy + fmt::Display,
    {
        match index.try_into() {
            Ok(i) if i < self.item_count => {
                self.active_index = i;
                Ok(())
            }
            _ => Err(Error::IndexOutOfRange {
                index: index.to_string(),
                len: self.item_count,
            }),
        }
    }

    pub fn apply_swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Prev => self.prev(),
        }
    }

    /// Role of card `index` relative to the active card
    ///
    /// The neighbour checks wrap around; the far tiers do not. When the
    /// predecessor and successor coincide (two cards) the card is `Left`.
    pub fn role_of(&self, index: usize) -> Option<CardRole> {
        let n = self.item_count;
        if index >= n {
            return None;
        }
        let active = self.active_index;

        let role = if index == active {
            CardRole::Center
        } else if index == (active + n - 1) % n {
            CardRole::Left
        } else if index == (active + 1) % n {
            CardRole::Right
        } else if index < active {
            CardRole::FarLeft
        } else {
            CardRole::FarRight
        };
        Some(role)
    }

    /// Roles for every card, in item order
    pub fn roles(&self) -> Vec<CardRole> {
        (0..self.item_count).filter_map(|i| self.role_of(i)).collect()
    }

    /// Clicking a side card brings it to the center; other clicks do nothing
    pub fn click(&mut self, index: usize) {
        match self.role_of(index) {
            Some(CardRole::Left) => self.prev(),
            Some(CardRole::Right) => self.next(),
            _ => {}
        }
    }
}
