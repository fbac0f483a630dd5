// crates/geofill-core/src/list.rs

//! # Suggestion List
//!
//! Holds the current suggestion set, the highlighted entry and the panel's
//! visibility, and mirrors every change onto a [`SuggestionView`].

use crate::model::Suggestion;

/// Render target for the dropdown panel.
pub trait SuggestionView {
    /// Removes every rendered entry.
    fn clear_items(&mut self);
    /// Appends one entry; `index` is its position in the suggestion set.
    fn append_item(&mut self, index: usize, label: &str);
    fn set_visible(&mut self, visible: bool);
    /// Emphasizes exactly the entry at `index`, or none.
    fn set_highlight(&mut self, index: Option<usize>);
}

/// The text box the widget augments.
pub trait InputField {
    fn set_text(&mut self, text: &str);
}

/// Keyboard navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn step(self) -> i64 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
    active: Option<usize>,
    visible: bool,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole set and clears the highlight. Visibility is left
    /// to the caller.
    pub fn render<V: SuggestionView + ?Sized>(&mut self, items: Vec<Suggestion>, view: &mut V) {
        view.clear_items();
        for (index, item) in items.iter().enumerate() {
            view.append_item(index, &item.label);
        }
        self.items = items;
        self.active = None;
        view.set_highlight(None);
    }

    /// Drops every entry and hides the panel.
    pub fn clear<V: SuggestionView + ?Sized>(&mut self, view: &mut V) {
        self.render(Vec::new(), view);
        self.hide(view);
    }

    /// Out-of-range indices are ignored.
    pub fn highlight<V: SuggestionView + ?Sized>(&mut self, index: usize, view: &mut V) {
        if index < self.items.len() {
            self.active = Some(index);
            view.set_highlight(self.active);
        }
    }

    /// Moves the highlight one step, wrapping at both ends.
    ///
    /// With no highlight the walk starts from the virtual position `-1`, so
    /// `Down` lands on the first entry.
    pub fn navigate<V: SuggestionView + ?Sized>(
        &mut self,
        direction: Direction,
        view: &mut V,
    ) -> Option<usize> {
        let count = self.items.len() as i64;
        if count == 0 {
            return None;
        }
        let current = self.active.map_or(-1, |i| i as i64);
        let next = (current + direction.step() + count).rem_euclid(count) as usize;
        self.highlight(next, view);
        self.active
    }

    pub fn show<V: SuggestionView + ?Sized>(&mut self, view: &mut V) {
        self.visible = true;
        view.set_visible(true);
    }

    /// Hides the panel; entries and highlight survive.
    pub fn hide<V: SuggestionView + ?Sized>(&mut self, view: &mut V) {
        self.visible = false;
        view.set_visible(false);
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Suggestion> {
        self.items.get(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&Suggestion> {
        self.active.and_then(|i| self.items.get(i))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
