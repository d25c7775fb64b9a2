use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RoamError};
use crate::services::SelectionSink;

use super::category::Category;

/// What `select` does when the index is already active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReselectPolicy {
    /// Emit the scroll request and the category event again.
    #[default]
    Reemit,
    /// Do nothing.
    Ignore,
}

/// Active chip plus the chip offsets measured so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategorySelection {
    pub active_index: usize,
    pub item_positions: BTreeMap<usize, f64>,
}

/// Result of a `select` call.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOutcome {
    pub index: usize,
    /// Offset the strip was asked to scroll to, if the chip was measured.
    pub scrolled_to: Option<f64>,
    /// Whether `category_changed` fired.
    pub emitted: bool,
}

/// Keeps the category strip, its scroll position and the listing filter in
/// step with one active index.
pub struct SelectionSynchronizer {
    categories: Vec<Category>,
    selection: CategorySelection,
    leading_margin: f64,
    reselect: ReselectPolicy,
}

impl SelectionSynchronizer {
    pub fn new(
        categories: Vec<Category>,
        leading_margin: f64,
        reselect: ReselectPolicy,
    ) -> Result<Self> {
        if categories.is_empty() {
            return Err(RoamError::NoCategories);
        }
        Ok(Self {
            categories,
            selection: CategorySelection::default(),
            leading_margin,
            reselect,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn active_index(&self) -> usize {
        self.selection.active_index
    }

    pub fn active_category(&self) -> &Category {
        &self.categories[self.selection.active_index]
    }

    /// Make `index` the active chip.
    ///
    /// Scrolls to the chip only if its offset has been reported; otherwise
    /// the scroll is skipped without error. Fails without side effects for
    /// an index outside the category list.
    pub fn select(&mut self, index: usize, sink: &dyn SelectionSink) -> Result<SelectOutcome> {
        self.check_index(index)?;

        if index == self.selection.active_index && self.reselect == ReselectPolicy::Ignore {
            return Ok(SelectOutcome {
                index,
                scrolled_to: None,
                emitted: false,
            });
        }

        self.selection.active_index = index;

        let scrolled_to = self
            .selection
            .item_positions
            .get(&index)
            .map(|x| x - self.leading_margin);
        match scrolled_to {
            Some(x) => sink.scroll_to_offset(x),
            None => debug!(index, "Chip layout unknown, skipping scroll"),
        }

        sink.category_changed(&self.categories[index].label);

        Ok(SelectOutcome {
            index,
            scrolled_to,
            emitted: true,
        })
    }

    /// Store the measured horizontal offset of a chip. Non-finite offsets
    /// are ignored.
    pub fn report_layout(&mut self, index: usize, offset: f64) -> Result<()> {
        self.check_index(index)?;
        if offset.is_finite() {
            self.selection.item_positions.insert(index, offset);
        } else {
            debug!(index, offset, "Ignoring non-finite chip offset");
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.categories.len() {
            return Err(RoamError::IndexOutOfRange {
                index,
                total: self.categories.len(),
            });
        }
        Ok(())
    }
}
