//! Keyboard navigation for two-dimensional grids with rows of varying
//! length, following the WAI-ARIA data grid keyboard model.

use crate::document::Document;
use crate::element::closest;
use crate::event::{Event, EventResult, MouseButton};
use crate::keycodes::{classify, Intent};
use crate::roving::{self, Management, Trigger};
use crate::source::GridSource;
use crate::types::TextDirection;

/// Rows moved by PageUp/PageDown in a grid.
pub const DEFAULT_GRID_PAGE_STRIDE: usize = 4;

/// Flattened view of a grid's cells.
///
/// Rows may differ in length. Empty rows are dropped so every row has at
/// least one cell to land on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridMatrix {
    cells: Vec<String>,
    /// Flat index of the first cell of each row.
    row_starts: Vec<usize>,
}

impl GridMatrix {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        let mut cells = Vec::new();
        let mut row_starts = Vec::new();
        for row in rows.into_iter().filter(|r| !r.is_empty()) {
            row_starts.push(cells.len());
            cells.extend(row);
        }
        Self { cells, row_starts }
    }

    pub fn from_source(doc: &Document, source: &impl GridSource) -> Self {
        Self::new(source.rows(doc))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn row_count(&self) -> usize {
        self.row_starts.len()
    }

    /// Number of cells in `row`, 0 if out of range.
    pub fn row_len(&self, row: usize) -> usize {
        let Some(&start) = self.row_starts.get(row) else {
            return 0;
        };
        let end = self
            .row_starts
            .get(row + 1)
            .copied()
            .unwrap_or(self.cells.len());
        end - start
    }

    /// (row, column) of a flat index.
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.cells.len() {
            return None;
        }
        let row = match self.row_starts.binary_search(&index) {
            Ok(row) => row,
            Err(row) => row - 1,
        };
        Some((row, index - self.row_starts[row]))
    }

    /// Flat index of (row, column).
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if col >= self.row_len(row) {
            return None;
        }
        Some(self.row_starts[row] + col)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.cells.iter().position(|c| c == id)
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Flat index of `row` at column `col`, clamped to the row's last cell.
    fn clamped(&self, row: usize, col: usize) -> usize {
        let last_col = self.row_len(row).saturating_sub(1);
        self.row_starts[row] + col.min(last_col)
    }
}

/// Compute the flat index an intent moves to.
///
/// Block moves keep the column (clamped to shorter rows), inline moves stop
/// at the row's edges, paging moves `page_stride` rows and stops at the first
/// or last row. Returns None for an empty grid or an out-of-range `current`.
pub fn next_grid_index(
    matrix: &GridMatrix,
    current: usize,
    intent: Intent,
    page_stride: usize,
) -> Option<usize> {
    let (row, col) = matrix.position(current)?;
    let last_row = matrix.row_count() - 1;
    let last_col = matrix.row_len(row) - 1;

    let next = match intent {
        Intent::PrevInline => matrix.clamped(row, col.saturating_sub(1)),
        Intent::NextInline => matrix.clamped(row, (col + 1).min(last_col)),
        Intent::PrevBlock => matrix.clamped(row.saturating_sub(1), col),
        Intent::NextBlock => matrix.clamped((row + 1).min(last_row), col),
        Intent::RowHome => matrix.clamped(row, 0),
        Intent::RowEnd => matrix.clamped(row, last_col),
        Intent::GridHome => 0,
        Intent::GridEnd => matrix.len() - 1,
        Intent::PageUp => matrix.clamped(row.saturating_sub(page_stride), col),
        Intent::PageDown => matrix.clamped(row.saturating_add(page_stride).min(last_row), col),
    };
    Some(next)
}

/// Configuration for [`KeyNavigationGridController`].
#[derive(Debug, Clone)]
pub struct KeyNavigationGridConfig {
    /// Move DOM focus into the active cell.
    pub manage_focus: bool,
    /// Maintain the roving tabindex.
    pub manage_tabindex: bool,
    /// Direction override. None reads the host's `dir` attribute.
    pub dir: Option<TextDirection>,
    /// Rows moved by PageUp/PageDown.
    pub page_stride: usize,
    /// Collection identifier reported in notifications.
    pub name: String,
}

impl Default for KeyNavigationGridConfig {
    fn default() -> Self {
        Self {
            manage_focus: true,
            manage_tabindex: true,
            dir: None,
            page_stride: DEFAULT_GRID_PAGE_STRIDE,
            name: "keyGridCells".to_string(),
        }
    }
}

impl KeyNavigationGridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manage_focus(mut self, manage: bool) -> Self {
        self.manage_focus = manage;
        self
    }

    pub fn manage_tabindex(mut self, manage: bool) -> Self {
        self.manage_tabindex = manage;
        self
    }

    pub fn dir(mut self, dir: TextDirection) -> Self {
        self.dir = Some(dir);
        self
    }

    pub fn page_stride(mut self, stride: usize) -> Self {
        self.page_stride = stride;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn management(&self) -> Management {
        Management {
            focus: self.manage_focus,
            tabindex: self.manage_tabindex,
        }
    }
}

/// Roving-tabindex keyboard navigation over a grid.
///
/// Row and cell membership is read from the source on every event. The
/// initial tabindex pass runs on [`initialize`](Self::initialize) or lazily
/// on the first event inside the host (typically the first pointer hover),
/// so rows rendered after construction are picked up.
pub struct KeyNavigationGridController<S: GridSource> {
    host: String,
    source: S,
    config: KeyNavigationGridConfig,
    active: Option<String>,
    initialized: bool,
}

impl<S: GridSource> KeyNavigationGridController<S> {
    pub fn new(host: impl Into<String>, source: S, config: KeyNavigationGridConfig) -> Self {
        Self {
            host: host.into(),
            source,
            config,
            active: None,
            initialized: false,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn config(&self) -> &KeyNavigationGridConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut KeyNavigationGridConfig {
        &mut self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The live cell matrix.
    pub fn matrix(&self, doc: &Document) -> GridMatrix {
        GridMatrix::from_source(doc, &self.source)
    }

    /// Give the first cell tabindex 0 and every other cell -1.
    ///
    /// Idempotent: returns false and changes nothing once initialized, or
    /// while the grid has no cells yet.
    pub fn initialize(&mut self, doc: &mut Document) -> bool {
        if self.initialized {
            return false;
        }
        let matrix = self.matrix(doc);
        let Some(first) = matrix.cell(0).map(str::to_string) else {
            log::trace!("[grid] {} has no cells yet", self.host);
            return false;
        };
        if self.config.manage_tabindex {
            roving::reset(doc, matrix.cells(), &first);
        }
        self.active = Some(first);
        self.initialized = true;
        log::debug!(
            "[grid] {} initialized with {} rows, {} cells",
            self.host,
            matrix.row_count(),
            matrix.len()
        );
        true
    }

    /// Re-establish the roving tabindex after rows or cells changed.
    pub fn sync(&mut self, doc: &mut Document) {
        if !self.initialized {
            self.initialize(doc);
            return;
        }
        let matrix = self.matrix(doc);
        let active = self
            .active
            .clone()
            .filter(|a| matrix.index_of(a).is_some())
            .or_else(|| matrix.cell(0).map(str::to_string));
        if let Some(active) = &active {
            if self.config.manage_tabindex {
                roving::reset(doc, matrix.cells(), active);
            }
        }
        self.active = active;
    }

    /// The active cell: the tracked one if still present, else the cell
    /// holding tabindex 0, else the first.
    pub fn active_cell(&self, doc: &Document) -> Option<String> {
        let matrix = self.matrix(doc);
        self.active
            .clone()
            .filter(|a| matrix.index_of(a).is_some())
            .or_else(|| roving::current(doc, matrix.cells()))
            .or_else(|| matrix.cell(0).map(str::to_string))
    }

    /// Flat index of the active cell.
    pub fn active_index(&self, doc: &Document) -> Option<usize> {
        let active = self.active_cell(doc)?;
        self.matrix(doc).index_of(&active)
    }

    /// (row, column) of the active cell.
    pub fn active_position(&self, doc: &Document) -> Option<(usize, usize)> {
        let active = self.active_cell(doc)?;
        let matrix = self.matrix(doc);
        matrix.position(matrix.index_of(&active)?)
    }

    /// Make `cell` active directly. Cells outside the grid are ignored.
    pub fn activate(&mut self, doc: &mut Document, cell: &str, trigger: Trigger) -> EventResult {
        let matrix = self.matrix(doc);
        if matrix.index_of(cell).is_none() {
            log::trace!("[grid] {} ignoring activation of foreign {}", self.host, cell);
            return EventResult::Ignored;
        }
        let previous = self.active_cell(doc);
        self.set_active(doc, &matrix, cell, previous.as_deref(), trigger);
        EventResult::Consumed
    }

    /// Apply a navigation intent from the cell at flat index `current`.
    pub fn navigate(
        &mut self,
        doc: &mut Document,
        intent: Intent,
        current: usize,
        trigger: Trigger,
    ) -> EventResult {
        let matrix = self.matrix(doc);
        let Some(next) = next_grid_index(&matrix, current, intent, self.config.page_stride) else {
            return EventResult::Ignored;
        };
        if next == current {
            return EventResult::Ignored;
        }
        let previous = matrix.cell(current).map(str::to_string);
        let active = matrix.cells()[next].clone();
        self.set_active(doc, &matrix, &active, previous.as_deref(), trigger);
        EventResult::Consumed
    }

    /// Route a host event. Returns `Consumed` when the active cell changed.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        if !doc.is_within(&self.host, event.target()) {
            return EventResult::Ignored;
        }
        if !self.initialized {
            self.initialize(doc);
        }

        match event {
            Event::MouseDown {
                target,
                button: MouseButton::Left,
            } => {
                let matrix = self.matrix(doc);
                let Some(cell) = closest(doc.root(), target, matrix.cells()).map(str::to_string)
                else {
                    return EventResult::Ignored;
                };
                self.activate(doc, &cell, Trigger::default())
            }
            Event::KeyDown {
                target,
                key,
                modifiers,
            } => {
                let dir = self.direction(doc);
                let Some(intent) = classify(*key, *modifiers, dir) else {
                    return EventResult::Ignored;
                };
                let matrix = self.matrix(doc);
                let current = closest(doc.root(), target, matrix.cells())
                    .and_then(|cell| matrix.index_of(cell))
                    .or_else(|| self.active_index(doc));
                let Some(current) = current else {
                    return EventResult::Ignored;
                };
                let trigger = Trigger {
                    code: Some(*key),
                    meta_key: modifiers.command(),
                };
                self.navigate(doc, intent, current, trigger)
            }
            Event::Mutation { .. } => {
                self.sync(doc);
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }

    fn direction(&self, doc: &Document) -> TextDirection {
        self.config.dir.unwrap_or_else(|| doc.direction(&self.host))
    }

    fn set_active(
        &mut self,
        doc: &mut Document,
        matrix: &GridMatrix,
        active: &str,
        previous: Option<&str>,
        trigger: Trigger,
    ) {
        roving::activate(
            doc,
            matrix.cells(),
            active,
            previous,
            self.config.management(),
            trigger,
            &self.config.name,
        );
        self.active = Some(active.to_string());
    }
}
