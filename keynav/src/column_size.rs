//! Grid column sizing: CSS track strings and per-column width properties
//! derived from the host's column declarations.
//!
//! Header cells use `--ch{n}`, body cells `--c{n}`, numbered from 1 by the
//! column's position in the live column set.

use std::str::FromStr;

use crate::document::Document;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::event::{Event, EventResult};
use crate::source::ItemSource;

pub const HEADER_PREFIX: &str = "--ch";
pub const BODY_PREFIX: &str = "--c";
pub const HEADER_GRID: &str = "--ch-grid";
pub const BODY_GRID: &str = "--c-grid";

/// Track used by columns without an explicit pixel width.
pub const FLEX_TRACK: &str = "1fr";

/// How columns share the grid's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnLayout {
    /// Every column with a declared width keeps it.
    #[default]
    Fixed,
    /// Only pinned columns keep their width; the rest share the remainder.
    Flex,
}

impl FromStr for ColumnLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "flex" => Ok(Self::Flex),
            _ => Err(Error::InvalidColumnLayout(s.to_string())),
        }
    }
}

/// Parse a column width in pixels: `150` or `150px`.
pub fn parse_width(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    digits
        .parse()
        .map_err(|_| Error::InvalidColumnWidth(s.to_string()))
}

/// One column declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// 1-based position in the column set.
    pub index: usize,
    /// Declared width in pixels.
    pub width: Option<u32>,
    /// Pinned (`position="fixed"`): stays on screen while scrolling.
    pub fixed: bool,
    /// Hidden columns take no track.
    pub hidden: bool,
}

impl ColumnSpec {
    pub fn new(index: usize, width: Option<u32>) -> Self {
        Self {
            index,
            width,
            fixed: false,
            hidden: false,
        }
    }

    pub fn pinned(mut self) -> Self {
        self.fixed = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Read a column from its element's `width`, `position` and `hidden`
    /// attributes. A malformed width is logged and treated as undeclared.
    pub fn from_element(index: usize, element: &Element) -> Self {
        let width = element.get_attribute("width").and_then(|w| match parse_width(w) {
            Ok(px) => Some(px),
            Err(e) => {
                log::warn!("[column_size] column {}: {}", element.id, e);
                None
            }
        });
        Self {
            index,
            width,
            fixed: element.get_attribute("position") == Some("fixed"),
            hidden: element.has_attribute("hidden"),
        }
    }

    /// The pixel width this column commits to under `layout`.
    ///
    /// Pinned columns always keep theirs, since sticky offsets are computed
    /// from it.
    pub fn explicit_width(&self, layout: ColumnLayout) -> Option<u32> {
        match layout {
            ColumnLayout::Fixed => self.width,
            ColumnLayout::Flex if self.fixed => self.width,
            ColumnLayout::Flex => None,
        }
    }

    fn track(&self, prefix: &str, layout: ColumnLayout) -> String {
        match self.explicit_width(layout) {
            Some(px) => format!("var({prefix}{}, {px}px)", self.index),
            None => format!("var({prefix}{}, {FLEX_TRACK})", self.index),
        }
    }
}

/// Track definitions for header and body rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTracks {
    pub header: String,
    pub body: String,
}

/// Build the header and body track strings. Pure function of its input.
pub fn column_tracks(columns: &[ColumnSpec], layout: ColumnLayout) -> ColumnTracks {
    let visible = || columns.iter().filter(|c| !c.hidden);
    ColumnTracks {
        header: visible()
            .map(|c| c.track(HEADER_PREFIX, layout))
            .collect::<Vec<_>>()
            .join(" "),
        body: visible()
            .map(|c| c.track(BODY_PREFIX, layout))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Per-column width values (`"100px"`), None where the column has no
/// explicit width under `layout`.
pub fn column_widths(columns: &[ColumnSpec], layout: ColumnLayout) -> Vec<(usize, Option<String>)> {
    columns
        .iter()
        .map(|c| (c.index, c.explicit_width(layout).map(|px| format!("{px}px"))))
        .collect()
}

/// Writes column track strings and width properties onto a grid host.
///
/// Holds no copy of the columns: every call re-reads the live column
/// elements and the host's `column-layout` attribute.
pub struct GridColumnGroupSizeController<S: ItemSource> {
    host: String,
    columns: S,
}

impl<S: ItemSource> GridColumnGroupSizeController<S> {
    pub fn new(host: impl Into<String>, columns: S) -> Self {
        Self {
            host: host.into(),
            columns,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The host's column layout, `fixed` when absent or malformed.
    pub fn layout(&self, doc: &Document) -> ColumnLayout {
        match doc.attribute(&self.host, "column-layout") {
            None => ColumnLayout::default(),
            Some(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("[column_size] {}: {}", self.host, e);
                ColumnLayout::default()
            }),
        }
    }

    /// Current column declarations.
    pub fn columns(&self, doc: &Document) -> Vec<ColumnSpec> {
        self.columns
            .items(doc)
            .iter()
            .enumerate()
            .filter_map(|(i, id)| doc.get(id).map(|el| ColumnSpec::from_element(i + 1, el)))
            .collect()
    }

    /// Write `--ch-grid` and `--c-grid` on the host.
    pub fn create_column_grids(&self, doc: &mut Document) -> ColumnTracks {
        let tracks = column_tracks(&self.columns(doc), self.layout(doc));
        doc.set_style_property(&self.host, HEADER_GRID, tracks.header.clone());
        doc.set_style_property(&self.host, BODY_GRID, tracks.body.clone());
        log::debug!("[column_size] {} {}={}", self.host, BODY_GRID, tracks.body);
        tracks
    }

    /// Write `--ch{n}`/`--c{n}` for columns with an explicit width and clear
    /// them for the rest.
    pub fn initialize_column_widths(&self, doc: &mut Document) {
        let widths = column_widths(&self.columns(doc), self.layout(doc));
        for (index, width) in widths {
            let header = format!("{HEADER_PREFIX}{index}");
            let body = format!("{BODY_PREFIX}{index}");
            match width {
                Some(value) => {
                    doc.set_style_property(&self.host, &header, value.clone());
                    doc.set_style_property(&self.host, &body, value);
                }
                None => {
                    doc.remove_style_property(&self.host, &header);
                    doc.remove_style_property(&self.host, &body);
                }
            }
        }
    }

    /// Recompute both outputs.
    pub fn update(&self, doc: &mut Document) -> ColumnTracks {
        self.initialize_column_widths(doc);
        self.create_column_grids(doc)
    }

    /// Recompute when the host reports a change to its columns.
    pub fn handle_event(&self, doc: &mut Document, event: &Event) -> EventResult {
        if let Event::Mutation { target } = event {
            if doc.is_within(&self.host, target) {
                self.update(doc);
            }
        }
        EventResult::Ignored
    }
}
