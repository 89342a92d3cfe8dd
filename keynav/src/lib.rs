pub mod action;
pub mod column_size;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod grid;
pub mod i18n;
pub mod keycodes;
pub mod list;
pub mod roving;
pub mod source;
pub mod traversal;
pub mod types;
pub mod visibility;

pub use action::{ExpandAction, ExpandAxis};
pub use column_size::{
    column_tracks, column_widths, ColumnLayout, ColumnSpec, ColumnTracks,
    GridColumnGroupSizeController,
};
pub use document::{Dispatched, Document};
pub use element::Element;
pub use error::{Error, Result};
pub use event::{Event, EventResult, Key, KeyChange, Modifiers, MouseButton};
pub use grid::{next_grid_index, GridMatrix, KeyNavigationGridConfig, KeyNavigationGridController};
pub use i18n::{I18nProvider, I18nRegistry, I18nStrings};
pub use keycodes::{classify, Intent};
pub use list::{next_list_index, KeyNavigationListConfig, KeyNavigationListController};
pub use roving::Trigger;
pub use source::{ChildrenOf, GridSource, ItemSource, Listed, RowsOf, TagWithin};
pub use traversal::{focus_target, focusable_items};
pub use types::{Layout, TextDirection};
pub use visibility::ScrollableVisibilityController;
