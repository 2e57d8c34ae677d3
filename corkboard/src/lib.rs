//! Board state engine for a column/card task board.
//!
//! The engine models a board as a single immutable snapshot ([`Board`]) of
//! columns, cards, and labels. All changes are expressed as [`Mutation`]
//! values that compute a new snapshot from the current one; [`BoardStore`]
//! owns the live snapshot, applies mutations, notifies subscribers, and
//! writes the result through to a [`SessionStorage`] backend.
//!
//! Cards carry dense zero-based `order` ranks within their column and the
//! move algorithm keeps them dense across every re-ordering, so callers can
//! treat `order` as a list index.
//!
//! # Example
//!
//! ```
//! use corkboard::{AddCard, AddColumn, BoardStore, MemoryStorage, MoveCard};
//!
//! let mut store = BoardStore::new(MemoryStorage::new());
//!
//! let backlog = store.apply(AddColumn::new("Backlog"));
//! let doing = store.apply(AddColumn::new("Doing"));
//!
//! let card = store
//!     .apply(AddCard::new("Wire up the parser", backlog.id.clone()))
//!     .unwrap();
//! let moved = store.apply(MoveCard::new(card.id, doing.id, 0)).unwrap();
//! assert_eq!(moved.order, 0);
//! ```

pub mod auto_color;
pub mod card;
pub mod column;
pub mod defaults;
mod error;
pub mod label;
mod mutation;
pub mod storage;
pub mod store;
pub mod types;
pub mod views;

pub use card::{AddCard, DeleteCard, MoveCard, UpdateCard};
pub use column::{AddColumn, DeleteColumn, ReorderColumns, UpdateColumn};
pub use error::{Result, StorageError};
pub use label::{AddLabel, DeleteLabel, UpdateLabel};
pub use mutation::Mutation;
pub use storage::{JsonFileStorage, MemoryStorage, SessionStorage, BOARD_KEY, THEME_KEY};
pub use store::{BoardStore, Subscription};
pub use types::{Board, Card, CardId, Column, ColumnId, Label, LabelId};
pub use views::{
    column_views, filter_cards_by_labels, search_cards, visible_cards, BoardFilter, ColumnView,
};
