//! Query layer: read-only views over a board snapshot.
//!
//! Search and label filtering never mutate the board; they produce borrowed
//! views that are recomputed from the current snapshot on every call.

use crate::types::{Board, Card, Column, LabelId};

/// Case-insensitive substring search over card titles and descriptions.
///
/// The query is trimmed first; a blank query matches every card. A card
/// matches when either its title or its description contains the query.
pub fn search_cards<'a>(board: &'a Board, query: &str) -> Vec<&'a Card> {
    let query = query.trim().to_lowercase();
    board
        .cards
        .iter()
        .filter(|card| {
            query.is_empty()
                || card.title.to_lowercase().contains(&query)
                || card.description.to_lowercase().contains(&query)
        })
        .collect()
}

/// Filter cards to those carrying at least one of the given labels.
///
/// An empty label set matches every card (no filter active). This is OR
/// semantics across the selected labels, not AND.
pub fn filter_cards_by_labels<'a>(board: &'a Board, label_ids: &[LabelId]) -> Vec<&'a Card> {
    board
        .cards
        .iter()
        .filter(|card| {
            label_ids.is_empty() || label_ids.iter().any(|id| card.has_label(id))
        })
        .collect()
}

/// The active view criteria: a free-text search plus a label selection.
///
/// The two criteria combine with AND — a visible card must match the search
/// text and carry at least one selected label. Either criterion is inactive
/// when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardFilter {
    /// Free-text search, matched case-insensitively against title and
    /// description
    pub search: String,
    /// Selected labels, matched with OR semantics
    pub labels: Vec<LabelId>,
}

impl BoardFilter {
    /// Create an empty filter that shows everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the selected labels
    pub fn with_labels(mut self, labels: Vec<LabelId>) -> Self {
        self.labels = labels;
        self
    }

    /// Whether any criterion is active
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.labels.is_empty()
    }

    fn matches(&self, card: &Card) -> bool {
        let query = self.search.trim().to_lowercase();
        let search_hit = query.is_empty()
            || card.title.to_lowercase().contains(&query)
            || card.description.to_lowercase().contains(&query);
        let label_hit =
            self.labels.is_empty() || self.labels.iter().any(|id| card.has_label(id));
        search_hit && label_hit
    }
}

/// One column plus the cards visible in it under a filter, sorted by rank.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub cards: Vec<&'a Card>,
}

/// Cards visible under the filter, in board storage order.
pub fn visible_cards<'a>(board: &'a Board, filter: &BoardFilter) -> Vec<&'a Card> {
    board.cards.iter().filter(|c| filter.matches(c)).collect()
}

/// The full renderable board: every column in rank order, each holding its
/// visible cards in rank order. Columns emptied by the filter still appear.
pub fn column_views<'a>(board: &'a Board, filter: &BoardFilter) -> Vec<ColumnView<'a>> {
    board
        .columns_ordered()
        .into_iter()
        .map(|column| ColumnView {
            column,
            cards: board
                .cards_in_column(&column.id)
                .into_iter()
                .filter(|c| filter.matches(c))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::column::AddColumn;
    use crate::label::AddLabel;
    use crate::mutation::Mutation;
    use crate::types::Label;

    fn seeded() -> (Vec<Label>, Board) {
        let board = Board::new();
        let (todo, board) = AddColumn::new("Todo").apply(&board);
        let (done, board) = AddColumn::new("Done").apply(&board);
        let (bug, board) = AddLabel::new("bug").apply(&board);
        let (docs, board) = AddLabel::new("docs").apply(&board);

        let (_, board) = AddCard::new("Fix login crash", todo.id.clone())
            .with_labels(vec![bug.id.clone()])
            .apply(&board);
        let (_, board) = AddCard::new("Write README", todo.id.clone())
            .with_description("cover the login flow")
            .with_labels(vec![docs.id.clone()])
            .apply(&board);
        let (_, board) = AddCard::new("Ship release", done.id.clone()).apply(&board);

        (vec![bug, docs], board)
    }

    fn titles<'a>(cards: &[&'a Card]) -> Vec<&'a str> {
        cards.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let (_, board) = seeded();
        let hits = search_cards(&board, "login");
        assert_eq!(titles(&hits), vec!["Fix login crash", "Write README"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let (_, board) = seeded();
        let hits = search_cards(&board, "  FIX  ");
        assert_eq!(titles(&hits), vec!["Fix login crash"]);
    }

    #[test]
    fn test_search_blank_query_matches_all() {
        let (_, board) = seeded();
        assert_eq!(search_cards(&board, "   ").len(), 3);
    }

    #[test]
    fn test_label_filter_is_or_across_labels() {
        let (labels, board) = seeded();
        let hits = filter_cards_by_labels(&board, &[labels[0].id.clone(), labels[1].id.clone()]);
        assert_eq!(titles(&hits), vec!["Fix login crash", "Write README"]);
    }

    #[test]
    fn test_label_filter_empty_set_matches_all() {
        let (_, board) = seeded();
        assert_eq!(filter_cards_by_labels(&board, &[]).len(), 3);
    }

    #[test]
    fn test_board_filter_combines_with_and() {
        let (labels, board) = seeded();
        let filter = BoardFilter::new()
            .with_search("login")
            .with_labels(vec![labels[0].id.clone()]);

        // "Write README" matches the search but not the label
        assert_eq!(titles(&visible_cards(&board, &filter)), vec!["Fix login crash"]);
    }

    #[test]
    fn test_inactive_filter_shows_everything() {
        let (_, board) = seeded();
        let filter = BoardFilter::new();
        assert!(!filter.is_active());
        assert_eq!(visible_cards(&board, &filter).len(), 3);
    }

    #[test]
    fn test_column_views_keep_empty_columns() {
        let (labels, board) = seeded();
        let filter = BoardFilter::new().with_labels(vec![labels[1].id.clone()]);

        let views = column_views(&board, &filter);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].column.title, "Todo");
        assert_eq!(titles(&views[0].cards), vec!["Write README"]);
        assert!(views[1].cards.is_empty());
    }

    #[test]
    fn test_column_views_sorted_by_rank() {
        let (_, board) = seeded();
        let views = column_views(&board, &BoardFilter::new());
        assert_eq!(
            titles(&views[0].cards),
            vec!["Fix login crash", "Write README"]
        );
    }
}
