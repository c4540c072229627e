//! Read-only queries over the ticket collection.
//!
//! All queries return clones; callers never observe the store's internal
//! state directly. Every query is linear in the collection size.

use super::TicketStore;
use crate::types::{StatusCounts, Ticket, TicketStatus};

/// Case-insensitive substring match.
fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl TicketStore {
    /// Get all tickets in insertion (chronological) order.
    pub fn all(&self) -> Vec<Ticket> {
        self.tickets().to_vec()
    }

    /// Get a single ticket by exact id.
    pub fn find(&self, id: u64) -> Option<Ticket> {
        self.tickets().iter().find(|t| t.id == id).cloned()
    }

    /// Get all tickets authored by the given user, in insertion order.
    ///
    /// Insertion order is chronological since ids and creation timestamps
    /// are monotonic together. Unknown users yield an empty vector.
    pub fn list_by_user(&self, author: &str) -> Vec<Ticket> {
        self.tickets()
            .iter()
            .filter(|t| t.author == author)
            .cloned()
            .collect()
    }

    /// Get the `limit` most recently created tickets for the given user.
    ///
    /// Ordered descending by creation timestamp, ties broken by descending
    /// id, so the result is a deterministic prefix of the user's full
    /// reverse-chronological history. Users with fewer than `limit` tickets
    /// get all of them.
    pub fn recent_by_user(&self, author: &str, limit: usize) -> Vec<Ticket> {
        let mut results = self.list_by_user(author);
        results.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        results.truncate(limit);
        results
    }

    /// Count the given user's tickets with the given status.
    pub fn count_by_status(&self, author: &str, status: TicketStatus) -> usize {
        self.tickets()
            .iter()
            .filter(|t| t.author == author && t.status == status)
            .count()
    }

    /// The dashboard counters for one user: total, open and resolved.
    pub fn status_counts(&self, author: &str) -> StatusCounts {
        StatusCounts {
            total: self.list_by_user(author).len(),
            open: self.count_by_status(author, TicketStatus::Open),
            resolved: self.count_by_status(author, TicketStatus::Resolved),
        }
    }

    /// Search tickets by case-insensitive substring over title, description,
    /// category and author. An empty query matches every ticket.
    pub fn search(&self, query: &str) -> Vec<Ticket> {
        self.tickets()
            .iter()
            .filter(|t| {
                contains_case_insensitive(&t.title, query)
                    || contains_case_insensitive(&t.description, query)
                    || contains_case_insensitive(&t.category, query)
                    || contains_case_insensitive(&t.author, query)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::store::test_helpers::{make_draft, make_ticket};

    fn ts(s: &str) -> Timestamp {
        s.parse().expect("valid timestamp")
    }

    /// A store with three tickets across two authors.
    fn test_store() -> TicketStore {
        let mut store = TicketStore::empty();
        store.initialize(vec![
            make_ticket(1, "John Doe", ts("2024-01-01T00:00:00Z")),
            make_ticket(2, "Jane Smith", ts("2024-01-02T00:00:00Z")),
            make_ticket(3, "John Doe", ts("2024-01-03T00:00:00Z")),
        ]);
        store
    }

    #[test]
    fn test_find_existing() {
        let store = test_store();
        let ticket = store.find(2).expect("ticket 2 exists");
        assert_eq!(ticket.author, "Jane Smith");
    }

    #[test]
    fn test_find_nonexistent() {
        let store = test_store();
        assert!(store.find(99).is_none());
    }

    #[test]
    fn test_list_by_user_in_creation_order() {
        let store = test_store();
        let tickets = store.list_by_user("John Doe");
        let ids: Vec<u64> = tickets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_list_by_unknown_user_is_empty() {
        let store = test_store();
        assert!(store.list_by_user("Nobody").is_empty());
    }

    #[test]
    fn test_recent_by_user_orders_descending() {
        let store = test_store();
        let recent = store.recent_by_user("John Doe", 10);
        let ids: Vec<u64> = recent.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_recent_by_user_respects_limit() {
        let store = test_store();
        let recent = store.recent_by_user("John Doe", 1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, 3);

        // A prefix of the full reverse-chronological ordering
        let full = store.recent_by_user("John Doe", usize::MAX);
        assert_eq!(recent[..], full[..1]);
    }

    #[test]
    fn test_recent_by_user_zero_limit() {
        let store = test_store();
        assert!(store.recent_by_user("John Doe", 0).is_empty());
    }

    #[test]
    fn test_recent_by_user_ties_break_by_id() {
        let same = ts("2024-06-01T00:00:00Z");
        let mut store = TicketStore::empty();
        store.initialize(vec![
            make_ticket(1, "John Doe", same),
            make_ticket(2, "John Doe", same),
            make_ticket(3, "John Doe", same),
        ]);

        let recent = store.recent_by_user("John Doe", 3);
        let ids: Vec<u64> = recent.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_count_by_status() {
        let mut store = test_store();
        store.set_status(3, TicketStatus::Resolved);

        assert_eq!(store.count_by_status("John Doe", TicketStatus::Open), 1);
        assert_eq!(store.count_by_status("John Doe", TicketStatus::Resolved), 1);
        assert_eq!(store.count_by_status("Nobody", TicketStatus::Open), 0);
    }

    #[test]
    fn test_count_matches_list_filter() {
        let mut store = test_store();
        store.set_status(1, TicketStatus::InProgress);

        let open_count = store.count_by_status("John Doe", TicketStatus::Open);
        let filtered = store
            .list_by_user("John Doe")
            .into_iter()
            .filter(|t| t.status == TicketStatus::Open)
            .count();
        assert_eq!(open_count, filtered);
    }

    #[test]
    fn test_status_counts() {
        let mut store = test_store();
        store.set_status(3, TicketStatus::Resolved);

        let counts = store.status_counts("John Doe");
        assert_eq!(counts.total, 2);
        assert_eq!(counts.open, 1);
        assert_eq!(counts.resolved, 1);

        assert_eq!(store.status_counts("Nobody"), StatusCounts::default());
    }

    #[test]
    fn test_search_by_title_case_insensitive() {
        let mut store = TicketStore::empty();
        let mut draft = make_draft("Login Issues with Mobile App", "John Doe");
        draft.description = "Authentication failed after the update".to_string();
        store.create(&draft).unwrap();
        store
            .create(&make_draft("Feature Request: Dark Mode", "Jane Smith"))
            .unwrap();

        let results = store.search("LOGIN");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Login Issues with Mobile App");
    }

    #[test]
    fn test_search_by_description_and_author() {
        let mut store = TicketStore::empty();
        let mut draft = make_draft("Login Issues", "John Doe");
        draft.description = "Authentication failed after the update".to_string();
        store.create(&draft).unwrap();

        assert_eq!(store.search("authentication").len(), 1);
        assert_eq!(store.search("john").len(), 1);
        assert!(store.search("zzz_nothing").is_empty());
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let store = test_store();
        assert_eq!(store.search("").len(), 3);
    }

    #[test]
    fn test_seeded_store_create_then_query() {
        use crate::types::TicketDraft;

        // Seed with 3 tickets (ids 1-3), Mike Johnson owning id 3.
        let mut store = TicketStore::empty();
        store.initialize(vec![
            make_ticket(1, "John Doe", ts("2024-01-01T00:00:00Z")),
            make_ticket(2, "Jane Smith", ts("2024-01-02T00:00:00Z")),
            make_ticket(3, "Mike Johnson", ts("2024-01-03T00:00:00Z")),
        ]);

        let draft = TicketDraft {
            title: "Billing Question 2".to_string(),
            description: "desc".to_string(),
            category: "Billing".to_string(),
            priority: Some(crate::types::TicketPriority::Low),
            author: "Mike Johnson".to_string(),
        };
        let ticket = store.create(&draft).expect("create should succeed");
        assert_eq!(ticket.id, 4);
        assert_eq!(ticket.status, TicketStatus::Open);

        let mine = store.list_by_user("Mike Johnson");
        let ids: Vec<u64> = mine.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 4]);

        let recent = store.recent_by_user("Mike Johnson", 1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, 4);

        // An invalid create leaves the four tickets untouched.
        let bad = TicketDraft {
            title: String::new(),
            ..draft
        };
        assert!(store.create(&bad).is_err());
        assert_eq!(store.len(), 4);
    }
}
