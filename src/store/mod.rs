//! In-memory store for support tickets.
//!
//! The store is the canonical owner of the ticket collection: consumers get
//! clones for rendering and never hold a mutable reference into it. All
//! operations run synchronously to completion on a single logical thread of
//! control (the UI event loop), so no intermediate state is ever observable.

use jiff::Timestamp;

use crate::error::{QuickdeskError, Result};
use crate::types::{Reply, Ticket, TicketDraft, TicketStatus};

pub mod queries;

/// The canonical in-memory ticket collection.
///
/// Tickets are kept in insertion order, which is also chronological order
/// since identifiers and creation timestamps are monotonic together.
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Create an empty store with no tickets.
    pub fn empty() -> Self {
        TicketStore::default()
    }

    /// Replace the store's contents with the given tickets.
    ///
    /// Used once at startup with the seed set; calling it again fully
    /// replaces prior state.
    pub fn initialize(&mut self, seed: Vec<Ticket>) {
        self.tickets = seed;
    }

    /// Return an identifier strictly greater than any identifier present.
    ///
    /// Derived from the true maximum existing id rather than a separate
    /// counter, so manually seeded ids can never collide with assigned ones.
    pub fn next_id(&self) -> u64 {
        self.tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Create a ticket from a draft and append it to the collection.
    ///
    /// The new ticket starts with status [`TicketStatus::Open`], zero votes,
    /// an empty reply thread, `created = now` and `id = next_id()`. Returns
    /// a clone of the created ticket.
    ///
    /// # Errors
    ///
    /// Returns [`QuickdeskError::Validation`] naming the first missing field
    /// when any of title, description, category, priority or author is empty
    /// or unset. The collection is not mutated on failure.
    pub fn create(&mut self, draft: &TicketDraft) -> Result<Ticket> {
        let priority = Self::validate(draft)?;

        let ticket = Ticket {
            id: self.next_id(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            status: TicketStatus::Open,
            priority,
            category: draft.category.trim().to_string(),
            author: draft.author.trim().to_string(),
            created: Timestamp::now(),
            upvotes: 0,
            downvotes: 0,
            replies: Vec::new(),
        };

        self.tickets.push(ticket.clone());
        tracing::debug!(id = ticket.id, author = %ticket.author, "ticket created");
        Ok(ticket)
    }

    /// Check a draft for presence of every required field.
    fn validate(draft: &TicketDraft) -> Result<crate::types::TicketPriority> {
        if draft.title.trim().is_empty() {
            return Err(QuickdeskError::Validation("title"));
        }
        if draft.description.trim().is_empty() {
            return Err(QuickdeskError::Validation("description"));
        }
        if draft.category.trim().is_empty() {
            return Err(QuickdeskError::Validation("category"));
        }
        let Some(priority) = draft.priority else {
            return Err(QuickdeskError::Validation("priority"));
        };
        if draft.author.trim().is_empty() {
            return Err(QuickdeskError::Validation("author"));
        }
        Ok(priority)
    }

    /// Set a ticket's status, returning the updated ticket.
    ///
    /// Status transitions are unconstrained; any value may be set. Returns
    /// `None` when no ticket has the given id.
    pub fn set_status(&mut self, id: u64, status: TicketStatus) -> Option<Ticket> {
        let ticket = self.tickets.iter_mut().find(|t| t.id == id)?;
        ticket.status = status;
        Some(ticket.clone())
    }

    /// Append a reply to a ticket's thread, returning the updated ticket.
    pub fn add_reply(&mut self, id: u64, reply: Reply) -> Option<Ticket> {
        let ticket = self.tickets.iter_mut().find(|t| t.id == id)?;
        ticket.replies.push(reply);
        Some(ticket.clone())
    }

    /// Increment a ticket's upvote counter, returning the updated ticket.
    pub fn upvote(&mut self, id: u64) -> Option<Ticket> {
        let ticket = self.tickets.iter_mut().find(|t| t.id == id)?;
        ticket.upvotes += 1;
        Some(ticket.clone())
    }

    /// Increment a ticket's downvote counter, returning the updated ticket.
    pub fn downvote(&mut self, id: u64) -> Option<Ticket> {
        let ticket = self.tickets.iter_mut().find(|t| t.id == id)?;
        ticket.downvotes += 1;
        Some(ticket.clone())
    }

    /// Number of tickets in the store.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the store holds no tickets.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Internal accessor for the query module.
    pub(crate) fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }
}
