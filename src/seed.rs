//! Sample ticket data loaded at startup.
//!
//! The store offers no persistence across restarts; the seed set reloads
//! instead.

use jiff::{SignedDuration, Timestamp};

use crate::types::{Reply, Ticket, TicketPriority, TicketStatus};

/// Build the demo seed set: three tickets (ids 1-3) with creation times
/// offset 2 hours, 1 day and 2 days before `now`.
pub fn sample_tickets(now: Timestamp) -> Vec<Ticket> {
    vec![
        Ticket {
            id: 1,
            title: "Login Issues with Mobile App".to_string(),
            description: "Unable to login to the mobile application after recent update. \
                          Getting authentication failed error."
                .to_string(),
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            category: "Technical".to_string(),
            author: "John Doe".to_string(),
            created: now - SignedDuration::from_hours(2),
            upvotes: 5,
            downvotes: 1,
            replies: vec![Reply {
                author: "Sarah Wilson".to_string(),
                role: "Support Agent".to_string(),
                content: "Thank you for reporting this issue. Can you please provide your \
                          device and OS version?"
                    .to_string(),
                timestamp: now - SignedDuration::from_hours(1),
            }],
        },
        Ticket {
            id: 2,
            title: "Feature Request: Dark Mode".to_string(),
            description: "Would love to see a dark mode option in the application for better \
                          user experience."
                .to_string(),
            status: TicketStatus::InProgress,
            priority: TicketPriority::Medium,
            category: "Feature Request".to_string(),
            author: "Jane Smith".to_string(),
            created: now - SignedDuration::from_hours(24),
            upvotes: 12,
            downvotes: 2,
            replies: Vec::new(),
        },
        Ticket {
            id: 3,
            title: "Billing Question".to_string(),
            description: "Question about my recent invoice and payment methods. Need \
                          clarification on charges."
                .to_string(),
            status: TicketStatus::Resolved,
            priority: TicketPriority::Low,
            category: "Billing".to_string(),
            author: "Mike Johnson".to_string(),
            created: now - SignedDuration::from_hours(48),
            upvotes: 3,
            downvotes: 0,
            replies: vec![Reply {
                author: "Mike Chen".to_string(),
                role: "Support Agent".to_string(),
                content: "I've reviewed your account and sent you a detailed breakdown via \
                          email."
                    .to_string(),
                timestamp: now - SignedDuration::from_hours(24),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TicketStore;

    fn now() -> Timestamp {
        "2024-06-01T12:00:00Z".parse().expect("valid timestamp")
    }

    #[test]
    fn test_seed_ids_and_authors() {
        let tickets = sample_tickets(now());
        let ids: Vec<u64> = tickets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let authors: Vec<&str> = tickets.iter().map(|t| t.author.as_str()).collect();
        assert_eq!(authors, vec!["John Doe", "Jane Smith", "Mike Johnson"]);
    }

    #[test]
    fn test_seed_created_offsets() {
        let now = now();
        let tickets = sample_tickets(now);
        assert_eq!(tickets[0].created, now - SignedDuration::from_hours(2));
        assert_eq!(tickets[1].created, now - SignedDuration::from_hours(24));
        assert_eq!(tickets[2].created, now - SignedDuration::from_hours(48));
    }

    #[test]
    fn test_seed_reply_threads() {
        let tickets = sample_tickets(now());
        assert_eq!(tickets[0].replies.len(), 1);
        assert_eq!(tickets[0].replies[0].role, "Support Agent");
        assert!(tickets[1].replies.is_empty());
        assert_eq!(tickets[2].replies.len(), 1);
    }

    #[test]
    fn test_next_id_after_seed() {
        let mut store = TicketStore::empty();
        store.initialize(sample_tickets(now()));
        assert_eq!(store.next_id(), 4);
    }
}
