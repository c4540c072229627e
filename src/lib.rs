pub mod app;
pub mod display;
pub mod error;
pub mod formatting;
pub mod seed;
pub mod session;
pub mod store;
pub mod types;

pub use app::{App, Command, DashboardView, Notification, NotificationKind, Outcome, RECENT_LIMIT};
pub use error::{QuickdeskError, Result};
pub use seed::sample_tickets;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore, User};
pub use store::TicketStore;
pub use types::{
    Reply, StatusCounts, Ticket, TicketDraft, TicketPriority, TicketStatus, VALID_PRIORITIES,
    VALID_STATUSES,
};
