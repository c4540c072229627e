//! Typed UI-command layer.
//!
//! The browser original dispatched on DOM events and string-keyed element
//! lookups. Here the shell builds a [`Command`] and the [`App`] applies it
//! to the store and session, returning an [`Outcome`] with the data to
//! render plus a toast-style [`Notification`]. The core stays decoupled
//! from any particular rendering technology.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{QuickdeskError, Result};
use crate::session::{Session, User};
use crate::store::TicketStore;
use crate::types::{Reply, StatusCounts, Ticket, TicketDraft, TicketPriority, TicketStatus};

/// How many tickets the dashboard's "recent" panel shows.
pub const RECENT_LIMIT: usize = 3;

/// A user action, as dispatched by the UI shell.
#[derive(Debug, Clone)]
pub enum Command {
    SignIn {
        name: String,
        email: String,
        role: String,
        company: Option<String>,
    },
    SignOut,
    CreateTicket {
        title: String,
        description: String,
        category: String,
        priority: Option<TicketPriority>,
    },
    ViewTicket {
        id: u64,
    },
    ReplyToTicket {
        id: u64,
        content: String,
    },
    SetStatus {
        id: u64,
        status: TicketStatus,
    },
    Upvote {
        id: u64,
    },
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A toast message for the shell to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}

/// The per-user dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub user: User,
    pub counts: StatusCounts,
    pub recent: Vec<Ticket>,
    pub mine: Vec<Ticket>,
}

/// What a command produced: data for the shell plus a notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    SignedIn(User),
    SignedOut,
    TicketCreated(Ticket),
    TicketView(Option<Ticket>),
    TicketUpdated(Ticket),
    Dashboard(DashboardView),
}

impl Outcome {
    /// The toast the original demo would have shown for this outcome.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Outcome::SignedIn(_) => Some(Notification::success("Login successful!")),
            Outcome::SignedOut => Some(Notification::info("Logged out successfully!")),
            Outcome::TicketCreated(_) => {
                Some(Notification::success("Ticket created successfully!"))
            }
            Outcome::TicketView(Some(ticket)) => Some(Notification::info(format!(
                "Viewing ticket: {}",
                ticket.title
            ))),
            Outcome::TicketView(None) => None,
            Outcome::TicketUpdated(_) => None,
            Outcome::Dashboard(_) => None,
        }
    }
}

/// The application core: the ticket store and the session, wired to the
/// typed command model.
pub struct App {
    store: TicketStore,
    session: Session,
}

impl App {
    pub fn new(store: TicketStore, session: Session) -> Self {
        App { store, session }
    }

    pub fn store(&self) -> &TicketStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The signed-in user, or `NotSignedIn`.
    fn require_user(&self) -> Result<User> {
        self.session
            .current()
            .cloned()
            .ok_or(QuickdeskError::NotSignedIn)
    }

    /// Apply one command synchronously and to completion.
    pub fn handle(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::SignIn {
                name,
                email,
                role,
                company,
            } => {
                let user = User {
                    // Millisecond wall clock, like the original demo's ids.
                    id: Timestamp::now().as_millisecond().max(0) as u64,
                    name,
                    email,
                    role,
                    company,
                };
                self.session.sign_in(user.clone())?;
                Ok(Outcome::SignedIn(user))
            }

            Command::SignOut => {
                self.session.sign_out()?;
                Ok(Outcome::SignedOut)
            }

            Command::CreateTicket {
                title,
                description,
                category,
                priority,
            } => {
                let user = self.require_user()?;
                let draft = TicketDraft {
                    title,
                    description,
                    category,
                    priority,
                    author: user.name,
                };
                let ticket = self.store.create(&draft)?;
                Ok(Outcome::TicketCreated(ticket))
            }

            Command::ViewTicket { id } => Ok(Outcome::TicketView(self.store.find(id))),

            Command::ReplyToTicket { id, content } => {
                let user = self.require_user()?;
                let reply = Reply {
                    author: user.name,
                    role: user.role,
                    content,
                    timestamp: Timestamp::now(),
                };
                match self.store.add_reply(id, reply) {
                    Some(ticket) => Ok(Outcome::TicketUpdated(ticket)),
                    None => Ok(Outcome::TicketView(None)),
                }
            }

            Command::SetStatus { id, status } => match self.store.set_status(id, status) {
                Some(ticket) => Ok(Outcome::TicketUpdated(ticket)),
                None => Ok(Outcome::TicketView(None)),
            },

            Command::Upvote { id } => match self.store.upvote(id) {
                Some(ticket) => Ok(Outcome::TicketUpdated(ticket)),
                None => Ok(Outcome::TicketView(None)),
            },

            Command::Dashboard => {
                let user = self.require_user()?;
                let counts = self.store.status_counts(&user.name);
                let recent = self.store.recent_by_user(&user.name, RECENT_LIMIT);
                let mine = self.store.list_by_user(&user.name);
                Ok(Outcome::Dashboard(DashboardView {
                    user,
                    counts,
                    recent,
                    mine,
                }))
            }
        }
    }
}
