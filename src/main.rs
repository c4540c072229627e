use clap::{Parser, Subcommand};
use jiff::Timestamp;
use owo_colors::OwoColorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use quickdesk::display::{format_ticket_card, format_ticket_line};
use quickdesk::types::{TicketPriority, TicketStatus, VALID_PRIORITIES, VALID_STATUSES};
use quickdesk::{
    App, Command, FileSessionStore, Notification, NotificationKind, Outcome, Result, Session,
    TicketStore, sample_tickets,
};

#[derive(Parser)]
#[command(name = "quickdesk")]
#[command(about = "Helpdesk ticket tracking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as a user
    Login {
        /// Display name
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Role label (default: End User)
        #[arg(short, long, default_value = "End User")]
        role: String,

        /// Company name
        #[arg(short, long)]
        company: Option<String>,
    },

    /// Sign out and clear the saved session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Create a new ticket
    #[command(visible_alias = "c")]
    Create {
        /// Ticket title
        title: String,

        /// Description text
        #[arg(short, long)]
        description: String,

        /// Category (e.g. Technical, Billing)
        #[arg(short, long)]
        category: String,

        /// Priority: low, medium, high (default: medium)
        #[arg(short, long, default_value = "medium", value_parser = parse_priority)]
        priority: TicketPriority,
    },

    /// List your tickets in creation order
    Ls,

    /// Show your most recently created tickets
    Recent {
        /// How many tickets to show
        #[arg(short = 'n', long, default_value = "3")]
        limit: usize,
    },

    /// Display one ticket with its reply thread
    #[command(visible_alias = "s")]
    Show {
        /// Ticket id
        id: u64,
    },

    /// Show your dashboard counters
    Stats,

    /// Search tickets by text
    Search {
        /// Query matched against title, description, category and author
        query: String,
    },

    /// Add a reply to a ticket
    Reply {
        /// Ticket id
        id: u64,

        /// Reply text
        content: String,
    },

    /// Set a ticket's status
    Status {
        /// Ticket id
        id: u64,

        /// New status (open, in_progress, resolved)
        #[arg(value_parser = parse_status)]
        status: TicketStatus,
    },

    /// Upvote a ticket
    Upvote {
        /// Ticket id
        id: u64,
    },
}

fn parse_priority(s: &str) -> std::result::Result<TicketPriority, String> {
    s.parse()
        .map_err(|_| format!("invalid priority '{s}', expected one of: {}", VALID_PRIORITIES.join(", ")))
}

fn parse_status(s: &str) -> std::result::Result<TicketStatus, String> {
    s.parse()
        .map_err(|_| format!("invalid status '{s}', expected one of: {}", VALID_STATUSES.join(", ")))
}

fn print_notification(notification: &Notification) {
    let tag = match notification.kind {
        NotificationKind::Success => "ok".green().to_string(),
        NotificationKind::Error => "error".red().to_string(),
        NotificationKind::Warning => "warn".yellow().to_string(),
        NotificationKind::Info => "info".cyan().to_string(),
    };
    println!("[{tag}] {}", notification.message);
}

fn dispatch(app: &mut App, command: Command) -> Result<()> {
    let now = Timestamp::now();
    let outcome = app.handle(command)?;

    match &outcome {
        Outcome::Dashboard(view) => {
            println!(
                "{} — {} tickets, {} open, {} resolved",
                view.user.name.cyan(),
                view.counts.total,
                view.counts.open,
                view.counts.resolved
            );
            if !view.recent.is_empty() {
                println!("\nRecent:");
                for ticket in &view.recent {
                    println!("  {}", format_ticket_line(ticket, now));
                }
            }
        }
        Outcome::TicketView(Some(ticket)) => print!("{}", format_ticket_card(ticket, now)),
        Outcome::TicketView(None) => println!("ticket not found"),
        Outcome::TicketCreated(ticket) | Outcome::TicketUpdated(ticket) => {
            println!("{}", format_ticket_line(ticket, now));
        }
        Outcome::SignedIn(_) | Outcome::SignedOut => {}
    }

    if let Some(notification) = outcome.notification() {
        print_notification(&notification);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let session_store = FileSessionStore::new(FileSessionStore::default_path()?);
    let mut session = Session::new(Box::new(session_store));
    session.restore()?;

    let mut store = TicketStore::empty();
    store.initialize(sample_tickets(Timestamp::now()));

    let mut app = App::new(store, session);
    let now = Timestamp::now();

    match cli.command {
        Commands::Login {
            name,
            email,
            role,
            company,
        } => dispatch(
            &mut app,
            Command::SignIn {
                name,
                email,
                role,
                company,
            },
        ),
        Commands::Logout => dispatch(&mut app, Command::SignOut),
        Commands::Whoami => {
            match app.session().current() {
                Some(user) => println!("{} <{}> ({})", user.name, user.email, user.role),
                None => println!("not signed in"),
            }
            Ok(())
        }
        Commands::Create {
            title,
            description,
            category,
            priority,
        } => dispatch(
            &mut app,
            Command::CreateTicket {
                title,
                description,
                category,
                priority: Some(priority),
            },
        ),
        Commands::Ls => {
            let user = app
                .session()
                .current()
                .ok_or(quickdesk::QuickdeskError::NotSignedIn)?;
            for ticket in app.store().list_by_user(&user.name) {
                println!("{}", format_ticket_line(&ticket, now));
            }
            Ok(())
        }
        Commands::Recent { limit } => {
            let user = app
                .session()
                .current()
                .ok_or(quickdesk::QuickdeskError::NotSignedIn)?;
            for ticket in app.store().recent_by_user(&user.name, limit) {
                println!("{}", format_ticket_line(&ticket, now));
            }
            Ok(())
        }
        Commands::Show { id } => dispatch(&mut app, Command::ViewTicket { id }),
        Commands::Stats => dispatch(&mut app, Command::Dashboard),
        Commands::Search { query } => {
            for ticket in app.store().search(&query) {
                println!("{}", format_ticket_line(&ticket, now));
            }
            Ok(())
        }
        Commands::Reply { id, content } => {
            dispatch(&mut app, Command::ReplyToTicket { id, content })
        }
        Commands::Status { id, status } => dispatch(&mut app, Command::SetStatus { id, status }),
        Commands::Upvote { id } => dispatch(&mut app, Command::Upvote { id }),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
