//! Colored ticket rendering for the CLI shell.

use jiff::Timestamp;
use owo_colors::OwoColorize;

use crate::formatting::{SUMMARY_MAX, format_time_ago, truncate_summary};
use crate::types::{Ticket, TicketPriority, TicketStatus};

/// Format a ticket for single-line display with colors.
pub fn format_ticket_line(ticket: &Ticket, now: Timestamp) -> String {
    let id = format!("#{:<4}", ticket.id);
    let status_str = format!("[{}]", ticket.status.label());

    let colored_status = match ticket.status {
        TicketStatus::Open => status_str.yellow().to_string(),
        TicketStatus::InProgress => status_str.cyan().to_string(),
        TicketStatus::Resolved => status_str.green().to_string(),
    };

    let priority_str = format!("[{}]", ticket.priority.label());
    let colored_priority = match ticket.priority {
        TicketPriority::High => priority_str.red().to_string(),
        TicketPriority::Medium => priority_str.yellow().to_string(),
        TicketPriority::Low => priority_str,
    };

    format!(
        "{} {}{} {} ({})",
        id.cyan(),
        colored_priority,
        colored_status,
        ticket.title,
        format_time_ago(ticket.created, now)
    )
}

/// Format a ticket as a multi-line card: header line, truncated description,
/// vote counts and the reply thread.
pub fn format_ticket_card(ticket: &Ticket, now: Timestamp) -> String {
    let mut out = String::new();
    out.push_str(&format_ticket_line(ticket, now));
    out.push('\n');
    out.push_str(&format!(
        "  {} | {} | {} {} / {} {}\n",
        ticket.category,
        ticket.author,
        ticket.upvotes,
        "up".green(),
        ticket.downvotes,
        "down".red(),
    ));
    out.push_str(&format!(
        "  {}\n",
        truncate_summary(&ticket.description, SUMMARY_MAX)
    ));

    for reply in &ticket.replies {
        out.push_str(&format!(
            "  > {} ({}) {}: {}\n",
            reply.author.cyan(),
            reply.role,
            format_time_ago(reply.timestamp, now).dimmed(),
            reply.content
        ));
    }

    out
}
