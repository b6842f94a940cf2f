//! Plain-text rendering of view-model state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use crate::api::ServerInfo;
use crate::messages;
use crate::pages::{AliasStatus, Banner, DashboardPage, LinkCard, LoadState};
use crate::pagination::PaginationControls;

pub fn server_info(info: &ServerInfo) -> String {
    format!("tag:  {}\nhash: {}\ndate: {}\n", info.tag, info.hash, info.date)
}

pub fn alias_status(alias: &str, status: AliasStatus) -> String {
    match status.message() {
        Some(message) => format!("{alias}: {message}"),
        None => alias.to_owned(),
    }
}

pub fn banner(banner: &Banner) -> String {
    match banner {
        Banner::Created { short_url: Some(url) } => format!("{}\n  {url}", banner.message()),
        other => other.message().to_owned(),
    }
}

pub fn card(card: &LinkCard) -> String {
    format!(
        "{:>3}. {}\n     {}\n     created {} | clicks {}\n",
        card.index, card.short_url, card.target, card.created, card.clicks
    )
}

pub fn pagination(controls: &PaginationControls) -> String {
    let mut line = format!("page {}/{}", controls.current, controls.total_pages);
    if !controls.prev_disabled {
        let _ = write!(line, "  prev: --page {}", controls.current - 1);
    }
    if !controls.next_disabled {
        let _ = write!(line, "  next: --page {}", controls.current + 1);
    }
    line.push('\n');
    line
}

pub fn dashboard(page: &DashboardPage) -> String {
    let stats = page.stats();
    let mut out = String::new();
    if let Some(user) = page.username() {
        let _ = writeln!(out, "{user}: {} links, showing {}", stats.total, stats.shown);
    }
    match page.state() {
        LoadState::Empty => {
            let _ = writeln!(out, "{}", messages::NO_LINKS);
        }
        LoadState::Failed(message) => {
            let _ = writeln!(out, "{message}");
        }
        LoadState::Loaded => {
            for link in page.cards() {
                out.push_str(&card(&link));
            }
        }
        LoadState::Idle | LoadState::Loading => {}
    }
    if let Some(controls) = page.pagination() {
        out.push_str(&pagination(&controls));
    }
    out
}
