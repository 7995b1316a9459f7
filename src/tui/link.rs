//! # Deep-Link Publishing
//!
//! Writes the current navigation fragment into the terminal window title —
//! the terminal's one addressable, user-visible "location bar". `SetTitle`
//! replaces the previous title outright, which gives exactly the
//! replace-semantics contract the web original got from
//! `history.replaceState`: rapid navigation never piles up history.

use std::io::stdout;

use crossterm::execute;
use crossterm::terminal::SetTitle;
use log::debug;

use crate::core::deeplink;
use crate::core::navigation::ResolvedPosition;

/// Format the title for a resolved position. The item only appears in the
/// fragment while its detail panel is open, so a copied link restores the
/// same view.
pub fn title_for(position: &ResolvedPosition) -> String {
    let fragment = if position.detail_open {
        deeplink::format(position.category_id, position.item_id.as_deref())
    } else {
        deeplink::format(position.category_id, None)
    };
    format!("xmbfolio {fragment}")
}

/// Publish the position to the terminal title. Failure to set a title is
/// cosmetic and ignored.
pub fn publish(position: &ResolvedPosition) {
    let title = title_for(position);
    debug!("title: {title}");
    let _ = execute!(stdout(), SetTitle(title.as_str()));
}
