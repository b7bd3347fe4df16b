// HTML rendering - pages are plain strings assembled from small helpers
// Every interpolated piece of text goes through `html::escape`

pub mod action_center;
pub mod components;
pub mod detail;
pub mod discovery;
pub mod ecosystem;
pub mod html;
pub mod layout;

pub use action_center::action_center_page;
pub use detail::detail_page;
pub use discovery::{demo_page, discovery_page};
pub use ecosystem::ecosystem_page;

use crate::{core::SessionId, views::PageView};

/// Renders whichever page a session holds.
pub fn session_page(session: SessionId, view: &PageView) -> String {
    match view {
        PageView::Detail(view) => detail_page(session, view),
        PageView::Ecosystem(view) => ecosystem_page(session, view),
        PageView::ActionCenter(view) => action_center_page(session, view),
    }
}
