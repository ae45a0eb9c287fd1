//! Page enhancers
//!
//! Each one works directly on the server-rendered markup; none depends on
//! another beyond sharing the progress bar helper.

pub mod alerts;
pub mod cards;
pub mod confirm;
pub mod loading;
pub mod password;
pub mod progress;
pub mod stats;
pub mod tabs;
pub mod theme;

pub use alerts::{hide_alerts, schedule_alert_dismissal};
pub use cards::decorate_cards;
pub use confirm::confirm_action;
pub use loading::{hide_loading, show_loading};
pub use password::{attach_password_listeners, check_password_strength};
pub use progress::update_progress_bars;
pub use stats::{refresh_stats, render_stats};
pub use tabs::{attach_tab_listeners, switch_tab};
pub use theme::{apply_theme, attach_theme_toggles, load_theme, toggle_theme};
