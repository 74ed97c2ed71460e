use ratatui::style::Color;

pub const APP_TITLE: &str = " Job Board ";
pub const TAB_ALL: &str = "All Jobs";
pub const TAB_SAVED: &str = "Saved";

pub const LOADING_TEXT: &str = "Loading jobs...";
pub const NO_JOBS_TEXT: &str = "No jobs found matching your criteria.";
pub const RELOAD_HINT: &str = "Restart the app to try again.";

pub const SAVED_MARK: &str = "♥";
pub const UNSAVED_MARK: &str = "♡";

pub const HELP_BROWSE: &str =
    " j/k:move  s:save  /:search  c/C:category  Tab:all/saved  q:quit";
pub const HELP_SEARCH: &str = " type to filter  Enter:done  Esc:clear";

pub const COLOR_SCORE_HIGH: Color = Color::Green;
pub const COLOR_SCORE_MEDIUM: Color = Color::Yellow;
pub const COLOR_SCORE_LOW: Color = Color::Red;
pub const COLOR_MUTED: Color = Color::DarkGray;
pub const COLOR_ACCENT: Color = Color::Blue;
