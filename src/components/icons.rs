//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuDownload as Download,
        LuFolder as Folder, LuHouse as Home, LuLoader as Loading, LuSearch as Search,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Loading, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsDownload as Download, BsFolder as Folder, BsHouseFill as Home, BsSearch as Search,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(DOWNLOAD, Download);
themed_icon!(FOLDER, Folder);
themed_icon!(HOME, Home);
themed_icon!(LOADING, Loading);
themed_icon!(SEARCH, Search);
