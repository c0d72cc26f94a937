//! View-level choices shared by the session and configuration

use serde::{Deserialize, Serialize};

/// Which main view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Map,
    Table,
}
