//! User profile model.

use crate::model::role::Role;
use serde::{Deserialize, Serialize};

/// Profile card data shown and edited on the profile tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub school: String,
    pub location: String,
}
