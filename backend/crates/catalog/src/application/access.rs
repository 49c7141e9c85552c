//! Access rules for catalog mutations
//!
//! Handlers call these before touching the path or body, so a customer
//! gets the same answer whatever the payload.

use auth::User;

use crate::error::{CatalogError, CatalogResult};

/// Catalog mutations are admin-only
pub fn require_admin(actor: &User) -> CatalogResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(CatalogError::AccessDenied)
    }
}
