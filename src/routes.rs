//! Route paths, link builders and module-id resolution.

use crate::config::BASE_PATH;
use crate::content::{find_module, Module};
use thiserror::Error;

pub const HOME_PATH: &str = "/";
pub const MODULE_PATH: &str = "/modulo/:module_id";
pub const FALLBACK_PATH: &str = "/*any";
pub const MODULE_ID_PARAM: &str = "module_id";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleIdError {
    #[error("module id {0:?} is not a positive integer")]
    NotNumeric(String),
    #[error("there is no module {0}")]
    OutOfRange(u32),
}

/// Resolve the `:module_id` route segment to a module.
pub fn resolve_module(raw: &str) -> Result<&'static Module, ModuleIdError> {
    let id: u32 = raw
        .parse()
        .map_err(|_| ModuleIdError::NotNumeric(raw.to_string()))?;
    find_module(id).ok_or(ModuleIdError::OutOfRange(id))
}

pub fn home_href() -> String {
    format!("{}/", BASE_PATH.trim_end_matches('/'))
}

pub fn module_href(id: u32) -> String {
    format!("{}/modulo/{}", BASE_PATH.trim_end_matches('/'), id)
}
