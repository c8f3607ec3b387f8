// Copyright 2025 Icinga Web Response Project Authors. Licensed under Apache-2.0.

pub mod config;
pub mod cookies;
pub mod errors;
pub mod request;
pub mod response;
pub mod session;
mod util;

pub use crate::{
    config::CookieDefaults,
    cookies::CookieSet,
    errors::{Error, Result},
    request::RequestContext,
    response::{JsonResponse, Response},
    session::{MockSession, Session},
};
