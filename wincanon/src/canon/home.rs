//! Tilde expansion.
//!
//! A leading `~` that is the whole path or is followed by a separator is
//! replaced with the context's home directory before any other stage
//! runs, so the home value itself is canonicalized along with the rest
//! of the input. `~user` forms are rejected rather than guessed at.

use std::borrow::Cow;

use crate::canon::lexer::is_separator;
use crate::context::EnvironmentContext;
use crate::error::{Error, Result};

/// Expand a leading tilde using the context's home directory.
///
/// Input without a leading `~` is returned unchanged. A `~` in any other
/// position is an ordinary character and is left alone.
pub(crate) fn expand_home<'a>(raw: &'a str, ctx: &EnvironmentContext) -> Result<Cow<'a, str>> {
    let Some(rest) = raw.strip_prefix('~') else {
        return Ok(Cow::Borrowed(raw));
    };

    if !rest.is_empty() && !rest.starts_with(is_separator) {
        // ~user expansion needs account-database lookups.
        let fragment: String = raw.chars().take_while(|c| !is_separator(*c)).collect();
        return Err(Error::UnsupportedHomeForm { fragment });
    }

    let home = ctx.home().ok_or(Error::HomeUnresolvable)?;
    Ok(Cow::Owned(format!("{home}{rest}")))
}
