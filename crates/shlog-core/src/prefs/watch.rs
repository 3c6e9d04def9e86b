//! Debug flag subscription

use crate::context::LogContext;

use super::traits::{PreferenceResult, PreferenceSource, Subscription};

/// Preference key gating DEBUG output
pub const DEBUG_KEY: &str = "debug";

/// Drive `context`'s debug flag from `source`
///
/// Reads `debug` once (absent means `false`), then keeps the flag in sync
/// whenever the source reports a change to that key. The listener lives as
/// long as the source does. A failing initial read is returned as-is; the
/// default only covers a missing key.
///
/// # Example
///
/// ```
/// use shlog_core::prefs::{watch_debug, MemoryPreferences, PreferenceSource};
/// use shlog_core::LogContext;
///
/// let prefs = MemoryPreferences::new();
/// let context = LogContext::new();
/// watch_debug(&prefs, &context).unwrap();
///
/// prefs.set("debug", "true").unwrap();
/// assert!(context.is_debug());
/// ```
pub fn watch_debug(
    source: &dyn PreferenceSource,
    context: &LogContext,
) -> PreferenceResult<Subscription> {
    let enabled = source.get_bool(DEBUG_KEY, false)?;
    context.set_debug(enabled);
    tracing::debug!(source = source.name(), enabled, "debug flag initialized");

    let context = context.clone();
    let subscription = source.subscribe(Box::new(move |change| {
        if change.key == DEBUG_KEY {
            let enabled = change.as_bool(false);
            context.set_debug(enabled);
            tracing::debug!(enabled, "debug flag changed");
        }
    }));

    Ok(subscription)
}
