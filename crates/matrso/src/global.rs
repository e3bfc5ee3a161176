//! Process-wide engine
//!
//! Hosts that need a global entry point share one [`Engine`] behind a
//! `parking_lot::Mutex`, so at most one catalogue call is in flight at a time.
//! The engine is created lazily from [`EngineConfig::from_env`].
//!
//! Calling [`with_engine`] again from inside its own closure deadlocks.

use crate::Engine;
use matrso_core::EngineConfig;
use parking_lot::{const_mutex, Mutex};

static ENGINE: Mutex<Option<Engine>> = const_mutex(None);

/// Run `f` with exclusive access to the process-wide engine
///
/// Results borrowed from the engine cannot outlive the closure; copy out
/// whatever is needed.
///
/// ```
/// use matrso::{with_engine, ExternalView};
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// let rows = with_engine(|engine| {
///     let a = ExternalView::new(2, 2, &data).unwrap();
///     engine.transpose(a).map(|out| out.rows())
/// });
/// assert_eq!(rows, Some(2));
/// ```
pub fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    let mut guard = ENGINE.lock();
    let engine = guard.get_or_insert_with(|| Engine::with_config(EngineConfig::from_env()));
    f(engine)
}

/// Replace the process-wide engine, discarding its output slot
pub fn reset_engine(config: EngineConfig) {
    *ENGINE.lock() = Some(Engine::with_config(config));
}
