//! Splash Visit-Gate
//!
//! Shows the splash overlay once per browser session. `?splash=true` forces it
//! without remembering the visit, `?clear=true` forgets a previous visit.

use std::cell::Cell;

use crate::storage::SessionStore;

const VISITED_VALUE: &str = "true";

/// Query parameters that influence the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchParams {
    pub force_splash: bool,
    pub clear_visit: bool,
}

impl LaunchParams {
    /// Build from a query lookup; only the literal value `true` counts
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let is_true = |name: &str| get(name).as_deref() == Some("true");
        Self {
            force_splash: is_true("splash"),
            clear_visit: is_true("clear"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Show { forced: bool },
    Suppress,
}

/// Forget the visit when `?clear=true` was given
pub fn apply_clear<S: SessionStore + ?Sized>(store: &S, key: &str, params: LaunchParams) {
    if params.clear_visit {
        store.remove(key);
        log::info!("[SPLASH] Session visit flag cleared");
    }
}

/// Apply `clear`, then decide whether the splash shows
pub fn evaluate<S: SessionStore + ?Sized>(store: &S, key: &str, params: LaunchParams) -> GateDecision {
    apply_clear(store, key, params);
    if params.force_splash {
        return GateDecision::Show { forced: true };
    }
    let visited = store.get(key).is_some_and(|v| !v.is_empty());
    if visited {
        GateDecision::Suppress
    } else {
        GateDecision::Show { forced: false }
    }
}

/// Presentation side of the splash
pub trait Overlay {
    /// Display the overlay and suspend page scrolling
    fn show(&self);
    /// Animate out, then hide and restore scrolling
    fn dismiss(&self);
    /// Hide at once and restore scrolling
    fn conceal(&self);
}

impl<T: Overlay + ?Sized> Overlay for &T {
    fn show(&self) {
        (**self).show()
    }

    fn dismiss(&self) {
        (**self).dismiss()
    }

    fn conceal(&self) {
        (**self).conceal()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Already seen this session; never shown
    Suppressed,
    Shown,
    Dismissed,
}

/// One page load's splash lifecycle
pub struct SplashGate<S, O> {
    store: S,
    overlay: O,
    key: String,
    forced: bool,
    phase: Cell<Phase>,
}

impl<S: SessionStore, O: Overlay> SplashGate<S, O> {
    pub fn start(store: S, overlay: O, key: &str, params: LaunchParams) -> Self {
        let (phase, forced) = match evaluate(&store, key, params) {
            GateDecision::Show { forced } => {
                overlay.show();
                (Phase::Shown, forced)
            }
            GateDecision::Suppress => {
                overlay.conceal();
                (Phase::Suppressed, false)
            }
        };
        log::debug!("[SPLASH] {:?} (forced={})", phase, forced);
        Self {
            store,
            overlay,
            key: key.to_string(),
            forced,
            phase: Cell::new(phase),
        }
    }

    /// Start on a page that may lack the overlay. Without one nothing is
    /// shown or remembered, but `?clear=true` still clears the flag.
    pub fn open(store: S, overlay: Option<O>, key: &str, params: LaunchParams) -> Option<Self> {
        match overlay {
            Some(overlay) => Some(Self::start(store, overlay, key, params)),
            None => {
                apply_clear(&store, key, params);
                None
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// Dismiss from a timer or a click. Only the first call while shown acts;
    /// returns whether this call did.
    pub fn dismiss(&self) -> bool {
        if self.phase.get() != Phase::Shown {
            return false;
        }
        self.phase.set(Phase::Dismissed);
        if !self.forced {
            self.store.set(&self.key, VISITED_VALUE);
        }
        self.overlay.dismiss();
        true
    }
}
