use std::cell::Cell;
use std::rc::Rc;

use crate::error::ChartResult;

/// Lifecycle of the external charting script as seen by one loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
}

/// How a host satisfied an injection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    /// A new script element was added; the caller owns it.
    Created,
    /// An element added by someone else is still loading; the callback was
    /// attached to it instead.
    Joined,
}

/// Page environment able to include a script resource.
pub trait ScriptHost {
    /// True when the library global is already usable.
    fn library_present(&self) -> bool;

    /// Starts loading `src` and arranges for `on_load` to run once it has
    /// loaded. Must not add a second element while one is in flight.
    fn inject(&mut self, src: &str, on_load: Box<dyn FnOnce()>) -> ChartResult<Injection>;

    /// Detaches the element created by the last [`Injection::Created`].
    /// Returns whether anything was removed.
    fn remove(&mut self) -> ChartResult<bool>;
}

/// Includes the charting library at most once and reports readiness.
pub struct ScriptLoader<H: ScriptHost> {
    host: H,
    src: String,
    state: Rc<Cell<LoadState>>,
    owns_element: bool,
}

impl<H: ScriptHost> ScriptLoader<H> {
    pub fn new(host: H, src: impl Into<String>) -> Self {
        Self {
            host,
            src: src.into(),
            state: Rc::new(Cell::new(LoadState::Idle)),
            owns_element: false,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state.get()
    }

    pub fn is_ready(&self) -> bool {
        self.state.get() == LoadState::Ready
    }

    /// Begins loading unless already loading or loaded.
    ///
    /// `on_ready` runs after the script's load event. When the library is
    /// already present it is not called; the returned state is `Ready`.
    pub fn mount(&mut self, on_ready: impl FnOnce() + 'static) -> ChartResult<LoadState> {
        if self.state.get() != LoadState::Idle {
            return Ok(self.state.get());
        }
        if self.host.library_present() {
            self.state.set(LoadState::Ready);
            return Ok(LoadState::Ready);
        }
        let state = Rc::clone(&self.state);
        let callback = Box::new(move || {
            state.set(LoadState::Ready);
            on_ready();
        });
        self.state.set(LoadState::Loading);
        match self.host.inject(&self.src, callback) {
            Ok(injection) => {
                self.owns_element = injection == Injection::Created;
                Ok(self.state.get())
            }
            Err(err) => {
                self.state.set(LoadState::Idle);
                Err(err)
            }
        }
    }

    /// Removes the script element if this loader added it. The readiness
    /// state is kept; a loaded library stays loaded.
    pub fn unmount(&mut self) -> ChartResult<bool> {
        if !std::mem::take(&mut self.owns_element) {
            return Ok(false);
        }
        self.host.remove()
    }
}
