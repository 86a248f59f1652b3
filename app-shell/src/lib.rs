//! Target-independent core of the crypto chart component: symbols and
//! presets, the picker state, page settings, and the controllers that load
//! the charting script and keep a single widget alive.

pub mod error;
pub mod lifecycle;
pub mod loader;
pub mod selection;
pub mod settings;
pub mod symbol;

pub use error::{ChartError, ChartResult};
pub use lifecycle::{ChartWidget, Deferred, SyncOutcome, WidgetFactory, WidgetLifecycle};
pub use loader::{Injection, LoadState, ScriptHost, ScriptLoader};
pub use selection::SelectionState;
pub use settings::{ChartSettings, WidgetConfig, WidgetOptions};
pub use symbol::{Preset, Symbol, FALLBACK_NAME, PRESETS};
