use crate::error::ChartResult;
use crate::settings::{WidgetConfig, WidgetOptions};
use crate::symbol::Symbol;

/// Live chart instance owned by the page.
pub trait ChartWidget {
    fn dispose(&mut self) -> ChartResult<()>;
}

/// Builds chart widgets inside a container element.
pub trait WidgetFactory {
    type Widget: ChartWidget;

    /// Drops whatever markup a previous widget left in the container.
    fn clear_container(&self, container_id: &str) -> ChartResult<()>;

    fn create(&self, config: &WidgetConfig) -> ChartResult<Self::Widget>;
}

/// Why [`WidgetLifecycle::sync`] did not build a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    ScriptPending,
    NoContainer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The live widget already shows this symbol.
    Unchanged,
    /// A widget was built; `replaced` tells whether an older one was disposed.
    Created { symbol: Symbol, replaced: bool },
    Deferred(Deferred),
}

struct Mounted<W> {
    symbol: Symbol,
    widget: W,
}

/// Keeps at most one widget alive, matching the current symbol.
pub struct WidgetLifecycle<F: WidgetFactory> {
    factory: F,
    container_id: String,
    options: WidgetOptions,
    current: Option<Mounted<F::Widget>>,
}

impl<F: WidgetFactory> WidgetLifecycle<F> {
    pub fn new(factory: F, container_id: impl Into<String>, options: WidgetOptions) -> Self {
        Self {
            factory,
            container_id: container_id.into(),
            options,
            current: None,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    pub fn live_symbol(&self) -> Option<&Symbol> {
        self.current.as_ref().map(|m| &m.symbol)
    }

    /// Brings the widget in line with `(script_ready, symbol)`.
    ///
    /// The previous widget is always disposed before a new one is created.
    /// Without a ready script or a mounted container nothing is built.
    pub fn sync(
        &mut self,
        script_ready: bool,
        symbol: &Symbol,
        container_mounted: bool,
    ) -> ChartResult<SyncOutcome> {
        if script_ready && container_mounted && self.live_symbol() == Some(symbol) {
            return Ok(SyncOutcome::Unchanged);
        }
        let replaced = self.teardown()?;
        if !script_ready {
            return Ok(SyncOutcome::Deferred(Deferred::ScriptPending));
        }
        if !container_mounted {
            return Ok(SyncOutcome::Deferred(Deferred::NoContainer));
        }

        self.factory.clear_container(&self.container_id)?;
        let config = WidgetConfig::new(symbol, &self.container_id, &self.options);
        let widget = self.factory.create(&config)?;
        self.current = Some(Mounted {
            symbol: symbol.clone(),
            widget,
        });
        Ok(SyncOutcome::Created {
            symbol: symbol.clone(),
            replaced,
        })
    }

    /// Disposes the live widget, if any. The slot is cleared even when
    /// disposal fails.
    pub fn teardown(&mut self) -> ChartResult<bool> {
        match self.current.take() {
            Some(mut mounted) => {
                mounted.widget.dispose()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<F: WidgetFactory> Drop for WidgetLifecycle<F> {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Clear(String),
        Create(String),
        Dispose(String),
    }

    #[derive(Clone, Default)]
    struct Journal(Rc<RefCell<Vec<Event>>>);

    impl Journal {
        fn events(&self) -> Vec<Event> {
            self.0.borrow().clone()
        }

        fn live(&self) -> i64 {
            self.events().iter().fold(0, |n, e| match e {
                Event::Create(_) => n + 1,
                Event::Dispose(_) => n - 1,
                Event::Clear(_) => n,
            })
        }
    }

    struct FakeWidget {
        symbol: String,
        journal: Journal,
        fail_dispose: bool,
    }

    impl ChartWidget for FakeWidget {
        fn dispose(&mut self) -> ChartResult<()> {
            self.journal.0.borrow_mut().push(Event::Dispose(self.symbol.clone()));
            if self.fail_dispose {
                return Err(ChartError::Widget("remove threw".into()));
            }
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct FakeFactory {
        journal: Journal,
        fail_create: bool,
        fail_dispose: bool,
        configs: Rc<RefCell<Vec<WidgetConfig>>>,
    }

    impl WidgetFactory for FakeFactory {
        type Widget = FakeWidget;

        fn clear_container(&self, container_id: &str) -> ChartResult<()> {
            self.journal.0.borrow_mut().push(Event::Clear(container_id.into()));
            Ok(())
        }

        fn create(&self, config: &WidgetConfig) -> ChartResult<FakeWidget> {
            if self.fail_create {
                return Err(ChartError::Widget("TradingView is not defined".into()));
            }
            self.configs.borrow_mut().push(config.clone());
            self.journal.0.borrow_mut().push(Event::Create(config.symbol.clone()));
            Ok(FakeWidget {
                symbol: config.symbol.clone(),
                journal: self.journal.clone(),
                fail_dispose: self.fail_dispose,
            })
        }
    }

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    fn lifecycle(factory: &FakeFactory) -> WidgetLifecycle<FakeFactory> {
        WidgetLifecycle::new(factory.clone(), "tradingview-chart", WidgetOptions::default())
    }

    #[test]
    fn nothing_built_before_script_ready() {
        let factory = FakeFactory::default();
        let mut lc = lifecycle(&factory);
        for s in ["BTCUSD", "ETHUSD", "DOGEUSD"] {
            let out = lc.sync(false, &sym(s), true).unwrap();
            assert_eq!(out, SyncOutcome::Deferred(Deferred::ScriptPending));
        }
        assert!(factory.journal.events().is_empty());
        assert!(!lc.is_live());
    }

    #[test]
    fn nothing_built_without_container() {
        let factory = FakeFactory::default();
        let mut lc = lifecycle(&factory);
        let out = lc.sync(true, &sym("BTCUSD"), false).unwrap();
        assert_eq!(out, SyncOutcome::Deferred(Deferred::NoContainer));
        assert!(factory.journal.events().is_empty());
    }

    #[test]
    fn ready_builds_widget_with_config() {
        let factory = FakeFactory::default();
        let mut lc = lifecycle(&factory);
        let out = lc.sync(true, &sym("BTCUSD"), true).unwrap();
        assert_eq!(
            out,
            SyncOutcome::Created {
                symbol: sym("BTCUSD"),
                replaced: false
            }
        );
        assert_eq!(
            factory.journal.events(),
            vec![
                Event::Clear("tradingview-chart".into()),
                Event::Create("BTCUSD".into())
            ]
        );
        let configs = factory.configs.borrow();
        assert_eq!(configs[0].container_id, "tradingview-chart");
        assert_eq!(configs[0].interval, "1D");
        assert!(configs[0].autosize);
    }

    #[test]
    fn symbol_change_disposes_before_creating() {
        let factory = FakeFactory::default();
        let mut lc = lifecycle(&factory);
        lc.sync(true, &sym("BTCUSD"), true).unwrap();
        let out = lc.sync(true, &sym("ETHUSD"), true).unwrap();
        assert_eq!(
            out,
            SyncOutcome::Created {
                symbol: sym("ETHUSD"),
                replaced: true
            }
        );
        assert_eq!(
            factory.journal.events()[2..],
            [
                Event::Dispose("BTCUSD".into()),
                Event::Clear("tradingview-chart".into()),
                Event::Create("ETHUSD".into()),
            ]
        );
        assert_eq!(factory.journal.live(), 1);
        assert_eq!(lc.live_symbol(), Some(&sym("ETHUSD")));
    }

    #[test]
    fn at_most_one_widget_across_changes() {
        let factory = FakeFactory::default();
        let mut lc = lifecycle(&factory);
        for s in ["BTCUSD", "SOLUSD", "SOLUSD", "ADAUSD", "DOGEUSD", "BTCUSD"] {
            lc.sync(true, &sym(s), true).unwrap();
            assert_eq!(factory.journal.live(), 1);
        }
    }

    #[test]
    fn unchanged_inputs_keep_widget() {
        let factory = FakeFactory::default();
        let mut lc = lifecycle(&factory);
        lc.sync(true, &sym("BTCUSD"), true).unwrap();
        let out = lc.sync(true, &sym("BTCUSD"), true).unwrap();
        assert_eq!(out, SyncOutcome::Unchanged);
        assert_eq!(factory.journal.events().len(), 2);
    }

    #[test]
    fn losing_container_tears_down() {
        let factory = FakeFactory::default();
        let mut lc = lifecycle(&factory);
        lc.sync(true, &sym("BTCUSD"), true).unwrap();
        let out = lc.sync(true, &sym("BTCUSD"), false).unwrap();
        assert_eq!(out, SyncOutcome::Deferred(Deferred::NoContainer));
        assert_eq!(factory.journal.live(), 0);
    }

    #[test]
    fn teardown_and_drop_dispose() {
        let factory = FakeFactory::default();
        let mut lc = lifecycle(&factory);
        lc.sync(true, &sym("BTCUSD"), true).unwrap();
        assert!(lc.teardown().unwrap());
        assert!(!lc.teardown().unwrap());
        assert_eq!(factory.journal.live(), 0);

        lc.sync(true, &sym("XRPUSD"), true).unwrap();
        drop(lc);
        assert_eq!(factory.journal.live(), 0);
    }

    #[test]
    fn failed_dispose_still_clears_slot() {
        let factory = FakeFactory {
            fail_dispose: true,
            ..Default::default()
        };
        let mut lc = lifecycle(&factory);
        lc.sync(true, &sym("BTCUSD"), true).unwrap();
        assert!(lc.teardown().is_err());
        assert!(!lc.is_live());
    }

    #[test]
    fn construction_error_is_returned() {
        let factory = FakeFactory {
            fail_create: true,
            ..Default::default()
        };
        let mut lc = lifecycle(&factory);
        let err = lc.sync(true, &sym("BTCUSD"), true).unwrap_err();
        assert!(matches!(err, ChartError::Widget(_)));
        assert!(!lc.is_live());
    }
}
