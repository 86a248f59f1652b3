use crate::symbol::{Preset, Symbol};

/// Symbol picker state: the displayed symbol plus the pending search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    symbol: Symbol,
    search_text: String,
}

impl SelectionState {
    pub fn new(initial: Symbol) -> Self {
        Self {
            symbol: initial,
            search_text: String::new(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn select_preset(&mut self, preset: &Preset) {
        self.set_symbol(preset.to_symbol());
    }

    /// Applies the pending search text. Returns `false` and leaves everything
    /// untouched when the text is blank.
    pub fn submit_search(&mut self) -> bool {
        match Symbol::from_search(&self.search_text) {
            Some(symbol) => {
                self.set_symbol(symbol);
                true
            }
            None => false,
        }
    }

    pub fn set_symbol(&mut self, symbol: Symbol) {
        self.symbol = symbol;
        self.search_text.clear();
    }

    pub fn display_name(&self) -> &'static str {
        self.symbol.display_name()
    }

    /// Whether `preset` is the one currently shown (used for highlighting).
    pub fn is_active(&self, preset: &Preset) -> bool {
        self.symbol.as_str() == preset.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::PRESETS;

    fn state() -> SelectionState {
        SelectionState::new(Symbol::new("BTCUSD").unwrap())
    }

    #[test]
    fn preset_click_sets_symbol_and_clears_search() {
        for preset in PRESETS {
            let mut s = state();
            s.set_search_text("partial");
            s.select_preset(preset);
            assert_eq!(s.symbol().as_str(), preset.symbol);
            assert_eq!(s.search_text(), "");
            assert!(s.is_active(preset));
            assert_eq!(s.display_name(), preset.name);
        }
    }

    #[test]
    fn submit_normalizes_and_clears() {
        let mut s = state();
        s.set_search_text("doge");
        assert!(s.submit_search());
        assert_eq!(s.symbol().as_str(), "DOGEUSD");
        assert_eq!(s.search_text(), "");
        assert_eq!(s.display_name(), "Cryptocurrency");
        assert!(PRESETS.iter().all(|p| !s.is_active(p)));
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut s = state();
        s.set_search_text("   ");
        assert!(!s.submit_search());
        assert_eq!(s.symbol().as_str(), "BTCUSD");
        assert_eq!(s.search_text(), "   ");
    }

    #[test]
    fn only_matching_preset_is_active() {
        let s = state();
        let active: Vec<_> = PRESETS.iter().filter(|p| s.is_active(p)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Bitcoin");
    }
}
