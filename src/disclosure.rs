use std::rc::Rc;
use yew::functional::Reducible;

/// One question/answer pair of the FAQ. Defined once at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemState {
    Collapsed,
    Expanded,
}

impl ItemState {
    /// Indicator shown next to the question text.
    pub fn glyph(self) -> &'static str {
        match self {
            ItemState::Collapsed => "+",
            ItemState::Expanded => "−",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemState::Collapsed => "collapsed",
            ItemState::Expanded => "expanded",
        }
    }

    pub fn is_expanded(self) -> bool {
        self == ItemState::Expanded
    }

    /// Inline style for the answer body. Collapsed bodies have zero height and
    /// opacity with or without the page stylesheet mounted.
    pub fn body_style(self) -> &'static str {
        match self {
            ItemState::Collapsed => {
                "display: grid; grid-template-rows: 0fr; opacity: 0; \
                 transition: grid-template-rows 0.3s ease, opacity 0.3s ease;"
            }
            ItemState::Expanded => {
                "display: grid; grid-template-rows: 1fr; opacity: 1; \
                 transition: grid-template-rows 0.3s ease, opacity 0.3s ease;"
            }
        }
    }
}

/// Single-open accordion state: at most one index is expanded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureState {
    len: usize,
    expanded: Option<usize>,
}

impl DisclosureState {
    pub fn new(len: usize) -> Self {
        Self { len, expanded: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Expands `index`, or collapses it when it is already the expanded one.
    /// `index` must be below `len`.
    pub fn toggle(&mut self, index: usize) {
        debug_assert!(
            index < self.len,
            "disclosure index {} out of range for {} items",
            index,
            self.len
        );
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn current_expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn item_state(&self, index: usize) -> ItemState {
        if self.is_expanded(index) {
            ItemState::Expanded
        } else {
            ItemState::Collapsed
        }
    }
}

pub enum DisclosureAction {
    Toggle(usize),
    /// Start over with a new item count, all collapsed.
    Reset(usize),
}

impl Reducible for DisclosureState {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DisclosureAction::Toggle(index) => {
                let mut next = (*self).clone();
                next.toggle(index);
                log::debug!("disclosure toggled {} -> {:?}", index, next.expanded);
                Rc::new(next)
            }
            DisclosureAction::Reset(len) => Rc::new(DisclosureState::new(len)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded_items(state: &DisclosureState) -> Vec<usize> {
        (0..state.len()).filter(|i| state.is_expanded(*i)).collect()
    }

    #[test]
    fn starts_all_collapsed() {
        let state = DisclosureState::new(4);
        assert_eq!(state.current_expanded(), None);
        assert!(expanded_items(&state).is_empty());
        assert_eq!(state.item_state(0), ItemState::Collapsed);
    }

    #[test]
    fn single_toggle_expands_only_that_item() {
        for i in 0..5 {
            let mut state = DisclosureState::new(5);
            state.toggle(i);
            assert_eq!(state.current_expanded(), Some(i));
            assert_eq!(expanded_items(&state), vec![i]);
        }
    }

    #[test]
    fn double_toggle_returns_to_initial() {
        for i in 0..5 {
            let mut state = DisclosureState::new(5);
            state.toggle(i);
            state.toggle(i);
            assert_eq!(state, DisclosureState::new(5));
        }
    }

    #[test]
    fn switching_items_keeps_one_open() {
        for i in 0..4 {
            for j in (0..4).filter(|j| *j != i) {
                let mut state = DisclosureState::new(4);
                state.toggle(i);
                state.toggle(j);
                assert_eq!(state.item_state(j), ItemState::Expanded);
                assert_eq!(state.item_state(i), ItemState::Collapsed);
                assert_eq!(expanded_items(&state).len(), 1);
            }
        }
    }

    #[test]
    fn four_item_walkthrough() {
        let mut state = DisclosureState::new(4);

        state.toggle(0);
        assert_eq!(expanded_items(&state), vec![0]);

        state.toggle(0);
        assert!(expanded_items(&state).is_empty());

        state.toggle(2);
        assert_eq!(expanded_items(&state), vec![2]);

        state.toggle(1);
        assert_eq!(expanded_items(&state), vec![1]);
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn reducer_applies_toggle() {
        let state = Rc::new(DisclosureState::new(3));
        let state = state.reduce(DisclosureAction::Toggle(1));
        assert_eq!(state.current_expanded(), Some(1));
        let state = state.reduce(DisclosureAction::Toggle(1));
        assert_eq!(state.current_expanded(), None);
    }

    #[test]
    fn reset_collapses_and_adopts_new_length() {
        let state = Rc::new(DisclosureState::new(2));
        let state = state.reduce(DisclosureAction::Toggle(1));
        let state = state.reduce(DisclosureAction::Reset(5));
        assert_eq!(state.len(), 5);
        assert_eq!(state.current_expanded(), None);

        // an index valid only for the new length is accepted
        let state = state.reduce(DisclosureAction::Toggle(4));
        assert_eq!(state.current_expanded(), Some(4));
    }

    #[test]
    fn collapsed_body_style_hides_content() {
        let collapsed = ItemState::Collapsed.body_style();
        assert!(collapsed.contains("grid-template-rows: 0fr;"));
        assert!(collapsed.contains("opacity: 0;"));

        let expanded = ItemState::Expanded.body_style();
        assert!(expanded.contains("grid-template-rows: 1fr;"));
        assert!(expanded.contains("opacity: 1;"));
        assert!(!expanded.contains("  "));
    }

    #[test]
    fn glyph_follows_state() {
        assert_eq!(ItemState::Collapsed.glyph(), "+");
        assert_eq!(ItemState::Expanded.glyph(), "−");
    }

    #[test]
    fn empty_list_has_nothing_expanded() {
        let state = DisclosureState::new(0);
        assert!(state.is_empty());
        assert_eq!(state.current_expanded(), None);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_toggle_trips_debug_assert() {
        DisclosureState::new(2).toggle(2);
    }
}
