use std::collections::HashSet;
use std::rc::Rc;

use yew::prelude::*;

/// Interactive state of one rendered landing page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub menu_open: bool,
    pub dropdown_open: bool,
    pub faq_open: Option<usize>,
    revealed: HashSet<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    ToggleMenu,
    CloseMenu,
    ToggleDropdown,
    ToggleFaq(usize),
    Reveal(Vec<String>),
}

impl PageState {
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// `None` when the action changes nothing, so the page skips a render.
    pub fn apply(&self, action: PageAction) -> Option<Self> {
        let mut next = self.clone();
        match action {
            PageAction::ToggleMenu => next.menu_open = !next.menu_open,
            PageAction::CloseMenu => {
                if !self.menu_open && !self.dropdown_open {
                    return None;
                }
                next.menu_open = false;
                next.dropdown_open = false;
            }
            PageAction::ToggleDropdown => next.dropdown_open = !next.dropdown_open,
            PageAction::ToggleFaq(index) => {
                next.faq_open = if self.faq_open == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
            PageAction::Reveal(ids) => {
                let before = next.revealed.len();
                next.revealed.extend(ids);
                if next.revealed.len() == before {
                    return None;
                }
            }
        }
        Some(next)
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggles_and_closes() {
        let state = PageState::default();
        let open = state.apply(PageAction::ToggleMenu).unwrap();
        assert!(open.menu_open);
        let closed = open.apply(PageAction::CloseMenu).unwrap();
        assert!(!closed.menu_open);
        assert!(closed.apply(PageAction::CloseMenu).is_none());
    }

    #[test]
    fn close_menu_also_folds_dropdown() {
        let state = PageState::default().apply(PageAction::ToggleDropdown).unwrap();
        assert!(state.dropdown_open);
        let closed = state.apply(PageAction::CloseMenu).unwrap();
        assert!(!closed.dropdown_open);
    }

    #[test]
    fn only_one_faq_item_is_open() {
        let state = PageState::default().apply(PageAction::ToggleFaq(2)).unwrap();
        assert_eq!(state.faq_open, Some(2));
        let state = state.apply(PageAction::ToggleFaq(0)).unwrap();
        assert_eq!(state.faq_open, Some(0));
        let state = state.apply(PageAction::ToggleFaq(0)).unwrap();
        assert_eq!(state.faq_open, None);
    }

    #[test]
    fn reveal_is_monotone_and_idempotent() {
        let state = PageState::default()
            .apply(PageAction::Reveal(vec!["hero".into(), "features-0".into()]))
            .unwrap();
        assert!(state.is_revealed("hero"));
        assert!(state.apply(PageAction::Reveal(vec!["hero".into()])).is_none());
        assert!(state.apply(PageAction::Reveal(Vec::new())).is_none());

        let state = state.apply(PageAction::Reveal(vec!["faq".into()])).unwrap();
        assert!(state.is_revealed("hero"));
        assert!(state.is_revealed("faq"));
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(PageState::default());
        let next = state.clone().reduce(PageAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
