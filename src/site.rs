//! Page selector and the reducer that owns all mutable site state.

use std::rc::Rc;

use yew::Reducible;

use crate::polls::{PollId, VoteMap};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    About,
    Dna,
    Contact,
    Faqs,
}

impl Page {
    /// Every navigation surface (button row, dropdown) renders from this list.
    pub const ALL: [Page; 5] = [Page::Home, Page::About, Page::Dna, Page::Contact, Page::Faqs];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Dna => "dna",
            Page::Contact => "contact",
            Page::Faqs => "faqs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Dna => "Our DNA",
            Page::Contact => "Contact",
            Page::Faqs => "FAQs",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.id() == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SiteAction {
    Navigate(Page),
    Vote { poll: PollId, option: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteState {
    pub page: Page,
    pub votes: VoteMap,
}

impl SiteState {
    /// Applies one action. Returns false when the action was rejected and
    /// nothing changed.
    pub fn apply(&mut self, action: SiteAction) -> bool {
        match action {
            SiteAction::Navigate(page) => {
                log::debug!("navigate {} -> {}", self.page.id(), page.id());
                self.page = page;
                true
            }
            SiteAction::Vote { poll, option } => match self.votes.vote(poll, &option) {
                Ok(chosen) => {
                    log::debug!("poll {poll}: voted {chosen:?}");
                    true
                }
                Err(e) => {
                    log::warn!("vote ignored: {e}");
                    false
                }
            },
        }
    }

    pub fn is_visible(&self, page: Page) -> bool {
        self.page == page
    }

    pub fn visible_pages(&self) -> impl Iterator<Item = Page> + '_ {
        Page::ALL.into_iter().filter(|p| self.is_visible(*p))
    }
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(poll: u8, option: &str) -> SiteAction {
        SiteAction::Vote { poll: PollId(poll), option: option.to_string() }
    }

    #[test]
    fn starts_on_home_and_nothing_else() {
        let state = SiteState::default();
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.visible_pages().collect::<Vec<_>>(), vec![Page::Home]);
    }

    #[test]
    fn exactly_one_page_visible_after_any_navigation_sequence() {
        let mut state = SiteState::default();
        // walk every ordered pair so every transition is exercised
        for from in Page::ALL {
            for to in Page::ALL {
                state.apply(SiteAction::Navigate(from));
                state.apply(SiteAction::Navigate(to));
                let visible: Vec<Page> = state.visible_pages().collect();
                assert_eq!(visible, vec![to]);
            }
        }
    }

    #[test]
    fn navigation_keeps_votes() {
        let mut state = SiteState::default();
        assert!(state.apply(vote(1, "Education")));
        state.apply(SiteAction::Navigate(Page::Faqs));
        state.apply(SiteAction::Navigate(Page::Home));
        assert_eq!(state.votes.selection(PollId(1)), Some("Education"));
    }

    #[test]
    fn rejected_vote_reports_no_change() {
        let mut state = SiteState::default();
        assert!(!state.apply(vote(1, "Space tourism")));
        assert!(!state.apply(vote(9, "Yes")));
        assert_eq!(state, SiteState::default());
    }

    #[test]
    fn reducer_returns_same_rc_on_rejected_vote() {
        let state = Rc::new(SiteState::default());
        let next = state.clone().reduce(vote(2, "Maybe later, never"));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(SiteAction::Navigate(Page::Contact));
        assert_eq!(next.page, Page::Contact);
        assert_eq!(state.page, Page::Home);
    }

    #[test]
    fn page_ids_parse_back() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
        assert_eq!(Page::from_id("blog"), None);
        assert_eq!(Page::from_id(""), None);
    }
}
