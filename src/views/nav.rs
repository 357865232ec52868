use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::site::Page;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub organization: AttrValue,
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

/// Every page with whether it is the current one. Feeds both the button row
/// and the dropdown.
pub fn nav_entries(current: Page) -> impl Iterator<Item = (Page, bool)> {
    Page::ALL.into_iter().map(move |page| (page, page == current))
}

/// Button row on wide screens, dropdown on narrow ones (see styles.css).
/// Both read and write the same selector.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let select_ref = use_node_ref();

    // `selected` only sets the attribute; once the user has picked an option
    // by hand the browser ignores it, so push the live value too.
    {
        let select_ref = select_ref.clone();
        use_effect_with(props.current, move |page| {
            match select_ref.cast::<HtmlSelectElement>() {
                Some(sel) => sel.set_value(page.id()),
                None => log::debug!("nav dropdown not mounted"),
            }
            || ()
        });
    }

    let on_select = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            match Page::from_id(&sel.value()) {
                Some(page) => on_navigate.emit(page),
                None => log::warn!("nav dropdown sent unknown page {:?}", sel.value()),
            }
        })
    };

    let on_brand = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Home))
    };

    html! {
        <nav class="nav" aria-label="Main navigation">
          <button class="brand" onclick={on_brand}>
            { props.organization.clone() }
          </button>

          <div class="nav-buttons">
            { for nav_entries(props.current).map(|(page, active)| {
                let on_navigate = props.on_navigate.clone();
                html! {
                  <button
                    class={classes!("nav-btn", active.then_some("active"))}
                    aria-current={active.then_some("page")}
                    onclick={move |_: MouseEvent| on_navigate.emit(page)}
                  >
                    { page.label() }
                  </button>
                }
            })}
          </div>

          <select ref={select_ref} class="nav-select" aria-label="Go to page" onchange={on_select}>
            { for nav_entries(props.current).map(|(page, selected)| html! {
                <option value={page.id()} {selected}>{ page.label() }</option>
            })}
          </select>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{SiteAction, SiteState};

    fn current_entries(state: &SiteState) -> Vec<Page> {
        nav_entries(state.page).filter(|(_, on)| *on).map(|(p, _)| p).collect()
    }

    #[test]
    fn dropdown_pick_then_buttons_keeps_one_entry_current() {
        let mut state = SiteState::default();
        // dropdown "About", then button "Home", then button "About"
        for id in ["about", "home", "about"] {
            let page = Page::from_id(id).unwrap();
            state.apply(SiteAction::Navigate(page));
            assert_eq!(current_entries(&state), vec![page]);
        }
        assert_eq!(state.page, Page::About);
    }

    #[test]
    fn entries_follow_shared_page_order() {
        for current in Page::ALL {
            let pages: Vec<Page> = nav_entries(current).map(|(p, _)| p).collect();
            assert_eq!(pages, Page::ALL.to_vec());
            assert_eq!(nav_entries(current).filter(|(_, on)| *on).count(), 1);
        }
    }
}
