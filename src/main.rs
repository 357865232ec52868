use std::rc::Rc;

use log::LevelFilter;
use yew::prelude::*;

mod config;
mod contact;
mod content;
mod logging;
mod notify;
mod polls;
mod site;
mod views;

use config::SiteConfig;
use notify::{AlertNotifier, Notify};
use polls::PollId;
use site::{Page, SiteAction, SiteState};
use views::about::AboutPage;
use views::contact::ContactPage;
use views::dna::DnaPage;
use views::faqs::FaqPage;
use views::home::HomePage;
use views::nav::NavBar;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let state = use_reducer(SiteState::default);
    let notify = use_state(|| Notify::new(AlertNotifier));
    let cfg = &props.config;

    let on_navigate = {
        let state = state.clone();
        Callback::from(move |page: Page| state.dispatch(SiteAction::Navigate(page)))
    };

    let on_vote = {
        let state = state.clone();
        Callback::from(move |(poll, option): (PollId, &'static str)| {
            state.dispatch(SiteAction::Vote { poll, option: option.to_string() })
        })
    };

    let organization = AttrValue::from(cfg.organization.clone());

    let page_body = |page: Page| match page {
        Page::Home => html! {
            <HomePage
              organization={organization.clone()}
              tagline={cfg.tagline.clone()}
              votes={state.votes.clone()}
              on_vote={on_vote.clone()}
              on_navigate={on_navigate.clone()}
            />
        },
        Page::About => html! { <AboutPage organization={organization.clone()} /> },
        Page::Dna => html! { <DnaPage /> },
        Page::Contact => html! { <ContactPage contact_email={cfg.contact_email.clone()} /> },
        Page::Faqs => html! { <FaqPage /> },
    };

    html! {
      <ContextProvider<Notify> context={(*notify).clone()}>
        <div class="site">
          <NavBar organization={organization.clone()} current={state.page} on_navigate={on_navigate.clone()} />

          <main class="wrap">
            { for state.visible_pages().map(|page| html! {
                <section key={page.id()} id={page.id()} class="page fade-in">
                  { page_body(page) }
                </section>
            })}
          </main>

          <footer class="footer">
            <span>{ format!("© {}", cfg.organization) }</span>
            <a href={format!("mailto:{}", cfg.contact_email)}>{ cfg.contact_email.clone() }</a>
          </footer>
        </div>
      </ContextProvider<Notify>>
    }
}

fn main() {
    logging::init(LevelFilter::Info);
    let config = SiteConfig::load();
    log::set_max_level(config.level_filter());
    log::info!("{} site starting", config.organization);

    yew::Renderer::<App>::with_props(AppProps { config: Rc::new(config) }).render();
}
