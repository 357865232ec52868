use yew::prelude::*;

use crate::content::IDEA_CARDS;
use crate::notify::{acknowledge_idea, Notify};
use crate::polls::{PollId, VoteMap, POLLS};
use crate::site::Page;
use crate::views::poll::PollWidget;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub organization: AttrValue,
    pub tagline: AttrValue,
    pub votes: VoteMap,
    pub on_vote: Callback<(PollId, &'static str)>,
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let notify = use_context::<Notify>();

    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Contact))
    };

    html! {
      <>
        <header class="banner">
          <h1 class="h1">{ format!("Welcome to {}", props.organization) }</h1>
          <p class="sub">{ props.tagline.clone() }</p>
          <button class="btn" onclick={to_contact}>{ "Get involved" }</button>
        </header>

        <section aria-labelledby="ideas-h">
          <h2 id="ideas-h">{ "Ideas we're working on" }</h2>
          <div class="grid">
            { for IDEA_CARDS.iter().map(|card| {
                let notify = notify.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    match &notify {
                        Some(n) => acknowledge_idea(card, n),
                        None => log::error!("no notifier in context"),
                    }
                });
                html! {
                  <button class="card idea" {onclick}>
                    <div class="idea-icon" aria-hidden="true">{ card.icon }</div>
                    <div class="card-t">{ card.title }</div>
                    <div class="card-p">{ card.blurb }</div>
                  </button>
                }
            })}
          </div>
        </section>

        <section aria-labelledby="polls-h">
          <h2 id="polls-h">{ "Quick polls" }</h2>
          if props.votes.is_empty() {
            <p class="muted">{ "Tap an option to vote. Your picks are not saved anywhere." }</p>
          }
          <div class="grid">
            { for POLLS.iter().map(|poll| html! {
                <PollWidget
                  {poll}
                  selected={props.votes.selection(poll.id)}
                  on_vote={props.on_vote.clone()}
                />
            })}
          </div>
        </section>
      </>
    }
}
