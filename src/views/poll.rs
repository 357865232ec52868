use yew::prelude::*;

use crate::polls::{Poll, PollId};

#[derive(Properties, PartialEq)]
pub struct PollWidgetProps {
    pub poll: &'static Poll,
    pub selected: Option<&'static str>,
    pub on_vote: Callback<(PollId, &'static str)>,
}

#[function_component(PollWidget)]
pub fn poll_widget(props: &PollWidgetProps) -> Html {
    let poll = props.poll;

    html! {
        <div class="poll card" role="group" aria-label={poll.question}>
          <div class="poll-q">{ poll.question }</div>
          <div class="poll-options">
            { for poll.options.iter().map(|&option| {
                let picked = props.selected == Some(option);
                let on_vote = props.on_vote.clone();
                html! {
                  <button
                    class={classes!("poll-opt", picked.then_some("picked"))}
                    aria-pressed={if picked { "true" } else { "false" }}
                    onclick={move |_: MouseEvent| on_vote.emit((poll.id, option))}
                  >
                    { option }
                  </button>
                }
            })}
          </div>
          if let Some(choice) = props.selected {
            <div class="poll-note">{ format!("You picked: {choice}") }</div>
          } else {
            <div class="poll-note muted">{ "No vote yet. Results stay on this device." }</div>
          }
        </div>
    }
}
