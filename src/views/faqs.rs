use yew::prelude::*;

use crate::content::FAQS;

/// Accordion rule: one answer open at most, clicking the open one closes it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
      <>
        <h1 class="h1">{ "Frequently asked questions" }</h1>
        <div class="accordion">
          { for FAQS.iter().enumerate().map(|(i, faq)| {
              let expanded = *open == Some(i);
              let onclick = {
                  let open = open.clone();
                  Callback::from(move |_: MouseEvent| open.set(toggle(*open, i)))
              };
              html! {
                <div class={classes!("faq", expanded.then_some("open"))}>
                  <button
                    class="faq-q"
                    aria-expanded={if expanded { "true" } else { "false" }}
                    aria-controls={format!("faq-a-{i}")}
                    {onclick}
                  >
                    <span>{ faq.question }</span>
                    <span class="chev" aria-hidden="true">{ if expanded { "−" } else { "+" } }</span>
                  </button>
                  if expanded {
                    <div class="faq-a" id={format!("faq-a-{i}")}>{ faq.answer }</div>
                  }
                </div>
              }
          })}
        </div>
      </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_one_at_a_time() {
        let open = toggle(None, 2);
        assert_eq!(open, Some(2));
        let open = toggle(open, 0);
        assert_eq!(open, Some(0));
        assert_eq!(toggle(open, 0), None);
    }

    #[test]
    fn every_faq_has_copy() {
        assert!(!FAQS.is_empty());
        for faq in FAQS {
            assert!(faq.question.ends_with('?'), "{}", faq.question);
            assert!(!faq.answer.trim().is_empty());
        }
    }
}
