use yew::prelude::*;

use crate::content::DNA_VALUES;

#[function_component(DnaPage)]
pub fn dna_page() -> Html {
    html! {
      <>
        <h1 class="h1">{ "Our DNA" }</h1>
        <p class="sub">{ "The values every programme is measured against." }</p>
        <ol class="values">
          { for DNA_VALUES.iter().map(|v| html! {
              <li class="card value">
                <div class="card-t">{ v.name }</div>
                <div class="card-p">{ v.detail }</div>
              </li>
          })}
        </ol>
      </>
    }
}
