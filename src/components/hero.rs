use dioxus::prelude::*;
use crate::Route;
use crate::components::tradeForm::TradeForm;

#[component]
pub fn Hero() -> Element {
  rsx! {
    section {
      id: "main-banner",
      class: "hero-section",
      div {
        class: "section-container hero-grid",
        div {
          class: "hero-copy",
          p { class: "section-kicker", "Peer-to-peer crypto exchange" }
          h1 {
            class: "hero-heading",
            "Trade crypto on your terms with "
            span { class: "accent", "Bitmane" }
          }
          p {
            class: "section-copy",
            "Create an offer, pick how you want to get paid and settle through escrow. USD, MWK, BTC and ETH, with bank transfer, M-Pesa or PayPal."
          }
          div {
            class: "hero-actions",
            a { class: "button button-primary", href: "#how-it-works", "How it works" }
            Link {
              class: "button",
              to: Route::Documentation { },
              "Read the docs"
            }
          }
        },
        TradeForm { }
      }
    }
  }
}
