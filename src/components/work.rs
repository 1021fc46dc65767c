use dioxus::prelude::*;

static PROCESS_IMG: Asset = asset!("assets/images/work/img-trading-process.svg");
static ICON_TRADE: Asset = asset!("assets/images/icons/icon-trade.svg");
static ICON_PAYMENT: Asset = asset!("assets/images/icons/icon-payment.svg");
static ICON_ESCROW: Asset = asset!("assets/images/icons/icon-escrow.svg");

struct WorkStep {
  icon: Asset,
  text: &'static str,
  description: &'static str,
}

#[component]
pub fn HowItWorks() -> Element {
  let steps = [
    WorkStep {
      icon: ICON_TRADE,
      text: "Create Your Trade Offer",
      description: "Choose whether to buy or sell, select currencies like USD, MWK, BTC, or ETH, and set your price and amount.",
    },
    WorkStep {
      icon: ICON_PAYMENT,
      text: "Select Payment Method",
      description: "Pick secure payment options such as bank transfer, M-Pesa, or PayPal to complete your trade.",
    },
    WorkStep {
      icon: ICON_ESCROW,
      text: "Trade with Escrow",
      description: "Use our escrow service to ensure funds are safely held until both parties confirm the trade.",
    },
  ];

  rsx! {
    section {
      id: "how-it-works",
      class: "work-section",
      div {
        class: "section-container work-grid",
        div {
          class: "work-steps",
          "data-reveal": "from-bottom",
          p {
            class: "section-kicker",
            "Trade with "
            span { class: "accent", "Bitmane" }
          }
          h2 {
            class: "section-heading",
            "Easily buy and sell cryptocurrencies securely."
          }
          div {
            class: "step-grid",
            for step in steps {
              div {
                class: "step",
                div {
                  class: "step-head",
                  div {
                    class: "step-icon",
                    img {
                      src: step.icon,
                      alt: "{step.text} icon",
                      width: "40",
                      height: "40"
                    }
                  }
                  p { class: "step-title", "{step.text}" }
                }
                p { class: "step-copy", "{step.description}" }
              }
            }
          }
        },
        div {
          class: "work-image",
          "data-reveal": "from-top",
          img {
            src: PROCESS_IMG,
            alt: "Bitmane trading process illustration",
            width: "600"
          }
        }
      }
    }
  }
}
