#![allow(non_snake_case)]

use dioxus::{logger::tracing::{error, info, warn}, prelude::*};
use dioxus::web::WebEventExt;
use futures_util::StreamExt;
use web_sys::{HtmlOptionElement, HtmlSelectElement, wasm_bindgen::JsCast};
use crate::components::logo::Logo;
use crate::components::toast::{self, ErrorToast, SuccessToast};
use crate::utils::gateway::OfferGateway;
use crate::utils::offer::{total_cost, Currency, OfferDraft, OfferSubmission, PaymentMethod, TransactionType, ValidationError};

#[component]
pub fn TradeForm() -> Element {
  let mut draft: Signal<OfferDraft> = use_signal(OfferDraft::default);
  let mut loading: Signal<bool> = use_signal(||false);
  let mut form_error: Signal<Option<ValidationError>> = use_signal(||None);

  // One submission at a time flows through here; the disabled button keeps
  // further sends out while the simulated call is in flight.
  let submitter = use_coroutine(move|mut rx| async move {
    let gateway = OfferGateway::new();
    while let Some(submission) = rx.next().await {
      loading.set(true);
      match gateway.create_offer(&submission).await {
        Ok(receipt) => {
          info!("offer {} accepted for pair {}", receipt.offer_id, receipt.pair);
          draft.set(OfferDraft::default());
          form_error.set(None);
          toast::flash("offer-success-toast");
        }
        Err(e) => {
          error!("offer submission failed: {}", e);
          toast::flash("offer-failed-toast");
        }
      }
      loading.set(false);
    }
  });

  let total = total_cost(&draft().price, &draft().amount);

  rsx! {
    div {
      class: "offer-card-wrap",
      div {
        class: "offer-logo",
        Logo { }
      }
      div {
        class: "offer-card",
        h2 { class: "card-title", "Create Trade Offer" }
        form {
          onsubmit: move|_evt| {
            let current = draft();
            match current.validate() {
              Err(rule) => {
                //warn!("draft rejected: {:?}", rule);
                form_error.set(Some(rule));
                toast::flash("offer-invalid-toast");
              }
              Ok(()) => {
                let submitted_at = (js_sys::Date::now() / 1000.0) as u64;
                let submission = OfferSubmission::from_draft(&current, submitted_at);
                match serde_json::to_string(&submission) {
                  Ok(payload) => info!("creating trade offer: {}", payload),
                  Err(e) => warn!("offer payload failed to serialize: {}", e)
                }
                submitter.send(submission);
              }
            }
          },
          div {
            class: "form-group",
            label { class: "form-label", r#for: "transaction-type", "Transaction Type" },
            select {
              class: "form-input",
              id: "transaction-type",
              name: "transactionType",
              value: "{draft().transaction_type}",
              onchange: move|evt| {
                if let Ok(t) = evt.value().parse() {
                  draft.write().transaction_type = t;
                }
              },
              for t in TransactionType::ALL {
                option { value: "{t}", "{t.label()}" }
              }
            }
          },
          div {
            class: "form-group",
            label { class: "form-label", r#for: "sell-currency", "Sell Currency" },
            select {
              class: "form-input",
              id: "sell-currency",
              name: "sellCurrency",
              value: "{draft().sell_currency}",
              onchange: move|evt| {
                if let Ok(c) = evt.value().parse() {
                  draft.write().sell_currency = c;
                }
              },
              for c in Currency::ALL {
                option { value: "{c}", "{c}" }
              }
            }
          },
          div {
            class: "form-group",
            label { class: "form-label", r#for: "buy-currency", "Buy Currency" },
            select {
              class: "form-input",
              id: "buy-currency",
              name: "buyCurrency",
              value: "{draft().buy_currency}",
              onchange: move|evt| {
                if let Ok(c) = evt.value().parse() {
                  draft.write().buy_currency = c;
                }
              },
              for c in Currency::ALL {
                option { value: "{c}", "{c}" }
              }
            }
          },
          div {
            class: "form-group",
            label { class: "form-label", r#for: "price", "Price per Unit" },
            input {
              class: "form-input",
              id: "price",
              name: "price",
              r#type: "number",
              min: "0",
              step: "0.01",
              placeholder: "e.g., 1750 MWK/USD",
              value: "{draft().price}",
              oninput: move|evt| draft.write().price = evt.value()
            }
          },
          div {
            class: "form-group",
            label { class: "form-label", r#for: "amount", "Amount" },
            input {
              class: "form-input",
              id: "amount",
              name: "amount",
              r#type: "number",
              min: "0",
              step: "0.01",
              placeholder: "e.g., 100 USD",
              value: "{draft().amount}",
              oninput: move|evt| draft.write().amount = evt.value()
            }
          },
          div {
            class: "form-group",
            label { class: "form-label", r#for: "min-limit", "Minimum Limit" },
            input {
              class: "form-input",
              id: "min-limit",
              name: "minLimit",
              r#type: "number",
              min: "0",
              step: "0.01",
              value: "{draft().min_limit}",
              oninput: move|evt| draft.write().min_limit = evt.value()
            }
          },
          div {
            class: "form-group",
            label { class: "form-label", r#for: "max-limit", "Maximum Limit" },
            input {
              class: "form-input",
              id: "max-limit",
              name: "maxLimit",
              r#type: "number",
              min: "0",
              step: "0.01",
              value: "{draft().max_limit}",
              oninput: move|evt| draft.write().max_limit = evt.value()
            }
          },
          div {
            class: "form-group",
            label { class: "form-label", r#for: "payment-methods", "Payment Methods" },
            select {
              class: "form-input form-input-multi",
              id: "payment-methods",
              name: "paymentMethods",
              multiple: true,
              onchange: move|evt| {
                // the event value only carries one option, read the whole
                // selection off the DOM element instead
                if let Some(web_evt) = evt.try_as_web_event() {
                  if let Some(tar) = web_evt.target() {
                    if let Ok(select_element) = tar.dyn_into::<HtmlSelectElement>() {
                      let opts = select_element.selected_options();
                      let mut methods = Vec::with_capacity(opts.length() as usize);
                      for idx in 0..opts.length() {
                        if let Some(opt) = opts.item(idx) {
                          if let Ok(opt) = opt.dyn_into::<HtmlOptionElement>() {
                            if let Ok(m) = opt.value().parse::<PaymentMethod>() {
                              methods.push(m);
                            }
                          }
                        }
                      }
                      draft.write().payment_methods = methods;
                    }
                  }
                }
              },
              for m in PaymentMethod::ALL {
                option {
                  value: "{m}",
                  selected: draft().payment_methods.contains(&m),
                  "{m.label()}"
                }
              }
            }
          },
          div {
            class: "form-group",
            label { class: "form-label", r#for: "payment-details", "Payment Details" },
            textarea {
              class: "form-input",
              id: "payment-details",
              name: "paymentDetails",
              placeholder: "e.g., Bank name, account number",
              value: "{draft().payment_details}",
              oninput: move|evt| draft.write().payment_details = evt.value()
            }
          },
          div {
            class: "form-group form-check",
            input {
              id: "escrow",
              name: "escrow",
              r#type: "checkbox",
              checked: draft().escrow,
              onchange: move|_evt| {
                let flipped = !draft().escrow;
                draft.write().escrow = flipped;
              }
            },
            label { class: "form-label", r#for: "escrow", "Enable Escrow" }
          },
          div {
            class: "form-group",
            label { class: "form-label", r#for: "description", "Description" },
            textarea {
              class: "form-input",
              id: "description",
              name: "description",
              placeholder: "Trade terms",
              value: "{draft().description}",
              oninput: move|evt| draft.write().description = evt.value()
            }
          },
          div {
            class: "total-row",
            p { "Total Cost: " }
            p { "${total}" }
          },
          button {
            type: "submit",
            class: "button button-primary form-submit",
            disabled: loading(),
            if loading() { "Creating..." } else { "Create Trade" }
          }
        }
      }
      ErrorToast { id: "offer-invalid-toast", content: form_error().map(|e| e.to_string()).unwrap_or_default() }
      SuccessToast { id: "offer-success-toast", content: "Trade offer created successfully!" }
      ErrorToast { id: "offer-failed-toast", content: "An error occurred while creating the trade offer." }
    }
  }
}
