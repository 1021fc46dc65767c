use dioxus::prelude::*;

#[component]
pub fn Documentation() -> Element {
  static CSS: Asset = asset!("assets/docs.css");

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "docs",
      div {
        class: "docs-header",
        h1 { "Bitmane Documentation" }
      },
      section {
        h2 { "What is Bitmane?" },
        p {
          "Bitmane is a "
          strong { "peer-to-peer" }
          " marketplace for exchanging currency directly with other people. Instead of trading against a central order book, you publish a trade offer describing what you want to exchange, how much of it, and how you want to be paid. Other traders browse offers and take the ones that fit."
        },
        p {
          "The platform was built with the Malawian market in mind, which is why the "
          strong { "Malawian kwacha (MWK)" }
          " sits next to USD, BTC and ETH in the currency list and "
          strong { "M-Pesa" }
          " sits next to bank transfers and PayPal in the payment options. You can of course trade any supported pair from anywhere."
        }
      },
      section {
        h2 { "Anatomy of a trade offer" },
        p {
          "Every offer you create through the form on the home page carries the same set of fields:"
        },
        ul {
          li {
            strong { "Transaction type: " }
            "whether you are buying or selling the base currency."
          },
          li {
            strong { "Sell and buy currency: " }
            "the pair being exchanged, chosen from USD, MWK, BTC and ETH. The two sides must differ."
          },
          li {
            strong { "Price per unit and amount: " }
            "non-negative decimal values. The form shows the running total (price times amount) so both sides know the full cost before the offer goes out."
          },
          li {
            strong { "Minimum and maximum limit: " }
            "the smallest and largest slice of the offer a counterparty may take. The minimum can never exceed the maximum."
          },
          li {
            strong { "Payment methods: " }
            "one or more of bank transfer, M-Pesa and PayPal. At least one is required."
          },
          li {
            strong { "Payment details: " }
            "free text with the account information a counterparty needs, for example a bank name and account number."
          },
          li {
            strong { "Escrow: " }
            "whether settlement should run through the Bitmane escrow service. On by default."
          },
          li {
            strong { "Description: " }
            "your trade terms in your own words."
          }
        }
      },
      section {
        h2 { "How escrow works" },
        p {
          "When an offer with escrow enabled is taken, the seller's funds are locked with Bitmane before any payment changes hands. The buyer then pays through one of the offer's payment methods and marks the payment as sent. Once the seller confirms receipt, the locked funds are released. If either side disputes the trade, the funds stay locked until the dispute is resolved."
        },
        p {
          "Escrow is a preference on the offer. Turning it off means the trade settles directly between the two parties and Bitmane never holds funds for it."
        }
      },
      section {
        id: "version",
        h2 { "Release notes" },
        ul {
          li {
            strong { "0.1.0: " }
            "first public cut of the marketing site: home page with the create-offer form, about and how-it-works sections, and this documentation page."
          }
        }
      }
    }
  }
}
