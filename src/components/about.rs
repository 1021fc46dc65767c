use dioxus::prelude::*;

static ABOUT_IMG: Asset = asset!("assets/images/about/img-about-bitmane.svg");
static ICON_P2P: Asset = asset!("assets/images/icons/icon-p2p.svg");
static ICON_ESCROW: Asset = asset!("assets/images/icons/icon-escrow.svg");
static ICON_PAYMENT: Asset = asset!("assets/images/icons/icon-payment.svg");

struct AboutFeature {
  icon: Asset,
  title: &'static str,
  description: &'static str,
}

#[component]
pub fn About() -> Element {
  let features = [
    AboutFeature {
      icon: ICON_P2P,
      title: "Peer-to-Peer Trading",
      description: "Trade directly with others, choosing your preferred cryptocurrencies and payment methods.",
    },
    AboutFeature {
      icon: ICON_ESCROW,
      title: "Secure Escrow",
      description: "Funds are held safely in escrow until both parties confirm the trade is complete.",
    },
    AboutFeature {
      icon: ICON_PAYMENT,
      title: "Flexible Payments",
      description: "Use bank transfers, M-Pesa, or PayPal for seamless transactions.",
    },
  ];

  rsx! {
    section {
      id: "about",
      class: "about-section",
      div {
        class: "section-container about-grid",
        div {
          class: "about-image",
          "data-reveal": "from-top",
          img {
            src: ABOUT_IMG,
            alt: "Bitmane platform illustration",
            width: "780"
          }
        },
        div {
          class: "about-text",
          "data-reveal": "from-bottom",
          p {
            class: "section-kicker",
            "About "
            span { class: "accent", "Bitmane" }
          }
          h2 {
            class: "section-heading",
            "Empowering secure crypto trading with "
            span { class: "accent", "Bitmane" }
          }
          p {
            class: "section-copy",
            "Bitmane is your trusted platform for peer-to-peer cryptocurrency trading, offering secure escrow and flexible payment options for users in Malawi and beyond."
          }
          table {
            class: "about-features",
            tbody {
              for feature in features {
                tr {
                  td {
                    div {
                      class: "feature-icon",
                      img {
                        src: feature.icon,
                        alt: "{feature.title} icon",
                        width: "35",
                        height: "35"
                      }
                    }
                  }
                  td {
                    h4 { "{feature.title}" }
                    p { "{feature.description}" }
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
