use dioxus::prelude::*;

/// Coin mark plus wordmark, shared by the header and the offer card.
#[component]
pub fn Logo() -> Element {
  rsx! {
    span {
      class: "brand",
      svg {
        class: "brand-mark",
        xmlns: "http://www.w3.org/2000/svg",
        width: "28",
        height: "28",
        view_box: "0 0 24 24",
        fill: "none",
        stroke: "currentcolor",
        stroke_width: "2",
        stroke_linecap: "round",
        circle { cx: "12", cy: "12", r: "9" }
        path { d: "M9.5 8.5h3.2a2 2 0 0 1 0 4H9.5zm0 4h3.8a2 2 0 0 1 0 4H9.5z" }
        path { d: "M11 6.5v2m0 9v2" }
      }
      span { class: "brand-name", "Bitmane" }
    }
  }
}
