use dioxus::prelude::*;
use crate::components::{about::About, hero::Hero, work::HowItWorks};

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("assets/home.css");
  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "home-page",
      // the observer drives the section entrance transitions, installed once
      // the DOM is in place
      onmounted: move |_evt| {
        document::eval(
          r#"
            var millis = 150;
            setTimeout(function() {
                const targets = document.querySelectorAll('[data-reveal]');
                if (!targets.length) {console.log('no reveal targets found');}
                const revealObserver = new IntersectionObserver(function(entries) {
                  for (const entry of entries) {
                    entry.target.classList.toggle('in-view', entry.isIntersecting);
                  }
                }, { threshold: 0.2 });
                targets.forEach(function(el) { revealObserver.observe(el); });
            }, millis);
          "#
        );
      },
      Hero { }
      About { }
      HowItWorks { }
    }
  }
}
