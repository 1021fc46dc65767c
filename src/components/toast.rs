use dioxus::prelude::*;

/* Transient notifications. Each toast sits in the DOM the whole time and is
   only visible while it carries the "show" class. */

#[component]
pub fn SuccessToast(id: String, content: String) -> Element {
  rsx! {
    div {
      id: "{id}",
      class: "toast toast-success",
      "{content}"
    }
  }
}

#[component]
pub fn ErrorToast(id: String, content: String) -> Element {
  rsx! {
    div {
      id: "{id}",
      class: "toast toast-error",
      "{content}"
    }
  }
}

/// Shows the toast with the given element id for two seconds.
pub fn flash(id: &str) {
  document::eval(&format!(
    r#"
    var x = document.getElementById("{id}");
    x.classList.add("show");
    setTimeout(function(){{x.classList.remove("show");}}, 2000);
    "#
  ));
}
