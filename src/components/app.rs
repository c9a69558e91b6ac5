use dioxus::prelude::*;
use super::Hero;

pub fn App() -> Element {
    rsx! {
        main {
            class: "min-h-screen bg-white",
            Hero {}
            // The hero's wave strip blends into this section's background
            section { class: "h-24 bg-white" }
        }
    }
}
