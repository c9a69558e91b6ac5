use dioxus::prelude::*;

const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1552728089-57bdde30beb3?auto=format&fit=crop&w=1920&q=80";

const TAG_LABEL: &str = "Trusted Since 2013";
const HEADLINE_TOP: &str = "Healthy Birds,";
const HEADLINE_ACCENT: &str = "Happy Families";
const BODY_COPY: &str = "From hand-mixed seed blends to vet-approved supplements, \
    everything your feathered companion needs to thrive, delivered with care.";
const CTA_PRIMARY: &str = "Shop Products";
const CTA_SECONDARY: &str = "Contact Us";

// Wave geometry for the bottom transition strip
const WAVE_BACK_PATH: &str =
    "M0,64 C240,96 480,112 720,96 C960,80 1200,32 1440,48 L1440,120 L0,120 Z";
const WAVE_FRONT_PATH: &str =
    "M0,88 C280,56 560,48 840,64 C1100,79 1280,104 1440,88 L1440,120 L0,120 Z";

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            class: "relative flex min-h-[600px] w-full items-center justify-center overflow-hidden",

            // Background photo: cover-fit, centered, fixed attachment for a parallax feel
            div {
                class: "absolute inset-0 bg-cover bg-center bg-fixed",
                style: "background-image: url('{HERO_IMAGE_URL}');",
            }

            // Brand tint multiplied into the photo, then a neutral darkening pass for legibility
            div { class: "pointer-events-none absolute inset-0 bg-emerald-900/70 mix-blend-multiply" }
            div { class: "pointer-events-none absolute inset-0 bg-black/30" }

            div {
                class: "relative z-10 mx-auto max-w-3xl px-6 text-center",
                span {
                    class: "inline-block rounded-full bg-amber-400/90 px-4 py-1 text-sm font-semibold uppercase tracking-wider text-emerald-950",
                    "{TAG_LABEL}"
                }
                h1 {
                    class: "mt-6 text-4xl font-bold leading-tight text-white md:text-6xl",
                    "{HEADLINE_TOP}"
                    span { class: "block text-amber-300", "{HEADLINE_ACCENT}" }
                }
                p {
                    class: "mx-auto mt-6 max-w-xl text-lg text-emerald-50/90",
                    "{BODY_COPY}"
                }
                div {
                    class: "mt-10 flex flex-col items-center justify-center gap-4 sm:flex-row",
                    button {
                        class: "rounded-lg bg-amber-400 px-8 py-3 font-semibold text-emerald-950 shadow-lg hover:bg-amber-300",
                        "{CTA_PRIMARY}"
                    }
                    button {
                        class: "rounded-lg border-2 border-white px-8 py-3 font-semibold text-white hover:bg-white/10",
                        "{CTA_SECONDARY}"
                    }
                }
            }

            // Wave strip easing the banner into the section below it
            svg {
                class: "pointer-events-none absolute bottom-0 left-0 h-[120px] w-full",
                view_box: "0 0 1440 120",
                preserve_aspect_ratio: "none",
                xmlns: "http://www.w3.org/2000/svg",
                path {
                    d: "{WAVE_BACK_PATH}",
                    fill: "#ffffff",
                    fill_opacity: "0.35",
                }
                path {
                    d: "{WAVE_FRONT_PATH}",
                    fill: "#ffffff",
                    fill_opacity: "1",
                }
            }
        }
    }
}
