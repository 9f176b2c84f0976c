//! CareerCraft BI Dashboard
//!
//! Instagram conversation analytics built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads one static JSON snapshot from the serving root and
//! draws it through the render model of the `careercraft-bi` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
