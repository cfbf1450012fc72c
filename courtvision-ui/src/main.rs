//! CourtVision Dashboard
//!
//! Real-time basketball shot analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Court diagram with a live shot-probability heatmap
//! - Defender overlay with velocity vectors
//! - Player stat cards and a performance time-series chart
//! - Click-to-predict: shot probability for any court point
//! - WebSocket live updates
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the CourtVision API via HTTP and
//! WebSocket.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
