//! Circular progress gauge.

use leptos::prelude::*;

const RADIUS: f64 = 40.0;

#[component]
pub fn Gauge(
    /// Fill fraction, 0.0..=1.0
    #[prop(into)] progress: Signal<f64>,
    #[prop(into)] text: Signal<String>,
    #[prop(into)] color: Signal<String>,
    label: &'static str,
) -> impl IntoView {
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let dash_offset = move || (circumference * (1.0 - progress.get().clamp(0.0, 1.0))).to_string();

    view! {
        <div class="gauge">
            <svg viewBox="0 0 100 100" class="gauge-ring">
                <circle cx="50" cy="50" r="40" fill="none" stroke="#F0F0F0" stroke-width="10" />
                <circle
                    cx="50" cy="50" r="40"
                    fill="none"
                    stroke=move || color.get()
                    stroke-width="10"
                    stroke-dasharray=circumference.to_string()
                    stroke-dashoffset=dash_offset
                    transform="rotate(-90 50 50)"
                />
                <text x="50" y="57" text-anchor="middle" class="gauge-text">{move || text.get()}</text>
            </svg>
            <span class="gauge-label">{label}</span>
        </div>
    }
}
