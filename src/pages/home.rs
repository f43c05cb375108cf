use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::autoplay::{Autoplay, FrameLoop, PairRotation, START_POSITION};
use crate::components::compare_slider::CompareSlider;
use crate::config::{self, SAMPLE_PAIRS};

const SERVICES: &[(&str, &str)] = &[
    ("🌾", "Cortes de césped"),
    ("✂️", "Podas"),
    ("🌿", "Limpieza de yuyos"),
    ("🎋", "Diseño de espacios verdes"),
    ("🔁", "Mantenimiento de jardines"),
    ("🪴", "Asesoramiento para tus plantas"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let playing = use_state(|| true);
    let position = use_state(|| START_POSITION);
    let rotation = use_mut_ref(|| PairRotation::new(SAMPLE_PAIRS.len()));

    {
        let position = position.setter();
        let rotation = rotation.clone();
        use_effect_with_deps(
            move |&playing| {
                let mut frame_loop = None;
                if playing {
                    let driver = Rc::new(RefCell::new(Autoplay::default()));
                    frame_loop = Some(FrameLoop::start(move |now_ms| {
                        let tick = driver.borrow_mut().tick(now_ms);
                        if tick.cycle_complete {
                            rotation.borrow_mut().advance();
                        }
                        position.set(tick.position);
                        true
                    }));
                }
                // Cleanup drops the loop handle, cancelling any pending
                // frame. Pausing discards the driver with it, so resuming
                // starts a fresh cycle.
                move || drop(frame_loop)
            },
            *playing,
        );
    }

    let toggle_autoplay = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| {
            info!(
                "autoplay {}",
                if *playing { "paused" } else { "resumed" }
            );
            playing.set(!*playing);
        })
    };

    let on_drag = {
        let position = position.setter();
        Callback::from(move |value: f64| position.set(value))
    };

    let pair = SAMPLE_PAIRS[rotation.borrow().index()];
    let toggle_tooltip = if *playing {
        "Dale stop para moverte con el slider y ver el antes y después"
    } else {
        "Dale play para animar automáticamente el antes y después"
    };

    html! {
        <main class="home-page">
            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                        width: 100%;
                        padding: 0.5rem;
                        background: #052e16;
                        display: flex;
                        align-items: center;
                        font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                    }
                    .home-layout {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin: auto;
                        width: 100%;
                        max-width: 1100px;
                        max-height: 720px;
                    }
                    .home-sidebar {
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        gap: 1rem;
                        background: #f0fdf4;
                        padding: 0.75rem;
                        border-radius: 0.375rem;
                    }
                    .home-sidebar header {
                        text-align: center;
                    }
                    .home-sidebar h1 {
                        font-size: 2.25rem;
                        margin: 0 0 0.25rem;
                        color: #14532d;
                    }
                    .home-sidebar h2 {
                        font-size: 0.85rem;
                        margin: 0;
                        text-transform: uppercase;
                        color: #166534;
                    }
                    .service-list {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .service-item {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.5rem 0.75rem;
                        border: 1px solid rgba(22, 101, 52, 0.25);
                        border-radius: 0.375rem;
                        color: #14532d;
                        background: rgba(22, 101, 52, 0.05);
                    }
                    .service-item .service-icon {
                        font-size: 1.4rem;
                    }
                    .contact-button {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        width: 100%;
                        padding: 0.9rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: #166534;
                        color: #fff;
                        font-size: 1.1rem;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .contact-button:hover {
                        background: #14532d;
                    }
                    .home-showcase {
                        position: relative;
                        flex: 1;
                        min-height: 320px;
                        background: #f0fdf4;
                        padding: 0.75rem;
                        border-radius: 0.375rem;
                    }
                    .autoplay-toggle {
                        position: absolute;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: 1px solid rgba(22, 101, 52, 0.4);
                        border-radius: 0.375rem;
                        background: rgba(240, 253, 244, 0.9);
                        color: #14532d;
                        font-size: 1rem;
                        cursor: pointer;
                        z-index: 4;
                    }
                    @media (min-width: 1024px) {
                        .home-page {
                            height: 100vh;
                        }
                        .home-layout {
                            flex-direction: row;
                        }
                        .home-sidebar {
                            max-width: 20rem;
                            gap: 0;
                        }
                    }
                "#}
            </style>
            <section class="home-layout">
                <aside class="home-sidebar">
                    <header>
                        <h1>{"Jardinero Jara"}</h1>
                        <h2>{"Cuidado y Mantenimiento de Espacios Verdes"}</h2>
                    </header>

                    <div class="service-list">
                        {
                            SERVICES.iter().map(|(icon, label)| html! {
                                <div class="service-item" key={*label}>
                                    <span class="service-icon">{icon}</span>
                                    <span>{label}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <a
                        class="contact-button"
                        href={config::whatsapp_link()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Contactar"}
                    </a>
                </aside>

                <article class="home-showcase">
                    <CompareSlider
                        before_src={pair.before}
                        after_src={pair.after}
                        position={*position}
                        disabled={*playing}
                        onchange={on_drag}
                    />

                    <button
                        class="autoplay-toggle"
                        title={toggle_tooltip}
                        onclick={toggle_autoplay}
                    >
                        { if *playing { "⏸" } else { "▶" } }
                    </button>
                </article>
            </section>
        </main>
    }
}
