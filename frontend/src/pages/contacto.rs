use yew::prelude::*;

use crate::config;
use crate::motion::{use_motion, Anchor, MotionPlan, RevealProfile};
use crate::widgets::contact_form::ContactForm;

fn contacto_motion() -> MotionPlan {
    MotionPlan::new()
        .reveal_each(".reveal-section", RevealProfile::rise(60.0))
        .reveal_group(
            ".contact-grid",
            ".contact-info-item",
            RevealProfile::slide(-40.0)
                .starting_at(Anchor::new(0.0, 0.7))
                .staggered(100.0),
        )
}

#[function_component(Contacto)]
pub fn contacto() -> Html {
    let root = use_node_ref();
    use_motion(root.clone(), contacto_motion);

    html! {
        <div class="contacto-page" ref={root}>
            <section class="page-hero">
                <div class="page-hero-inner reveal-section">
                    <span class="eyebrow">{"Contacto"}</span>
                    <h1>{"Hablemos"}</h1>
                    <p>{"Cuéntanos qué necesitas. La primera conversación es gratuita y sin compromiso."}</p>
                </div>
            </section>

            <section class="contact-grid page-section">
                <aside class="contact-info">
                    <div class="contact-info-item">
                        <h4>{"Dirección"}</h4>
                        <a href={config::MAPS_URL} target="_blank" rel="noopener noreferrer">{config::ADDRESS}</a>
                    </div>
                    <div class="contact-info-item">
                        <h4>{"Email"}</h4>
                        <a href={config::mailto()}>{config::CONTACT_EMAIL}</a>
                    </div>
                    <div class="contact-info-item">
                        <h4>{"Teléfono"}</h4>
                        <a href={config::tel()}>{config::PHONE_DISPLAY}</a>
                    </div>
                    <div class="contact-info-item">
                        <h4>{"Horario"}</h4>
                        <p>{config::OFFICE_HOURS}</p>
                    </div>
                    <div class="contact-info-item schedule-box">
                        <h4>{"¿Prefieres agendar directamente?"}</h4>
                        <a class="btn btn-primary" href={config::scheduling_url()} target="_blank" rel="noopener noreferrer">
                            {"Reservar una llamada"}
                        </a>
                    </div>
                </aside>
                <div class="contact-form-card reveal-section">
                    <h2>{"Envíanos un mensaje"}</h2>
                    <ContactForm />
                </div>
            </section>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.6fr;
                    gap: 3rem;
                    align-items: start;
                }
                .contact-info {
                    display: flex;
                    flex-direction: column;
                    gap: 1.75rem;
                }
                .contact-info-item h4 {
                    margin: 0 0 0.35rem;
                    color: #4a7c59;
                }
                .contact-info-item a,
                .contact-info-item p {
                    color: #1e2d28;
                    margin: 0;
                }
                .schedule-box {
                    background: #eef4ef;
                    border-radius: 1rem;
                    padding: 1.5rem;
                }
                .schedule-box .btn {
                    color: #ffffff;
                    margin-top: 0.75rem;
                }
                .contact-form-card {
                    background: #ffffff;
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                    box-shadow: 0 10px 30px rgba(30, 45, 40, 0.08);
                }
                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
