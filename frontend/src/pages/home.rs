use yew::prelude::*;
use yew_router::components::Link;
use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, MouseEvent};

use crate::Route;
use crate::config;
use crate::content::{CLIENT_LOGOS, CTA_BENEFITS, PILLARS, SERVICES, TESTIMONIALS};
use crate::motion::{
    use_motion, Anchor, ClipEllipse, EntranceSpec, MotionPlan, Property, PropertyRange,
    RevealProfile, ScrubSpec,
};

const HERO_WORDS: &[&str] = &["Transformamos", "equipos,", "potenciamos", "personas"];

/// How long the booking dialog shows its confirmation before closing.
const DIALOG_CLOSE_MS: u32 = 1800;

fn home_motion() -> MotionPlan {
    let mut image_reveal: Vec<PropertyRange> = PropertyRange::clip_morph(
        ClipEllipse::circle(0.0, 50.0, 50.0),
        ClipEllipse::ellipse(75.0, 90.0, 60.0, 50.0),
    )
    .to_vec();
    image_reveal.push(PropertyRange::new(Property::Scale, 1.2, 1.0));

    MotionPlan::new()
        .entrance(".hero-image", EntranceSpec::new(image_reveal, 1500.0).delayed(200.0))
        .entrance(
            ".hero-title .word",
            EntranceSpec::new(
                vec![
                    PropertyRange::new(Property::TranslateY, 100.0, 0.0),
                    PropertyRange::new(Property::Opacity, 0.0, 1.0),
                ],
                1200.0,
            )
            .delayed(300.0)
            .staggered(150.0),
        )
        .scrub(
            ".hero-image",
            ".hero",
            ScrubSpec::new(
                Anchor::TOP_TOP,
                Anchor::BOTTOM_TOP,
                vec![PropertyRange::new(Property::TranslateY, 0.0, 150.0)],
            ),
        )
        .scrub(
            ".hero-title",
            ".hero",
            ScrubSpec::new(
                Anchor::TOP_TOP,
                Anchor::new(0.5, 0.0),
                vec![
                    PropertyRange::new(Property::Blur, 0.0, 10.0),
                    PropertyRange::new(Property::Opacity, 1.0, 0.3),
                ],
            ),
        )
        .scrub(
            ".about-image",
            ".about",
            ScrubSpec::new(
                Anchor::TOP_BOTTOM,
                Anchor::BOTTOM_TOP,
                vec![PropertyRange::new(Property::TranslateY, -50.0, 50.0)],
            ),
        )
        .reveal_each(".reveal-section", RevealProfile::rise(60.0))
        .reveal_group(
            ".services",
            ".service-card",
            RevealProfile::rise(50.0)
                .starting_at(Anchor::new(0.0, 0.7))
                .staggered(100.0),
        )
        .reveal_group(
            ".about",
            ".about-text",
            RevealProfile::slide(-50.0)
                .lasting(1000.0)
                .starting_at(Anchor::new(0.0, 0.6)),
        )
        .reveal_group(
            ".testimonials",
            ".testimonial-card",
            RevealProfile::rise(50.0)
                .starting_at(Anchor::new(0.0, 0.7))
                .staggered(150.0),
        )
        .reveal_group(
            ".cta",
            ".cta-benefit",
            RevealProfile::slide(-30.0)
                .starting_at(Anchor::new(0.0, 0.7))
                .staggered(100.0),
        )
}

#[derive(Properties, PartialEq)]
pub struct BookingDialogProps {
    pub on_close: Callback<()>,
}

/// Quick "book a diagnosis" request. Nothing is sent; the dialog thanks the
/// visitor and closes itself.
#[function_component(BookingDialog)]
pub fn booking_dialog(props: &BookingDialogProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let sent = use_state(|| false);

    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |sent: &bool| {
                let timeout = sent.then(|| {
                    Timeout::new(DIALOG_CLOSE_MS, move || on_close.emit(()))
                });
                // Dropping the handle cancels the close if the dialog goes away first.
                move || drop(timeout)
            },
            *sent,
        );
    }

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if name.trim().is_empty() || email.trim().is_empty() {
                return;
            }
            info!("Diagnosis requested by {}", name.trim());
            sent.set(true);
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-backdrop" onclick={close.clone()}>
            <div class="dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="dialog-close" aria-label="Cerrar" onclick={close}>{"×"}</button>
                if *sent {
                    <div class="dialog-sent">
                        <h3>{"¡Gracias!"}</h3>
                        <p>{"Te escribiremos en menos de 48h para agendar tu diagnóstico."}</p>
                    </div>
                } else {
                    <form {onsubmit}>
                        <h3>{"Agenda tu diagnóstico"}</h3>
                        <p>{"Déjanos tus datos y te contactamos."}</p>
                        <input
                            type="text"
                            placeholder="Nombre"
                            value={(*name).clone()}
                            oninput={{
                                let name = name.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    name.set(input.value());
                                })
                            }}
                        />
                        <input
                            type="email"
                            placeholder="Email"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                        />
                        <button type="submit" class="btn btn-primary">{"Solicitar"}</button>
                    </form>
                }
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let root = use_node_ref();
    use_motion(root.clone(), home_motion);

    let dialog_open = use_state(|| false);
    let open_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: MouseEvent| dialog_open.set(true))
    };
    let close_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |_: ()| dialog_open.set(false))
    };

    html! {
        <div class="home-page" ref={root}>
            <section class="hero">
                <div class="hero-image">
                    <img src="/assets/hero-image.jpg" alt="Equipo trabajando en armonía" />
                    <div class="hero-overlay"></div>
                </div>
                <div class="hero-content">
                    <h1 class="hero-title">
                        {
                            HERO_WORDS.iter().map(|word| html! {
                                <span class="word-mask"><span class="word">{*word}</span></span>
                            }).collect::<Html>()
                        }
                    </h1>
                    <p class="hero-subtitle">
                        {"Consultoría en desarrollo humano y organizacional. Coaching, PNL y DISC con resultados medibles."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Contacto} classes="btn btn-primary">
                            {"Hablemos"}
                        </Link<Route>>
                        <Link<Route> to={Route::Soluciones} classes="btn btn-outline">
                            {"Ver soluciones"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="logos" aria-label="Metodologías certificadas">
                <div class="logos-track">
                    {
                        CLIENT_LOGOS.iter().chain(CLIENT_LOGOS.iter()).map(|logo| html! {
                            <span class="logo-item">{*logo}</span>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="services">
                <div class="section-heading reveal-section">
                    <span class="eyebrow">{"Soluciones"}</span>
                    <h2>{"Cómo te acompañamos"}</h2>
                </div>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <Link<Route> to={Route::Soluciones} classes="service-card">
                                <img src={service.image} alt={service.title} />
                                <div class="service-card-body">
                                    <h3>{service.title}</h3>
                                    <p class="service-subtitle">{service.subtitle}</p>
                                    <p>{service.description}</p>
                                </div>
                            </Link<Route>>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="about">
                <div class="about-media">
                    <img class="about-image" src="/assets/about-team.jpg" alt="Mónica y Raquel" />
                </div>
                <div class="about-text">
                    <div>
                        <span class="eyebrow">{"Quiénes somos"}</span>
                        <h2>{"Personas que entienden a personas"}</h2>
                        <p>
                            {"Veralya nace para acompañar a líderes y equipos en su evolución. Unimos la calidez del acompañamiento humano con la precisión de herramientas validadas."}
                        </p>
                    </div>
                    <div class="pillars">
                        {
                            PILLARS.iter().map(|pillar| html! {
                                <div class="pillar">
                                    <h4>{pillar.title}</h4>
                                    <p>{pillar.description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <Link<Route> to={Route::Equipo} classes="btn btn-outline">
                        {"Conoce al equipo"}
                    </Link<Route>>
                </div>
            </section>

            <section class="testimonials">
                <div class="section-heading reveal-section">
                    <span class="eyebrow">{"Testimonios"}</span>
                    <h2>{"Lo que dicen quienes ya dieron el paso"}</h2>
                </div>
                <div class="testimonials-grid">
                    {
                        TESTIMONIALS.iter().map(|t| html! {
                            <figure class="testimonial-card">
                                <blockquote>{format!("“{}”", t.quote)}</blockquote>
                                <figcaption>
                                    <strong>{t.name}</strong>
                                    <span>{format!("{} · {}", t.role, t.location)}</span>
                                </figcaption>
                            </figure>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="cta">
                <div class="cta-inner">
                    <div class="reveal-section">
                        <h2>{"¿Listo para transformar tu equipo?"}</h2>
                        <p>{"Da el primer paso. Sin compromiso."}</p>
                    </div>
                    <ul class="cta-benefits">
                        {
                            CTA_BENEFITS.iter().map(|benefit| html! {
                                <li class="cta-benefit">{"✓ "}{*benefit}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                    <div class="cta-actions">
                        <button class="btn btn-primary" onclick={open_dialog}>
                            {"Agenda tu diagnóstico"}
                        </button>
                        <a class="btn btn-outline" href={config::scheduling_url()} target="_blank" rel="noopener noreferrer">
                            {"Reserva en el calendario"}
                        </a>
                        <a class="cta-mail" href={config::mailto()}>{config::CONTACT_EMAIL}</a>
                    </div>
                </div>
            </section>

            if *dialog_open {
                <BookingDialog on_close={close_dialog} />
            }

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-image {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(180deg, rgba(30, 45, 40, 0.35), rgba(30, 45, 40, 0.75));
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 8rem 2rem 4rem;
                    color: #ffffff;
                }
                .hero-title {
                    font-size: clamp(2.6rem, 7vw, 5.5rem);
                    line-height: 1.05;
                    margin: 0 0 1.5rem;
                }
                .word-mask {
                    display: inline-block;
                    overflow: hidden;
                    margin-right: 0.25em;
                }
                .word {
                    display: inline-block;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    max-width: 600px;
                    opacity: 0.9;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-top: 2rem;
                }
                .logos {
                    overflow: hidden;
                    padding: 2rem 0;
                    background: #f4f6f4;
                }
                .logos-track {
                    display: flex;
                    gap: 4rem;
                    width: max-content;
                    animation: marquee 30s linear infinite;
                }
                .logo-item {
                    font-weight: 600;
                    color: #4a7c59;
                    white-space: nowrap;
                    opacity: 0.7;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                .services, .testimonials {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    display: block;
                    background: #ffffff;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 10px 30px rgba(30, 45, 40, 0.08);
                    text-decoration: none;
                    color: inherit;
                    transition: box-shadow 0.3s ease;
                }
                .service-card:hover {
                    box-shadow: 0 20px 40px rgba(30, 45, 40, 0.15);
                }
                .service-card img {
                    width: 100%;
                    height: 180px;
                    object-fit: cover;
                }
                .service-card-body {
                    padding: 1.5rem;
                }
                .service-subtitle {
                    color: #4a7c59;
                    font-weight: 600;
                }
                .about {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }
                .about-media {
                    border-radius: 1.5rem;
                    overflow: hidden;
                    height: 520px;
                }
                .about-image {
                    width: 100%;
                    height: 120%;
                    object-fit: cover;
                }
                .pillars {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    margin: 2rem 0;
                }
                .pillar {
                    border-left: 3px solid #4a7c59;
                    padding-left: 1rem;
                }
                .pillar h4 {
                    margin: 0 0 0.25rem;
                }
                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .testimonial-card {
                    margin: 0;
                    background: #ffffff;
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 10px 30px rgba(30, 45, 40, 0.08);
                }
                .testimonial-card blockquote {
                    margin: 0 0 1.5rem;
                    font-style: italic;
                    line-height: 1.6;
                }
                .testimonial-card figcaption {
                    display: flex;
                    flex-direction: column;
                    font-size: 0.9rem;
                }
                .cta {
                    background: linear-gradient(120deg, #1e2d28, #4a7c59, #1e2d28);
                    background-size: 200% 200%;
                    animation: gradient-drift 12s ease infinite;
                    color: #ffffff;
                    padding: 6rem 2rem;
                }
                @keyframes gradient-drift {
                    0% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                    100% { background-position: 0% 50%; }
                }
                .cta-inner {
                    max-width: 800px;
                    margin: 0 auto;
                    text-align: center;
                }
                .cta-benefits {
                    list-style: none;
                    padding: 0;
                    margin: 2rem 0;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 0.75rem;
                }
                .cta-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    align-items: center;
                }
                .cta-mail {
                    color: #ffffff;
                }
                .dialog-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.55);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 2000;
                }
                .dialog {
                    position: relative;
                    background: #ffffff;
                    color: #1e2d28;
                    border-radius: 1rem;
                    padding: 2.5rem;
                    width: min(90vw, 420px);
                }
                .dialog form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .dialog input {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d5dbd6;
                    border-radius: 0.5rem;
                    font-size: 1rem;
                }
                .dialog-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .about {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    .about-media {
                        height: 360px;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::plan::MotionSpec;

    #[test]
    fn hero_image_composes_entrance_and_parallax() {
        let plan = home_motion();
        let on_image = plan
            .specs
            .iter()
            .filter(|spec| match spec {
                MotionSpec::Entrance { selector, .. } => selector == ".hero-image",
                MotionSpec::Scrub { target, .. } => target == ".hero-image",
                _ => false,
            })
            .count();
        assert_eq!(on_image, 2);
    }

    #[test]
    fn hero_image_opens_into_an_off_center_ellipse() {
        let plan = home_motion();
        let reveal = plan.specs.iter().find_map(|spec| match spec {
            MotionSpec::Entrance { selector, spec } if selector == ".hero-image" => Some(spec),
            _ => None,
        });
        let reveal = reveal.expect("hero image entrance");
        let end = |property: Property| {
            reveal
                .ranges
                .iter()
                .find(|range| range.property == property)
                .map(|range| (range.from, range.to))
        };
        assert_eq!(end(Property::ClipRadiusX), Some((0.0, 75.0)));
        assert_eq!(end(Property::ClipRadiusY), Some((0.0, 90.0)));
        assert_eq!(end(Property::ClipCenterX), Some((50.0, 60.0)));
        assert_eq!(end(Property::ClipCenterY), Some((50.0, 50.0)));
        assert_eq!(end(Property::Scale), Some((1.2, 1.0)));
        assert_eq!(reveal.delay_ms, 200.0);
        assert_eq!(reveal.duration_ms, 1500.0);
    }

    #[test]
    fn title_words_are_staggered() {
        let plan = home_motion();
        let words = plan.specs.iter().find_map(|spec| match spec {
            MotionSpec::Entrance { selector, spec } if selector == ".hero-title .word" => Some(spec),
            _ => None,
        });
        let words = words.expect("word entrance");
        assert_eq!(words.delay_ms, 300.0);
        assert_eq!(words.stagger_ms, 150.0);
        assert_eq!(words.duration_ms, 1200.0);
    }
}
