use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::content::{Program, Service, METHODOLOGY, PROGRAMS, SERVICES};
use crate::motion::{use_motion, Anchor, MotionPlan, Property, PropertyRange, RevealProfile, ScrubSpec};
use crate::widgets::accordion::{AccordionEntry, AccordionList};

fn soluciones_motion() -> MotionPlan {
    let group = |offset: f64| {
        RevealProfile::rise(offset)
            .starting_at(Anchor::new(0.0, 0.7))
            .staggered(100.0)
    };

    MotionPlan::new()
        .reveal_each(".reveal-section", RevealProfile::rise(60.0))
        .reveal_group(".services-list", ".reveal-element", group(50.0))
        .reveal_group(".programs-list", ".reveal-element", group(50.0))
        .reveal_each(
            ".method-step:nth-child(odd)",
            RevealProfile::slide(-50.0).starting_at(Anchor::new(0.0, 0.75)),
        )
        .reveal_each(
            ".method-step:nth-child(even)",
            RevealProfile::slide(50.0).starting_at(Anchor::new(0.0, 0.75)),
        )
        .scrub(
            ".method-line",
            ".methodology",
            ScrubSpec::new(
                Anchor::new(0.0, 0.6),
                Anchor::new(1.0, 0.8),
                vec![PropertyRange::new(Property::ScaleY, 0.0, 1.0)],
            )
            .smoothed(1000.0),
        )
}

fn service_body(service: &Service) -> Html {
    html! {
        <div class="solution-body">
            <img src={service.image} alt={service.title} />
            <div>
                <p>{service.description}</p>
                <div class="solution-lists">
                    <div>
                        <h4>{"Beneficios"}</h4>
                        <ul>
                            { service.benefits.iter().map(|b| html! { <li>{*b}</li> }).collect::<Html>() }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Qué incluye"}</h4>
                        <ul>
                            { service.features.iter().map(|f| html! { <li>{*f}</li> }).collect::<Html>() }
                        </ul>
                    </div>
                </div>
                <Link<Route> to={Route::Contacto} classes="btn btn-primary">
                    {"Solicitar información"}
                </Link<Route>>
            </div>
        </div>
    }
}

fn program_body(program: &Program) -> Html {
    html! {
        <div class="program-body">
            <p>{program.description}</p>
            <dl>
                <dt>{"Duración"}</dt>
                <dd>{program.duration}</dd>
                <dt>{"Formato"}</dt>
                <dd>{program.format}</dd>
            </dl>
        </div>
    }
}

#[function_component(Soluciones)]
pub fn soluciones() -> Html {
    let root = use_node_ref();
    use_motion(root.clone(), soluciones_motion);

    let services: Vec<AccordionEntry> = SERVICES
        .iter()
        .map(|service| AccordionEntry {
            key: service.key.into(),
            title: service.title.into(),
            subtitle: service.subtitle.into(),
            body: service_body(service),
        })
        .collect();
    let programs: Vec<AccordionEntry> = PROGRAMS
        .iter()
        .map(|program| AccordionEntry {
            key: program.key.into(),
            title: program.title.into(),
            subtitle: program.subtitle.into(),
            body: program_body(program),
        })
        .collect();

    html! {
        <div class="soluciones-page" ref={root}>
            <section class="page-hero">
                <div class="page-hero-inner reveal-section">
                    <span class="eyebrow">{"Soluciones"}</span>
                    <h1>{"Soluciones para personas, equipos y organizaciones"}</h1>
                    <p>{"Cada intervención parte de un diagnóstico y termina en resultados que se pueden medir."}</p>
                </div>
            </section>

            <section class="services-list page-section">
                <h2 class="reveal-section">{"Servicios"}</h2>
                <AccordionList
                    entries={services}
                    initially_open={Some(AttrValue::from("coaching"))}
                    item_class={classes!("reveal-element")}
                />
            </section>

            <section class="programs-list page-section">
                <h2 class="reveal-section">{"Programas"}</h2>
                <AccordionList
                    entries={programs}
                    initially_open={Some(AttrValue::from("lae-n1"))}
                    item_class={classes!("reveal-element")}
                />
            </section>

            <section class="methodology page-section">
                <h2 class="reveal-section">{"Nuestra metodología"}</h2>
                <div class="method-timeline">
                    <div class="method-line"></div>
                    <div class="method-steps">
                        {
                            METHODOLOGY.iter().enumerate().map(|(i, step)| html! {
                                <div class="method-step">
                                    <span class="method-number">{format!("{:02}", i + 1)}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .solution-body {
                    display: grid;
                    grid-template-columns: 240px 1fr;
                    gap: 2rem;
                    padding-top: 1.5rem;
                }
                .solution-body img {
                    width: 100%;
                    height: 100%;
                    max-height: 260px;
                    object-fit: cover;
                    border-radius: 0.75rem;
                }
                .solution-lists {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .solution-lists h4 {
                    color: #4a7c59;
                    margin: 0 0 0.5rem;
                }
                .solution-lists ul {
                    margin: 0;
                    padding-left: 1.2rem;
                }
                .program-body {
                    padding-top: 1.5rem;
                }
                .program-body dl {
                    display: grid;
                    grid-template-columns: max-content 1fr;
                    gap: 0.5rem 1.5rem;
                }
                .program-body dt {
                    font-weight: 600;
                    color: #4a7c59;
                }
                .program-body dd {
                    margin: 0;
                }
                .method-timeline {
                    position: relative;
                    padding-left: 3rem;
                }
                .method-line {
                    position: absolute;
                    left: 1rem;
                    top: 0;
                    bottom: 0;
                    width: 3px;
                    background: #4a7c59;
                    transform-origin: top center;
                }
                .method-steps {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .method-step {
                    background: #ffffff;
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 10px 30px rgba(30, 45, 40, 0.08);
                }
                .method-number {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #4a7c59;
                }
                @media (max-width: 768px) {
                    .solution-body,
                    .solution-lists {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
