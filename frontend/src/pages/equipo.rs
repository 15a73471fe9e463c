use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::content::{HOW_WE_WORK, TEAM};
use crate::motion::{use_motion, Anchor, MotionPlan, RevealProfile};

fn equipo_motion() -> MotionPlan {
    MotionPlan::new()
        .reveal_each(".reveal-section", RevealProfile::rise(60.0))
        .reveal_group(
            ".team",
            ".team-card",
            RevealProfile::rise(60.0)
                .starting_at(Anchor::new(0.0, 0.7))
                .staggered(150.0),
        )
        .reveal_group(
            ".how-we-work",
            ".work-step",
            RevealProfile::rise(40.0)
                .starting_at(Anchor::new(0.0, 0.7))
                .staggered(150.0),
        )
}

#[function_component(Equipo)]
pub fn equipo() -> Html {
    let root = use_node_ref();
    use_motion(root.clone(), equipo_motion);

    html! {
        <div class="equipo-page" ref={root}>
            <section class="page-hero">
                <div class="page-hero-inner reveal-section">
                    <span class="eyebrow">{"Equipo Veralya"}</span>
                    <h1>{"Dos hermanas, una misma visión"}</h1>
                    <p>{"Acompañamos a personas y organizaciones a crecer desde dentro, con herramientas rigurosas y mucha escucha."}</p>
                </div>
            </section>

            <section class="team page-section">
                {
                    TEAM.iter().map(|member| html! {
                        <article class="team-card">
                            <img src={member.image} alt={member.name} />
                            <div class="team-card-body">
                                <h2>{member.name}</h2>
                                <p class="team-role">{member.role}</p>
                                <p>{member.description}</p>
                                <h4>{"Especialidades"}</h4>
                                <ul>
                                    { member.specialties.iter().map(|s| html! { <li>{*s}</li> }).collect::<Html>() }
                                </ul>
                                <div class="credentials">
                                    { member.credentials.iter().map(|c| html! { <span class="credential">{*c}</span> }).collect::<Html>() }
                                </div>
                            </div>
                        </article>
                    }).collect::<Html>()
                }
            </section>

            <section class="how-we-work page-section">
                <h2 class="reveal-section">{"Cómo trabajamos"}</h2>
                <div class="work-grid">
                    {
                        HOW_WE_WORK.iter().enumerate().map(|(i, point)| html! {
                            <div class="work-step">
                                <span class="work-number">{(i + 1).to_string()}</span>
                                <h3>{point.title}</h3>
                                <p>{point.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="reveal-section work-cta">
                    <Link<Route> to={Route::Contacto} classes="btn btn-primary">
                        {"Hablemos de tu equipo"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .team {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .team-card {
                    display: grid;
                    grid-template-columns: 320px 1fr;
                    gap: 2.5rem;
                    background: #ffffff;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 10px 30px rgba(30, 45, 40, 0.08);
                }
                .team-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .team-card-body {
                    padding: 2.5rem 2.5rem 2.5rem 0;
                }
                .team-role {
                    color: #4a7c59;
                    font-weight: 600;
                }
                .credentials {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .credential {
                    background: #eef4ef;
                    color: #1e2d28;
                    border-radius: 999px;
                    padding: 0.35rem 0.9rem;
                    font-size: 0.85rem;
                }
                .work-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                    gap: 2rem;
                }
                .work-step {
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 10px 30px rgba(30, 45, 40, 0.08);
                }
                .work-number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #4a7c59;
                    color: #ffffff;
                    font-weight: 700;
                }
                .work-cta {
                    text-align: center;
                    margin-top: 3rem;
                }
                @media (max-width: 768px) {
                    .team-card {
                        grid-template-columns: 1fr;
                    }
                    .team-card img {
                        height: 320px;
                    }
                    .team-card-body {
                        padding: 0 1.5rem 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
