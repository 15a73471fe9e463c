// Static copy rendered by the pages.

pub struct Service {
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub benefits: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub struct Program {
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub format: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub specialties: &'static [&'static str],
    pub credentials: &'static [&'static str],
}

/// Title + one line, used by the numbered and icon lists.
pub struct Point {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        key: "coaching",
        title: "Coaching Ejecutivo Personalizado",
        subtitle: "Lidera desde la calma, actúa con foco",
        description: "Para emprendedores, ejecutivos y líderes que buscan avanzar con claridad y gestionar sus emociones en entornos exigentes.",
        image: "/assets/service-coaching.jpg",
        benefits: &[
            "Mayor consciencia del impacto como líder",
            "Gestión emocional en entornos exigentes",
            "Toma de decisiones con seguridad",
            "Plan de desarrollo personalizado",
        ],
        features: &[
            "Evaluación DISC completa",
            "Descubrimiento de motivadores",
            "Sesiones individuales de coaching",
            "Seguimiento y medición de progreso",
        ],
    },
    Service {
        key: "seleccion",
        title: "Selección Estratégica de Cargos Especializados",
        subtitle: "Talento que encaja, aporta y se queda",
        description: "Proceso de selección con mirada cultural y estratégica. No solo contratamos talento, lo alineamos con tu visión desde el primer día.",
        image: "/assets/service-selection.jpg",
        benefits: &[
            "Reducción de rotación de personal",
            "Alineación cultural desde el inicio",
            "Proceso estructurado en 3 fases",
            "Informe comparativo de candidatos",
        ],
        features: &[
            "Definición del perfil ideal con DISC",
            "Evaluación completa de candidatos",
            "Entrevistas especializadas",
            "Acompañamiento en la decisión final",
        ],
    },
    Service {
        key: "equipos",
        title: "Equipos de Alto Rendimiento",
        subtitle: "Transforma la dinámica grupal",
        description: "Para desbloquear dinámicas tóxicas, mejorar la confianza y reconectar con el propósito colectivo.",
        image: "/assets/service-teams.jpg",
        benefits: &[
            "Mayor cohesión y colaboración",
            "Reducción de conflictos internos",
            "Mejora del clima laboral",
            "Alineación con objetivos estratégicos",
        ],
        features: &[
            "Análisis DISC del equipo completo",
            "Las 3 leyes sistémicas",
            "Superación del piloto automático",
            "Programa de 6 meses con seguimiento",
        ],
    },
    Service {
        key: "formaciones",
        title: "Talleres y Formaciones",
        subtitle: "Menos fricciones, más conexión",
        description: "Experiencias dinámicas y prácticas que mejoran la comunicación, la colaboración y la motivación real.",
        image: "/assets/service-training.jpg",
        benefits: &[
            "Comunicación más efectiva",
            "Mejor coordinación entre equipos",
            "Reducción de malentendidos",
            "Equipos más comprometidos",
        ],
        features: &[
            "Comunicación efectiva y liderazgo",
            "Gestión de conflictos",
            "Trabajo en equipo y colaboración",
            "Formación personalizada por necesidad",
        ],
    },
];

pub const PROGRAMS: &[Program] = &[
    Program {
        key: "lae-n1",
        title: "LAE N1",
        subtitle: "Liderazgo Altamente Efectivo - Nivel 1",
        description: "Programa diseñado para transformar la manera en que lideras equipos y organizaciones. Profundiza en el autoconocimiento del líder mediante herramientas científicamente validadas como DISC y Motivadores.",
        duration: "3 meses",
        format: "Presencial, online o mixto",
    },
    Program {
        key: "lae-n2",
        title: "LAE N2",
        subtitle: "Liderazgo Adaptativo - Nivel 2",
        description: "Potencia tus habilidades de liderazgo a través del conocimiento y aplicación de los modelos DISC y Motivadores. Aprende a identificar diferentes estilos de comportamiento y adaptar tu enfoque.",
        duration: "4 meses",
        format: "Presencial, online o mixto",
    },
    Program {
        key: "ear",
        title: "EAR",
        subtitle: "Equipos de Alto Rendimiento",
        description: "Enfoque integral para transformar equipos convencionales en equipos de alto rendimiento a través del autoconocimiento, la colaboración estratégica y el alineamiento con los principios sistémicos.",
        duration: "6 meses",
        format: "Sesiones quincenales presenciales",
    },
    Program {
        key: "seleccion",
        title: "Selección Directiva",
        subtitle: "Proceso de Selección de Talento Profesional",
        description: "Proceso estructurado en tres fases diseñado para encontrar al candidato ideal para tu organización, combinando metodología avanzada con evaluación personalizada.",
        duration: "Según complejidad",
        format: "Proceso personalizado",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Laura G.",
        role: "CEO de startup de software educativo",
        location: "Madrid",
        quote: "Estábamos desbordados, cada uno tirando en una dirección. El diagnóstico DISC nos hizo ver lo que no queríamos enfrentar. En dos semanas con Veralya teníamos foco, estructura y un equipo que por fin respiraba en sincronía.",
    },
    Testimonial {
        name: "Antonia R.",
        role: "Directora Comercial",
        location: "Valencia",
        quote: "He dirigido equipos comerciales toda mi vida, pero nunca había visto una herramienta que revelara tanto en tan poco tiempo. Entendí por qué algunos de mis mejores vendedores estaban desmotivados.",
    },
    Testimonial {
        name: "Miriam G.",
        role: "Responsable de equipo",
        location: "Barcelona",
        quote: "Pensaba que necesitábamos más formación, pero lo que realmente nos faltaba era comprendernos. Hoy no solo trabajamos mejor, también nos sentimos mejor como equipo.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Mónica Arroyo Romero",
        role: "Cofundadora & Consultora Senior",
        image: "/assets/team-monica.png",
        description: "Psicóloga y experta en recursos humanos con más de diez años de experiencia en desarrollo del talento y liderazgo en organizaciones internacionales.",
        specialties: &[
            "Análisis conductual y motivacional (DISC)",
            "Fuerzas Impulsoras TTI Success Insights",
            "Desarrollo de liderazgo",
            "Comunicación efectiva",
        ],
        credentials: &[
            "Certificada en DISC y Fuerzas Impulsoras",
            "Experta en desarrollo del talento",
            "Experiencia en organizaciones internacionales",
        ],
    },
    TeamMember {
        name: "Raquel Arroyo Romero",
        role: "Cofundadora & Estratega de Desarrollo",
        image: "/assets/team-raquel.png",
        description: "Experta en desarrollo humano y estrategia para pymes y emprendedores. Máster en Desarrollo Humano y Practitioner en PNL.",
        specialties: &[
            "Estrategia para pymes y emprendedores",
            "Programación Neurolingüística (PNL)",
            "DISC y Fuerzas Impulsoras TTI",
            "Mentalidad y comportamiento organizacional",
        ],
        credentials: &[
            "Máster en Desarrollo Humano",
            "Practitioner en PNL",
            "Certificada en DISC y Fuerzas Impulsoras",
        ],
    },
];

pub const HOW_WE_WORK: &[Point] = &[
    Point {
        title: "Escuchamos antes de proponer",
        description: "Nos tomamos el tiempo necesario para entender tu contexto, cultura y desafíos específicos.",
    },
    Point {
        title: "Analizamos desde la raíz",
        description: "Personas, cultura, comunicación. Identificamos las causas, no solo los síntomas.",
    },
    Point {
        title: "Diseñamos soluciones a medida",
        description: "Prácticas, aplicables y con impacto medible en tu organización.",
    },
    Point {
        title: "Acompañamos en el proceso",
        description: "No solo en la estrategia, sino en la implementación y seguimiento continuo.",
    },
];

pub const METHODOLOGY: &[Point] = &[
    Point {
        title: "Diagnóstico con DISC + Motivadores",
        description: "Evaluación conductual del colectivo mediante test TTI certificado para diseñar la intervención con precisión.",
    },
    Point {
        title: "Acompañamiento personalizado",
        description: "Adaptamos contenidos y dinámicas al contexto organizacional con sesiones prácticas orientadas a la acción.",
    },
    Point {
        title: "Medición de resultados y ajustes",
        description: "Medición cuantitativa de mejora en indicadores clave y seguimiento periódico para ajustar la estrategia.",
    },
];

pub const PILLARS: &[Point] = &[
    Point {
        title: "Coaching + PNL + DISC",
        description: "Combinamos las mejores metodologías para un desarrollo integral.",
    },
    Point {
        title: "Humanismo con métricas",
        description: "Creemos en las personas, pero medimos los resultados.",
    },
    Point {
        title: "Procesos medibles",
        description: "Cada intervención tiene objetivos claros y KPIs definidos.",
    },
];

pub const CTA_BENEFITS: &[&str] = &[
    "Primera sesión de consultoría gratuita",
    "Diagnóstico inicial sin compromiso",
    "Propuesta personalizada en 48h",
    "Acompañamiento continuo garantizado",
];

pub const CLIENT_LOGOS: &[&str] = &[
    "TTI Success Insights",
    "DISC Certified",
    "PNL Practitioner",
    "Coaching Ejecutivo",
    "Talent Insights",
];
