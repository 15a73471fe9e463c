use log::{debug, info};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern compiles"));

/// "a + b = ?" anti-spam check. Advisory only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Challenge {
    pub lhs: u32,
    pub rhs: u32,
}

impl Challenge {
    pub const fn new(lhs: u32, rhs: u32) -> Self {
        Self { lhs, rhs }
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            lhs: rng.gen_range(1..=10),
            rhs: rng.gen_range(1..=5),
        }
    }

    pub fn answer(&self) -> u32 {
        self.lhs + self.rhs
    }

    pub fn prompt(&self) -> String {
        format!("{} + {} = ?", self.lhs, self.rhs)
    }

    pub fn accepts(&self, input: &str) -> bool {
        parse_leading_int(input) == Some(i64::from(self.answer()))
    }
}

// Reads an optional sign and the leading digits, ignoring whatever follows.
fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nombre completo",
            Field::Email => "Correo electrónico",
            Field::Company => "Empresa",
            Field::Phone => "Teléfono",
            Field::Message => "¿Qué necesitas?",
        }
    }
}

/// What a real delivery would send.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    pub message: String,
}

impl ContactDetails {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("El campo \"{}\" es obligatorio.", .0.label())]
    MissingField(Field),
    #[error("Introduce un correo electrónico válido.")]
    InvalidEmail,
    #[error("Debes aceptar la política de privacidad.")]
    PrivacyNotAccepted,
    #[error("Respuesta incorrecta. Inténtalo de nuevo.")]
    ChallengeMismatch,
    #[error("El mensaje ya se ha enviado.")]
    AlreadySubmitted,
}

/// Everything the contact form holds between mount and unmount.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactFormState {
    details: ContactDetails,
    privacy_accepted: bool,
    challenge: Challenge,
    answer: String,
    challenge_failed: bool,
    /// Last rejection other than a wrong answer, shown under the form.
    notice: Option<SubmitError>,
    submitted: bool,
}

impl ContactFormState {
    pub fn new(challenge: Challenge) -> Self {
        Self {
            details: ContactDetails::default(),
            privacy_accepted: false,
            challenge,
            answer: String::new(),
            challenge_failed: false,
            notice: None,
            submitted: false,
        }
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn challenge(&self) -> Challenge {
        self.challenge
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn privacy_accepted(&self) -> bool {
        self.privacy_accepted
    }

    pub fn challenge_failed(&self) -> bool {
        self.challenge_failed
    }

    pub fn notice(&self) -> Option<SubmitError> {
        self.notice
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.details.slot(field) = value;
        self.notice = None;
    }

    pub fn set_privacy(&mut self, accepted: bool) {
        self.privacy_accepted = accepted;
        self.notice = None;
    }

    /// Editing the answer clears a previous rejection. The operands stay.
    pub fn set_answer(&mut self, value: String) {
        self.answer = value;
        self.challenge_failed = false;
        self.notice = None;
    }

    fn check_required(&self) -> Result<(), SubmitError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.details.get(field).trim().is_empty() {
                return Err(SubmitError::MissingField(field));
            }
        }
        if !EMAIL_PATTERN.is_match(self.details.email.trim()) {
            return Err(SubmitError::InvalidEmail);
        }
        if !self.privacy_accepted {
            return Err(SubmitError::PrivacyNotAccepted);
        }
        Ok(())
    }

    /// Required fields first, then the challenge. A mismatch raises the
    /// error flag and leaves every value in place.
    pub fn submit(&mut self) -> Result<ContactDetails, SubmitError> {
        if self.submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        if let Err(err) = self.check_required() {
            self.notice = Some(err);
            return Err(err);
        }
        if !self.challenge.accepts(&self.answer) {
            self.challenge_failed = true;
            return Err(SubmitError::ChallengeMismatch);
        }
        self.submitted = true;
        Ok(ContactDetails {
            name: self.details.name.trim().to_string(),
            email: self.details.email.trim().to_string(),
            company: self.details.company.trim().to_string(),
            phone: self.details.phone.trim().to_string(),
            message: self.details.message.trim().to_string(),
        })
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(|| ContactFormState::new(Challenge::generate(&mut rand::thread_rng())));

    let on_text = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(field, input.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(Field::Message, input.value());
            form.set(next);
        })
    };

    let on_answer = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_answer(input.value());
            form.set(next);
        })
    };

    let on_privacy = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_privacy(input.checked());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Ok(details) => {
                    info!("contact request accepted");
                    debug!("{}", serde_json::to_string(&details).unwrap_or_default());
                }
                Err(SubmitError::ChallengeMismatch) => info!("contact form challenge failed"),
                Err(err) => info!("contact form rejected: {:?}", err),
            }
            form.set(next);
        })
    };

    if form.is_submitted() {
        return html! {
            <div class="contact-success">
                <div class="success-icon">{"✓"}</div>
                <h3>{"¡Mensaje enviado!"}</h3>
                <p>{"Gracias por contactarnos. Te responderemos en menos de 24 horas."}</p>
            </div>
        };
    }

    let details = form.details();
    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-row">
                <div class="form-field">
                    <label for="contact-name">{format!("{} *", Field::Name.label())}</label>
                    <input id="contact-name" type="text" name="name" required=true
                        placeholder="Tu nombre"
                        value={details.name.clone()}
                        oninput={on_text(Field::Name)} />
                </div>
                <div class="form-field">
                    <label for="contact-email">{format!("{} *", Field::Email.label())}</label>
                    <input id="contact-email" type="email" name="email" required=true
                        placeholder="tu@email.com"
                        value={details.email.clone()}
                        oninput={on_text(Field::Email)} />
                </div>
            </div>
            <div class="form-row">
                <div class="form-field">
                    <label for="contact-company">{Field::Company.label()}</label>
                    <input id="contact-company" type="text" name="company"
                        placeholder="Nombre de tu empresa"
                        value={details.company.clone()}
                        oninput={on_text(Field::Company)} />
                </div>
                <div class="form-field">
                    <label for="contact-phone">{Field::Phone.label()}</label>
                    <input id="contact-phone" type="tel" name="phone"
                        placeholder="+34 600 000 000"
                        value={details.phone.clone()}
                        oninput={on_text(Field::Phone)} />
                </div>
            </div>
            <div class="form-field">
                <label for="contact-message">{format!("{} *", Field::Message.label())}</label>
                <textarea id="contact-message" name="message" rows="5" required=true
                    placeholder="Cuéntanos sobre tu equipo, tus retos o lo que necesitas..."
                    value={details.message.clone()}
                    oninput={on_message}></textarea>
            </div>
            <div class="form-field">
                <label for="contact-challenge">{format!("Verificación: {} *", form.challenge().prompt())}</label>
                <input id="contact-challenge" type="text" inputmode="numeric" required=true
                    class={classes!(form.challenge_failed().then_some("input-error"))}
                    placeholder="Tu respuesta"
                    value={form.answer().to_string()}
                    oninput={on_answer} />
                if form.challenge_failed() {
                    <p class="field-error">{SubmitError::ChallengeMismatch.to_string()}</p>
                }
            </div>
            <div class="form-check">
                <input id="privacy" type="checkbox" name="privacy" required=true
                    checked={form.privacy_accepted()}
                    onchange={on_privacy} />
                <label for="privacy">
                    {"He leído y acepto la política de privacidad y el tratamiento de mis datos para responder a mi solicitud. *"}
                </label>
            </div>
            if let Some(err) = form.notice() {
                <p class="field-error">{err.to_string()}</p>
            }
            <button type="submit" class="submit-button">{"Enviar mensaje"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn filled(challenge: Challenge) -> ContactFormState {
        let mut form = ContactFormState::new(challenge);
        form.set_field(Field::Name, "Laura G.".into());
        form.set_field(Field::Email, "laura@example.com".into());
        form.set_field(Field::Message, "Queremos un diagnóstico DISC".into());
        form.set_privacy(true);
        form
    }

    #[test]
    fn correct_answer_submits() {
        let mut form = filled(Challenge::new(3, 2));
        form.set_answer("5".into());
        let details = form.submit().expect("accepted");
        assert!(form.is_submitted());
        assert_eq!(details.name, "Laura G.");
    }

    #[test]
    fn wrong_answer_flags_the_error_and_keeps_the_fields() {
        let mut form = filled(Challenge::new(3, 2));
        form.set_field(Field::Company, "Acme".into());
        form.set_answer("4".into());
        let before = form.details().clone();

        assert_eq!(form.submit(), Err(SubmitError::ChallengeMismatch));
        assert!(form.challenge_failed());
        assert!(!form.is_submitted());
        assert_eq!(form.details(), &before);
        assert_eq!(form.answer(), "4");
        assert_eq!(form.challenge(), Challenge::new(3, 2));
    }

    #[test]
    fn editing_the_answer_clears_the_error_but_keeps_the_operands() {
        let mut form = filled(Challenge::new(3, 2));
        form.set_answer("4".into());
        let _ = form.submit();
        form.set_answer("5".into());
        assert!(!form.challenge_failed());
        assert_eq!(form.challenge(), Challenge::new(3, 2));
        assert!(form.submit().is_ok());
    }

    #[test]
    fn unchecked_privacy_is_rejected_even_with_the_right_answer() {
        let mut form = filled(Challenge::new(3, 2));
        form.set_privacy(false);
        form.set_answer("5".into());
        assert_eq!(form.submit(), Err(SubmitError::PrivacyNotAccepted));
        assert!(!form.is_submitted());
        assert!(!form.challenge_failed());
    }

    #[test]
    fn required_fields_are_checked_before_the_challenge() {
        let mut form = filled(Challenge::new(3, 2));
        form.set_field(Field::Message, "   ".into());
        form.set_answer("0".into());
        assert_eq!(form.submit(), Err(SubmitError::MissingField(Field::Message)));
        assert!(!form.challenge_failed());
    }

    #[test]
    fn correcting_only_the_answer_clears_a_missing_field_notice() {
        let mut form = filled(Challenge::new(3, 2));
        form.set_field(Field::Name, String::new());
        assert_eq!(form.submit(), Err(SubmitError::MissingField(Field::Name)));
        assert_eq!(form.notice(), Some(SubmitError::MissingField(Field::Name)));

        form.set_answer("5".into());
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn a_wrong_answer_is_flagged_without_a_notice() {
        let mut form = filled(Challenge::new(3, 2));
        form.set_answer("9".into());
        assert_eq!(form.submit(), Err(SubmitError::ChallengeMismatch));
        assert!(form.challenge_failed());
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn implausible_email_is_rejected() {
        for email in ["laura", "laura@", "@example.com", "laura@example", "la ura@example.com"] {
            let mut form = filled(Challenge::new(1, 1));
            form.set_field(Field::Email, email.into());
            form.set_answer("2".into());
            assert_eq!(form.submit(), Err(SubmitError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn second_submit_is_refused() {
        let mut form = filled(Challenge::new(1, 1));
        form.set_answer("2".into());
        assert!(form.submit().is_ok());
        assert_eq!(form.submit(), Err(SubmitError::AlreadySubmitted));
    }

    #[test]
    fn answers_parse_leniently() {
        let challenge = Challenge::new(3, 2);
        assert!(challenge.accepts("5"));
        assert!(challenge.accepts(" 5"));
        assert!(challenge.accepts("5 "));
        assert!(challenge.accepts("+5"));
        assert!(challenge.accepts("5abc"));
        assert!(!challenge.accepts("abc"));
        assert!(!challenge.accepts(""));
        assert!(!challenge.accepts("-5"));
        assert!(!challenge.accepts("4"));
    }

    #[test]
    fn generated_operands_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let challenge = Challenge::generate(&mut rng);
            assert!((1..=10).contains(&challenge.lhs));
            assert!((1..=5).contains(&challenge.rhs));
        }
    }

    #[test]
    fn prompt_shows_both_operands() {
        assert_eq!(Challenge::new(7, 4).prompt(), "7 + 4 = ?");
    }

    #[test]
    fn optional_fields_are_left_out_of_the_payload() {
        let details = ContactDetails {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            message: "Hola".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&details).expect("serializes");
        assert!(json.get("company").is_none());
        assert_eq!(json["email"], "ana@example.com");
    }
}
