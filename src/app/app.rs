//! Wiring and interactive host.
//!
//! Drives the single-threaded event loop: one user action at a time,
//! each transition mirrored through the shell.

use std::io::BufRead;
use std::sync::Arc;
use tracing::info;

use crate::config::submission_conf::SubmissionConfig;
use crate::content::site::SiteContent;
use crate::controller::quote_form::{FormField, QuoteFormController, SubmitOutcome};
use crate::service::submission::{DelayedStubTransport, SubmissionTransport};
use crate::shell::page::{render_page, render_quote_section, PageState};

/// One discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Input(FormField, String),
    ToggleMenu,
    Show,
    Submit,
    Reset,
    Help,
    Quit,
}

impl Action {
    /// Parse a console line: `<field> <value>`, or one of the verbs
    /// `menu`, `page`, `envoyer`, `nouvelle`, `aide`, `quitter`.
    pub fn parse(line: &str) -> Option<Action> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        if let Some(field) = FormField::from_name(verb) {
            return Some(Action::Input(field, rest.to_string()));
        }
        match verb {
            "menu" => Some(Action::ToggleMenu),
            "page" => Some(Action::Show),
            "envoyer" => Some(Action::Submit),
            "nouvelle" => Some(Action::Reset),
            "aide" => Some(Action::Help),
            "quitter" => Some(Action::Quit),
            _ => None,
        }
    }
}

pub struct App {
    content: SiteContent,
    page: PageState,
    controller: QuoteFormController,
    transport: Arc<dyn SubmissionTransport>,
}

impl App {
    pub fn new(submission_config: &SubmissionConfig) -> Self {
        App {
            content: SiteContent::default(),
            page: PageState::default(),
            controller: QuoteFormController::new(),
            transport: Arc::new(DelayedStubTransport::new(submission_config)),
        }
    }

    /// Apply one action and return what should be printed for it.
    pub async fn handle(&mut self, action: Action) -> String {
        match action {
            Action::Input(field, value) => {
                self.controller.input(field, value);
                render_quote_section(&self.content, &self.controller.snapshot())
            }
            Action::ToggleMenu => {
                self.page.toggle_menu();
                render_page(&self.content, &self.page, &self.controller.snapshot())
            }
            Action::Show => render_page(&self.content, &self.page, &self.controller.snapshot()),
            Action::Submit => {
                let outcome = self.controller.submit(self.transport.as_ref()).await;
                if let SubmitOutcome::Ignored = outcome {
                    info!("Submit ignored by the controller");
                }
                render_quote_section(&self.content, &self.controller.snapshot())
            }
            Action::Reset => {
                self.controller.reset();
                render_quote_section(&self.content, &self.controller.snapshot())
            }
            Action::Help => Self::help(),
            Action::Quit => String::new(),
        }
    }

    fn help() -> String {
        let mut out = String::from("Commandes :\n");
        for field in FormField::ALL {
            out.push_str(&format!("  {} <valeur>  — {}\n", field.name(), field.label()));
        }
        out.push_str("  menu | page | envoyer | nouvelle | aide | quitter\n");
        out
    }

    /// Read console lines until `quitter`, one action at a time.
    pub async fn run(mut self) {
        println!("{}", render_page(&self.content, &self.page, &self.controller.snapshot()));
        println!("{}", Self::help());

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            match Action::parse(&line) {
                Some(Action::Quit) => break,
                Some(action) => println!("{}", self.handle(action).await),
                None => println!("Commande inconnue (tapez « aide »)"),
            }
        }
        info!("Session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_input() {
        assert_eq!(
            Action::parse("name Jean Dupont"),
            Some(Action::Input(FormField::Name, "Jean Dupont".to_string()))
        );
        assert_eq!(
            Action::parse("service valet"),
            Some(Action::Input(FormField::Service, "valet".to_string()))
        );
        // clearing a field
        assert_eq!(
            Action::parse("message"),
            Some(Action::Input(FormField::Message, String::new()))
        );
    }

    #[test]
    fn test_parse_verbs() {
        assert_eq!(Action::parse("menu"), Some(Action::ToggleMenu));
        assert_eq!(Action::parse("envoyer"), Some(Action::Submit));
        assert_eq!(Action::parse("  quitter  "), Some(Action::Quit));
        assert_eq!(Action::parse("inconnu"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_submit_reaches_confirmation() {
        let mut app = App::new(&SubmissionConfig::from_test_env());
        app.handle(Action::Input(FormField::Name, "Jean Dupont".into())).await;
        app.handle(Action::Input(FormField::Email, "jean@example.com".into())).await;
        app.handle(Action::Input(FormField::Phone, "0600000000".into())).await;
        app.handle(Action::Input(FormField::Vehicle, "Peugeot 208".into())).await;
        app.handle(Action::Input(FormField::Service, "mecanique".into())).await;
        let rendered = app.handle(Action::Submit).await;
        assert!(rendered.contains("Demande Envoyée !"));
    }
}
