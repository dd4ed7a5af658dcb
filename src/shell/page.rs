//! Presentation shell: stateless text rendering of the page.
//!
//! Renders the static sections from [`SiteContent`] plus the form state
//! from a controller snapshot. Its only conditional behaviors are the
//! menu toggle, the form/success swap and the per-field error lines.

use crate::content::site::SiteContent;
use crate::controller::quote_form::{FormField, FormPhase, FormSnapshot};
use crate::model::quote::ServiceCategory;

/// Shell-local state: just the menu flag. Everything else comes from the
/// controller snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageState {
    pub menu_open: bool,
}

impl PageState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

/// Render the whole page.
pub fn render_page(content: &SiteContent, page: &PageState, form: &FormSnapshot) -> String {
    let mut out = String::new();

    render_header(&mut out, content, page);
    render_stats(&mut out, content);
    render_valet(&mut out, content);
    render_services(&mut out, content);
    render_buy_sell(&mut out, content);
    out.push_str(&render_quote_section(content, form));
    render_contact(&mut out, content);
    render_footer(&mut out, content);

    out
}

fn render_header(out: &mut String, content: &SiteContent, page: &PageState) {
    out.push_str(&format!(
        "==== {} — {} ({}) ====\n",
        content.identity.brand, content.identity.group, content.identity.partner
    ));
    if page.menu_open {
        out.push_str("[menu ✕]\n");
        for link in &content.nav {
            out.push_str(&format!("  - {} ({})\n", link.name, link.anchor));
        }
    } else {
        out.push_str("[menu ☰]\n");
    }
    out.push('\n');
}

fn render_stats(out: &mut String, content: &SiteContent) {
    for stat in &content.stats {
        out.push_str(&format!("{} {}  ", stat.value, stat.label));
    }
    out.push_str("\n\n");
}

fn render_valet(out: &mut String, content: &SiteContent) {
    let valet = &content.valet;
    out.push_str(&format!("-- {} --\n{}\n{}\n", valet.kicker, valet.headline, valet.description));
    for bullet in &valet.bullets {
        out.push_str(&format!("  ✓ {}\n", bullet));
    }
    out.push_str(&format!("[{}]\n\n", valet.cta));
}

fn render_services(out: &mut String, content: &SiteContent) {
    out.push_str("-- Nos Expertises --\n");
    for card in &content.services {
        out.push_str(&format!("* {}\n  {}\n", card.title, card.description));
    }
    out.push('\n');
}

fn render_buy_sell(out: &mut String, content: &SiteContent) {
    let section = &content.buy_sell;
    out.push_str(&format!("-- {} --\n{}\n{}\n", section.kicker, section.headline, section.description));
    for (title, text) in &section.highlights {
        out.push_str(&format!("  {} : {}\n", title, text));
    }
    out.push_str(&format!("[{}]\n\n", section.cta));
}

/// Render the quote section: the form, or the success confirmation once
/// the controller reports the submitted phase.
pub fn render_quote_section(content: &SiteContent, form: &FormSnapshot) -> String {
    let copy = &content.quote_form;
    let mut out = String::new();
    out.push_str(&format!("-- {} --\n{}\n", copy.headline, copy.subtitle));

    if form.phase == FormPhase::Submitted {
        out.push_str(&format!("✔ {}\n{}\n[{}]\n\n", copy.success_title, copy.success_body, copy.again_label));
        return out;
    }

    if let Some(failure) = &form.submit_failure {
        out.push_str(&format!("⚠ {} — réessayez, vos informations sont conservées.\n", failure));
    }

    for field in FormField::ALL {
        let value = match field {
            FormField::Name => &form.draft.name,
            FormField::Email => &form.draft.email,
            FormField::Phone => &form.draft.phone,
            FormField::Vehicle => &form.draft.vehicle,
            FormField::Service => &form.draft.service,
            FormField::Message => &form.draft.message,
        };
        out.push_str(&format!("{} : {}\n", field.label(), value));
        if field == FormField::Service && value.is_empty() {
            out.push_str(&format!("  ({})\n", copy.select_placeholder));
            for category in ServiceCategory::ALL {
                out.push_str(&format!("    {} — {}\n", category.code(), category.label()));
            }
        }
        if let Some(message) = form.errors.get(field.name()) {
            out.push_str(&format!("  ! {}\n", message));
        }
    }

    if form.phase == FormPhase::Submitting {
        out.push_str(&format!("[{}] (désactivé)\n\n", copy.submitting_label));
    } else {
        out.push_str(&format!("[{}]\n\n", copy.submit_label));
    }
    out
}

fn render_contact(out: &mut String, content: &SiteContent) {
    let contact = &content.contact;
    out.push_str("-- Nous Contacter --\n");
    for line in &contact.address {
        out.push_str(&format!("{}\n", line));
    }
    out.push_str(&format!("Tél : {}\nEmail : {}\n", contact.phone, contact.email));
    for hours in &contact.hours {
        out.push_str(&format!("{} : {}\n", hours.days, hours.slots));
    }
    out.push('\n');
}

fn render_footer(out: &mut String, content: &SiteContent) {
    out.push_str(&format!("{}\n{}\n", content.footer.blurb, content.footer.copyright));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::quote_form::QuoteFormController;

    #[test]
    fn test_menu_toggle_changes_header() {
        let content = SiteContent::default();
        let controller = QuoteFormController::new();
        let mut page = PageState::default();

        let closed = render_page(&content, &page, &controller.snapshot());
        assert!(closed.contains("[menu ☰]"));
        assert!(!closed.contains("Rendez-vous"));

        page.toggle_menu();
        let open = render_page(&content, &page, &controller.snapshot());
        assert!(open.contains("[menu ✕]"));
        assert!(open.contains("Rendez-vous"));

        page.toggle_menu();
        assert!(!page.menu_open);
    }

    #[test]
    fn test_idle_form_renders_fields_and_options() {
        let content = SiteContent::default();
        let controller = QuoteFormController::new();
        let section = render_quote_section(&content, &controller.snapshot());
        assert!(section.contains("Nom Complet"));
        assert!(section.contains("Sélectionnez un service"));
        assert!(section.contains("achat-vente"));
        assert!(section.contains("[Envoyer ma demande]"));
    }

    #[test]
    fn test_field_errors_render_inline() {
        let content = SiteContent::default();
        let mut controller = QuoteFormController::new();
        assert!(controller.begin_submit().is_none());
        let section = render_quote_section(&content, &controller.snapshot());
        assert!(section.contains("! Nom requis"));
        assert!(section.contains("! Email invalide"));
        assert!(section.contains("! Veuillez choisir un service"));
    }

    #[test]
    fn test_submitting_disables_the_control() {
        let content = SiteContent::default();
        let mut controller = QuoteFormController::new();
        controller.input(crate::controller::quote_form::FormField::Name, "Jean Dupont");
        controller.input(crate::controller::quote_form::FormField::Email, "jean@example.com");
        controller.input(crate::controller::quote_form::FormField::Phone, "0600000000");
        controller.input(crate::controller::quote_form::FormField::Vehicle, "208");
        controller.input(crate::controller::quote_form::FormField::Service, "mecanique");
        controller.begin_submit().expect("valid draft");
        let section = render_quote_section(&content, &controller.snapshot());
        assert!(section.contains("[Envoi en cours...] (désactivé)"));
        assert!(!section.contains("[Envoyer ma demande]"));
    }

    #[test]
    fn test_submitted_swaps_to_confirmation() {
        let content = SiteContent::default();
        let mut controller = QuoteFormController::new();
        controller.input(crate::controller::quote_form::FormField::Name, "Jean Dupont");
        controller.input(crate::controller::quote_form::FormField::Email, "jean@example.com");
        controller.input(crate::controller::quote_form::FormField::Phone, "0600000000");
        controller.input(crate::controller::quote_form::FormField::Vehicle, "208");
        controller.input(crate::controller::quote_form::FormField::Service, "mecanique");
        controller.begin_submit().expect("valid draft");
        controller.complete_submit(Ok(crate::model::quote::SubmissionAck::new()));

        let section = render_quote_section(&content, &controller.snapshot());
        assert!(section.contains("Demande Envoyée !"));
        assert!(section.contains("Envoyer une autre demande"));
        assert!(!section.contains("Nom Complet"));
    }
}
