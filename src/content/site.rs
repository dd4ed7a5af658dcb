//! Static copy of the site, consumed as fixed configuration by the shell.
//!
//! Text is hardcoded French, as on the live page.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub identity: Identity,
    pub nav: Vec<NavLink>,
    pub stats: Vec<Stat>,
    pub valet: ValetFeature,
    pub services: Vec<ServiceCard>,
    pub buy_sell: BuySell,
    pub quote_form: QuoteFormCopy,
    pub contact: ContactDetails,
    pub footer: FooterCopy,
}

#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub brand: String,
    pub group: String,
    pub partner: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub name: String,
    pub anchor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValetFeature {
    pub kicker: String,
    pub headline: String,
    pub description: String,
    pub bullets: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuySell {
    pub kicker: String,
    pub headline: String,
    pub description: String,
    pub highlights: Vec<(String, String)>,
    pub cta: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteFormCopy {
    pub headline: String,
    pub subtitle: String,
    pub submit_label: String,
    pub submitting_label: String,
    pub success_title: String,
    pub success_body: String,
    pub again_label: String,
    pub select_placeholder: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactDetails {
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
    pub hours: Vec<OpeningHours>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpeningHours {
    pub days: String,
    pub slots: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterCopy {
    pub blurb: String,
    pub copyright: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        SiteContent {
            identity: Identity {
                brand: "AUTO REPARIS".into(),
                group: "KR GROUPE".into(),
                partner: "AD — Partenaire Réseau".into(),
            },
            nav: vec![
                NavLink { name: "Accueil".into(), anchor: "#".into() },
                NavLink { name: "Services".into(), anchor: "#services".into() },
                NavLink { name: "Rendez-vous".into(), anchor: "#devis".into() },
                NavLink { name: "Contact".into(), anchor: "#contact".into() },
            ],
            stats: vec![
                Stat { value: "15+".into(), label: "Années d'expérience".into() },
                Stat { value: "5000+".into(), label: "Clients satisfaits".into() },
                Stat { value: "2 Ans".into(), label: "Garantie AD".into() },
                Stat { value: "100%".into(), label: "Experts certifiés".into() },
            ],
            valet: ValetFeature {
                kicker: "Innovation Exclusive".into(),
                headline: "Pas le temps ? On s'occupe de tout.".into(),
                description: "Auto Reparis réinvente le garage traditionnel. Si vous êtes débordé, \
                    notre service de conciergerie récupère votre véhicule, effectue les réparations \
                    et vous le livre à l'adresse de votre choix."
                    .into(),
                bullets: vec![
                    "Récupération à domicile ou au bureau".into(),
                    "Suivi des réparations en temps réel".into(),
                    "Livraison de votre véhicule réparé".into(),
                ],
                cta: "Réserver mon Service Valet".into(),
            },
            services: vec![
                ServiceCard {
                    title: "Mécanique Générale".into(),
                    description: "Révision, freinage, distribution, embrayage. Nous intervenons sur \
                        toutes les marques avec des pièces d'origine."
                        .into(),
                },
                ServiceCard {
                    title: "Électronique & Diagnostic".into(),
                    description: "Lecture de codes défauts, reprogrammation, recherche de pannes \
                        complexes avec les derniers outils de diagnostic."
                        .into(),
                },
                ServiceCard {
                    title: "Carrosserie & Peinture".into(),
                    description: "Remise en état après sinistre, débosselage sans peinture, lustrage \
                        et protection céramique."
                        .into(),
                },
            ],
            buy_sell: BuySell {
                kicker: "Opportunités".into(),
                headline: "Achat & Vente".into(),
                description: "Vendez votre véhicule au meilleur prix ou découvrez notre sélection \
                    d'occasions révisées et garanties."
                    .into(),
                highlights: vec![
                    (
                        "Estimation".into(),
                        "Reprise immédiate de votre véhicule actuel.".into(),
                    ),
                    (
                        "Garantie".into(),
                        "Véhicules certifiés sur 110 points de contrôle.".into(),
                    ),
                ],
                cta: "Voir le stock".into(),
            },
            quote_form: QuoteFormCopy {
                headline: "Demandez votre Devis".into(),
                subtitle: "Réponse rapide garantie sous 24h. C'est gratuit et sans engagement.".into(),
                submit_label: "Envoyer ma demande".into(),
                submitting_label: "Envoi en cours...".into(),
                success_title: "Demande Envoyée !".into(),
                success_body: "Merci pour votre confiance. Un expert Auto Reparis vous contactera \
                    très prochainement."
                    .into(),
                again_label: "Envoyer une autre demande".into(),
                select_placeholder: "Sélectionnez un service".into(),
            },
            contact: ContactDetails {
                address: vec![
                    "3 avenue de la gare de l'abbaye".into(),
                    "93600 Aulnay-sous-Bois".into(),
                ],
                phone: "01 48 69 92 33".into(),
                email: "autoreparisaulny@gmail.com".into(),
                hours: vec![
                    OpeningHours {
                        days: "Lun - Jeu".into(),
                        slots: "09h00 - 13h00 | 14h00 - 18h00".into(),
                    },
                    OpeningHours {
                        days: "Vendredi".into(),
                        slots: "09h00 - 12h00 | 14h00 - 18h00".into(),
                    },
                    OpeningHours {
                        days: "Samedi".into(),
                        slots: "09h00 - 13h00 | 14h00 - 18h00".into(),
                    },
                ],
            },
            footer: FooterCopy {
                blurb: "Votre partenaire de confiance pour l'entretien et la réparation de votre \
                    véhicule à Aulnay-sous-Bois. Expertise AD et service client premium."
                    .into(),
                copyright: "© 2024 Auto Reparis. Tous droits réservés. KR GROUPE.".into(),
            },
        }
    }
}
