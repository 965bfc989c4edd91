//! Tests de parcours : frappes bout-en-bout sur l'API publique.
//!
//! Chaque test déroule une séquence de touches comme le ferait la coquille
//! (boutons ou clavier) et vérifie l'état observable après chaque étape
//! significative.

use super::jetons::Operateur;
use super::{Accumulateur, Historique};

fn tape(acc: &mut Accumulateur, touches: &str) {
    for c in touches.chars() {
        match c {
            '0'..='9' | '.' => acc.tape_chiffre(c),
            _ => {
                let op =
                    Operateur::depuis_char(c).unwrap_or_else(|| panic!("touche inconnue: {c:?}"));
                acc.choisit_operateur(op);
            }
        }
    }
}

/// `=` en consignant dans l'historique, comme le fait la coquille.
fn egal(acc: &mut Accumulateur, historique: &mut Historique) {
    if let Some(calcul) = acc.egal() {
        historique.consigne(calcul);
    }
}

/* ------------------------ Parcours nominaux ------------------------ */

#[test]
fn parcours_12_plus_5() {
    let mut acc = Accumulateur::default();
    let mut historique = Historique::default();

    assert_eq!(acc.operande_courant(), "0");

    acc.tape_chiffre('1');
    assert_eq!(acc.operande_courant(), "1");
    acc.tape_chiffre('2');
    assert_eq!(acc.operande_courant(), "12");
    assert_eq!(acc.affichage_precedent(), "");

    acc.choisit_operateur(Operateur::Plus);
    assert_eq!(acc.affichage_precedent(), "12 +");
    assert_eq!(acc.operande_courant(), "0");

    acc.tape_chiffre('5');
    assert_eq!(acc.operande_courant(), "5");

    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "17");
    assert_eq!(acc.affichage_precedent(), "");

    let entrees = historique.entrees();
    assert_eq!(entrees.len(), 1);
    assert_eq!(entrees[0].expression, "12 + 5");
    assert_eq!(entrees[0].resultat, "17");
}

#[test]
fn parcours_priorite_des_operateurs() {
    let mut acc = Accumulateur::default();
    let mut historique = Historique::default();

    tape(&mut acc, "2+3*4");
    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "14");
    assert_eq!(historique.entrees()[0].expression, "2 + 3 * 4");
}

#[test]
fn parcours_division_decimale() {
    let mut acc = Accumulateur::default();
    let mut historique = Historique::default();

    tape(&mut acc, "1/3");
    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "0.333333333333");

    // le résultat affiché re-parse tel quel : un second = est stable
    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "0.333333333333");
}

#[test]
fn parcours_remplacement_puis_calcul() {
    let mut acc = Accumulateur::default();
    let mut historique = Historique::default();

    tape(&mut acc, "5+");
    tape(&mut acc, "*"); // changement d'avis
    assert_eq!(acc.affichage_precedent(), "5 *");

    tape(&mut acc, "6");
    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "30");
    assert_eq!(historique.entrees()[0].expression, "5 * 6");
}

#[test]
fn parcours_enchainement_de_resultats() {
    let mut acc = Accumulateur::default();
    let mut historique = Historique::default();

    tape(&mut acc, "6*7");
    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "42");

    // l'opérateur suivant reprend 42 comme opérande gauche
    tape(&mut acc, "-2");
    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "40");

    assert_eq!(historique.entrees().len(), 2);
    assert_eq!(historique.entrees()[0].expression, "42 - 2");
    assert_eq!(historique.entrees()[1].expression, "6 * 7");
}

#[test]
fn parcours_saisie_decimale_apres_resultat() {
    let mut acc = Accumulateur::default();
    let mut historique = Historique::default();

    tape(&mut acc, "2*2");
    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "4");

    // le point après un résultat démarre une saisie fraîche
    tape(&mut acc, ".5");
    assert_eq!(acc.operande_courant(), ".5");
    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "0.5");
}

/* ------------------------ Parcours d'erreur ------------------------ */

#[test]
fn parcours_erreur_puis_recuperation() {
    let mut acc = Accumulateur::default();
    let mut historique = Historique::default();

    tape(&mut acc, "6/0");
    egal(&mut acc, &mut historique);
    assert!(acc.est_erreur());
    assert!(historique.est_vide());

    // figé tant que AC n'est pas pressé
    tape(&mut acc, "9+1");
    egal(&mut acc, &mut historique);
    assert!(acc.est_erreur());
    assert!(historique.est_vide());

    acc.reset_total();
    tape(&mut acc, "9+1");
    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "10");
    assert_eq!(historique.entrees().len(), 1);
}

#[test]
fn parcours_clear_revient_a_l_etat_initial() {
    let mut acc = Accumulateur::default();
    let mut historique = Historique::default();

    tape(&mut acc, "1.5*3");
    egal(&mut acc, &mut historique);
    acc.reset_total();

    let vierge = Accumulateur::default();
    assert_eq!(acc.operande_courant(), vierge.operande_courant());
    assert_eq!(acc.affichage_precedent(), vierge.affichage_precedent());
    assert!(!acc.est_erreur());
}

/* ------------------------ Parcours historique ------------------------ */

#[test]
fn parcours_reprise_historique_et_enchainement() {
    let mut acc = Accumulateur::default();
    let mut historique = Historique::default();

    tape(&mut acc, "20+5");
    egal(&mut acc, &mut historique);
    tape(&mut acc, "7*7");
    egal(&mut acc, &mut historique);

    // clic sur l'entrée la plus ancienne du panneau
    let resultat = historique.entrees()[1].resultat.clone();
    acc.reprend_resultat(&resultat);
    assert_eq!(acc.operande_courant(), "25");

    tape(&mut acc, "*2");
    egal(&mut acc, &mut historique);
    assert_eq!(acc.operande_courant(), "50");
    assert_eq!(historique.entrees()[0].expression, "25 * 2");
}
