// src/noyau/format.rs
//
// Affichage du résultat : arrondi à 12 chiffres significatifs (gomme les
// artefacts binaires du f64) puis forme décimale canonique la plus courte.
// Appliqué avant tout stockage (opérande courant, mémoire, historique) :
// ces textes sont re-parsés ensuite comme décimaux simples.

/// Chiffres significatifs conservés à l'affichage.
const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Arrondit à 12 chiffres significatifs puis rend le texte décimal canonique.
///
/// Exemples : 1/3 -> "0.333333333333" ; 0.1+0.2 -> "0.3" ; 17.0 -> "17".
/// Le zéro négatif s'affiche "0".
pub fn format_resultat(valeur: f64) -> String {
    let arrondi = arrondi_significatif(valeur);

    if arrondi == 0.0 {
        // couvre aussi -0.0 (égal à 0.0 en f64)
        return "0".to_string();
    }

    // Display f64 = plus courte forme décimale qui re-parse à l'identique
    format!("{arrondi}")
}

/// Arrondi à CHIFFRES_SIGNIFICATIFS via l'écriture scientifique.
fn arrondi_significatif(valeur: f64) -> f64 {
    if !valeur.is_finite() {
        return valeur;
    }
    format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, valeur)
        .parse()
        .unwrap_or(valeur)
}
