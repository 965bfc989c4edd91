//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> évaluation pile
//!
//! Le pipeline est pur et sans état : il consomme le texte d'expression
//! composé par l'accumulateur et rien d'autre. Le résultat est formaté par
//! l'appelant (format::format_resultat) avant tout réaffichage ou stockage.

use thiserror::Error;

use super::jetons::{format_jetons, tokenize, Jeton, Operateur};
use super::rpn::en_rpn;

/// Échecs d'évaluation. Tous sont absorbés à la frontière `egal()` de
/// l'accumulateur : aucun ne traverse jusqu'à l'utilisateur autrement que
/// par la sentinelle d'erreur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Le diviseur d'un `/` vaut exactement zéro.
    #[error("division par zéro")]
    DivisionParZero,

    /// RPN dégénérée : opérande manquante ou pile finale multiple.
    /// L'accumulateur garantit que ce cas ne se produit jamais en pratique.
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Débordement f64 (±∞) ou NaN : non affichable, non re-parsable.
    #[error("résultat hors domaine")]
    ResultatNonFini,
}

/// API publique : évalue une expression infixe complète.
///
/// Une entrée vide (ou réduite à des blancs) vaut 0.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    // 1) Jetons
    let jetons = tokenize(expr_str);
    if jetons.is_empty() {
        return Ok(0.0);
    }

    // 2) RPN
    let rpn = en_rpn(&jetons);
    log::debug!(
        "pipeline: {:?} => jetons [{}] => rpn [{}]",
        expr_str,
        format_jetons(&jetons),
        format_jetons(&rpn)
    );

    // 3) Évaluation
    eval_rpn(&rpn)
}

/// Évalue une suite RPN avec une pile d'opérandes.
///
/// - un nombre empile sa valeur
/// - un opérateur dépile b puis a (b est l'opérande droite) et empile a∘b
/// - RPN vide => 0
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn.iter().copied() {
        match jeton {
            Jeton::Nombre(v) => pile.push(v),

            Jeton::Op(op) => {
                let b = pile.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = pile.pop().ok_or(ErreurEval::ExpressionInvalide)?;

                let v = match op {
                    Operateur::Plus => a + b,
                    Operateur::Moins => a - b,
                    Operateur::Fois => a * b,
                    Operateur::Divise => {
                        if b == 0.0 {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                };

                pile.push(v);
            }
        }
    }

    if pile.is_empty() {
        return Ok(0.0);
    }
    if pile.len() != 1 {
        return Err(ErreurEval::ExpressionInvalide);
    }

    let resultat = pile[0];
    if !resultat.is_finite() {
        return Err(ErreurEval::ResultatNonFini);
    }
    Ok(resultat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(s: &str) -> f64 {
        eval_expression(s).unwrap_or_else(|e| panic!("eval_expression({s:?}) erreur: {e}"))
    }

    #[test]
    fn precedence_standard() {
        assert_eq!(ok("2 + 3 * 4"), 14.0);
        assert_eq!(ok("2 * 3 + 4"), 10.0);
        assert_eq!(ok("10 - 2 / 4"), 9.5);
    }

    #[test]
    fn associativite_gauche() {
        assert_eq!(ok("8 - 3 - 2"), 3.0);
        assert_eq!(ok("12 / 4 / 3"), 1.0);
    }

    #[test]
    fn division_par_zero() {
        assert_eq!(eval_expression("6 / 0"), Err(ErreurEval::DivisionParZero));
        assert_eq!(eval_expression("0 / 0"), Err(ErreurEval::DivisionParZero));
    }

    #[test]
    fn entree_vide_vaut_zero() {
        assert_eq!(ok(""), 0.0);
        assert_eq!(ok("   "), 0.0);
        assert_eq!(eval_rpn(&[]), Ok(0.0));
    }

    #[test]
    fn rpn_degeneree_refusee() {
        // opérande manquante : [+]
        assert_eq!(
            eval_rpn(&[Jeton::Op(Operateur::Plus)]),
            Err(ErreurEval::ExpressionInvalide)
        );
        // pile finale multiple : [1 2]
        assert_eq!(
            eval_rpn(&[Jeton::Nombre(1.0), Jeton::Nombre(2.0)]),
            Err(ErreurEval::ExpressionInvalide)
        );
    }

    #[test]
    fn debordement_refuse() {
        let grand = format!("1{}", "0".repeat(200)); // 1e200
        let expr = format!("{grand} * {grand}");
        assert_eq!(eval_expression(&expr), Err(ErreurEval::ResultatNonFini));
    }
}
