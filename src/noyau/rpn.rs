// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - quatre opérateurs binaires, tous associatifs à gauche
// - égalité de précédence => on dépile (gauche-à-droite strict)
// - pas de parenthèses ni de fonctions : la conversion ne peut pas échouer

use super::jetons::{Jeton, Operateur};

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn en_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Operateur> = Vec::new();

    for jeton in jetons.iter().copied() {
        match jeton {
            Jeton::Nombre(_) => out.push(jeton),

            Jeton::Op(op) => {
                // dépile tant que l'opérateur du haut lie au moins aussi fort
                while let Some(&haut) = ops.last() {
                    if haut.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Jeton::Op(haut));
                    ops.pop();
                }
                ops.push(op);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(Jeton::Op(op));
    }

    out
}
