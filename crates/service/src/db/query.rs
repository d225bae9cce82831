//! Query-building helpers. All user input ends up as bound parameters.

use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};

const LIKE_ESCAPE: char = '\\';

/// Escape LIKE wildcards so user input only ever matches literally.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Case-insensitive `starts_with` on `col`: `LOWER(col) LIKE $1 ESCAPE '\'`.
/// Pass a `(Entity, Column)` pair when the select joins tables sharing the column name.
pub fn prefix_ci<C: IntoColumnRef>(col: C, prefix: &str) -> SimpleExpr {
    let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(col))).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}
