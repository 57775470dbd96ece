//! Token-level expansion shared by every refinement macro

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use safe_literals_core::{expand, Expansion, ExpansionOutcome, RefinementKind};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, Lit, Token, UnOp};

/// Expand one invocation of the macro for `kind`.
///
/// Rejections become a `compile_error!` at the first argument, or at the
/// call site when there is no argument at all.
pub fn expand_refinement(kind: RefinementKind, input: TokenStream) -> TokenStream {
    match try_expand(kind, input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(kind: RefinementKind, input: TokenStream) -> syn::Result<TokenStream> {
    let arguments = Punctuated::<Expr, Token![,]>::parse_terminated.parse2(input)?;
    let checked: Vec<String> = arguments.iter().map(checked_text).collect();

    match expand(kind, &checked) {
        ExpansionOutcome::Accepted(expansion) => {
            let literal = arguments
                .first()
                .map_or_else(|| expansion.literal().to_owned(), source_text);
            Expansion::new(kind, literal)
                .to_string()
                .parse::<TokenStream>()
                .map_err(|err| syn::Error::new(Span::call_site(), err))
        }
        ExpansionOutcome::Rejected(error) => {
            let span = arguments
                .first()
                .map_or_else(Span::call_site, |argument| argument.span());
            Err(syn::Error::new(span, error))
        }
    }
}

/// Text of one argument as the checker sees it.
///
/// String literals are respelled as plain `"..."` with their value
/// escaped, so `r""` and a string holding only a line continuation both
/// read as `""`.
fn checked_text(expr: &Expr) -> String {
    match expr {
        Expr::Lit(expr) => match &expr.lit {
            Lit::Str(string) => format!("{:?}", string.value()),
            _ => source_text_of_lit(&expr.lit),
        },
        Expr::Group(group) => checked_text(&group.expr),
        other => source_text(other),
    }
}

fn source_text_of_lit(lit: &Lit) -> String {
    lit.to_token_stream().to_string()
}

/// Source text of one argument, as it is emitted.
///
/// rustc hands `-1` over as a negation applied to the literal `1`, and
/// `macro_rules!` forwarding wraps arguments in invisible groups; both are
/// folded back into plain literal text here.
fn source_text(expr: &Expr) -> String {
    match expr {
        Expr::Lit(expr) => source_text_of_lit(&expr.lit),
        Expr::Group(group) => source_text(&group.expr),
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            format!("-{}", source_text(&unary.expr))
        }
        other => other.to_token_stream().to_string(),
    }
}
