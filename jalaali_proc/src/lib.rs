//! Attribute helpers for the conditional bindings of `jalaali`.
//!
//! Both macros exist because the binding generators do not cope with conditional attributes: a
//! qualifier like `extern "C"` cannot be written inside `cfg_attr` and PyO3 misreads nested
//! attributes under a conditional `pymethods`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Abi, Attribute, ImplItem, ImplItemFn, ItemFn, ItemImpl, Meta, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Qualifiers accepted by [`fn_attr()`], in the order Rust expects them.
struct Qualifiers {
    constness: Option<Token![const]>,
    abi: Option<Abi>,
}

impl Parse for Qualifiers {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let v = Self {
            constness: input.parse()?,
            abi: input.parse()?,
        };
        if !input.is_empty() {
            return Err(input.error("expected only `const` and/or `extern \"ABI\"`"));
        }
        Ok(v)
    }
}

/// Add function qualifiers (`const`, `extern "C"`) to the annotated function.
///
/// ```rust,ignore
/// #[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
/// pub fn jalaali_to_jdn(jy: Year, jm: Month, jd: Day) -> FfiInt { todo!() }
/// ```
#[proc_macro_attribute]
pub fn fn_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    let Qualifiers { constness, abi } = parse_macro_input!(args as Qualifiers);
    let mut item_fn = parse_macro_input!(tokens as ItemFn);

    if constness.is_some() {
        item_fn.sig.constness = constness;
    }
    if abi.is_some() {
        item_fn.sig.abi = abi;
    }

    quote!(#item_fn).into()
}

/// Create bindgens for conditional pyo3.
///
/// PyO3 generally does not support attributes under conditional clauses
/// (<https://github.com/PyO3/pyo3/issues/780>). Simply, when the header macro of a block like
/// `pymethods` is conditional (via `cfg_attr`), the nested macros (like `new`) will misbehave.
///
/// As of now, this only supports usage for `impl` blocks and only with `pymethods` input similar to
/// the example below:
///
/// ```rust,ignore
/// #[pymethods]
/// impl X {
///     #[new]
///     pub fn new() -> Self { todo!() }
/// }
///
/// // can be conditionally written like so all the functions will have the given attribute:
///
/// #[cfg_attr(criterion, py_attr(pymethods, new))]
/// impl X {
///     pub fn new() -> Self { todo!() }
/// }
/// ```
#[proc_macro_attribute]
pub fn py_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    let arg_parser = |input: ParseStream| {
        let parent = input.parse::<Meta>()?;
        input.parse::<Token![,]>()?;
        let meta = input.parse::<Meta>()?;
        Ok((parent, meta))
    };

    let (parent, meta) = parse_macro_input!(args with arg_parser);

    if !parent.path().is_ident("pymethods") {
        return syn::Error::new_spanned(parent, "only `pymethods` is supported as a parent")
            .to_compile_error()
            .into();
    }

    let mut item_impl = parse_macro_input!(tokens as ItemImpl);
    for i in item_impl.items.iter_mut() {
        if let ImplItem::Fn(ImplItemFn { attrs, .. }) = i {
            attrs.push(Attribute {
                pound_token: Default::default(),
                style: syn::AttrStyle::Outer,
                bracket_token: syn::token::Bracket::default(),
                meta: meta.clone(),
            });
        }
    }
    quote! {
        #[#parent]
        #item_impl
    }
    .into()
}
