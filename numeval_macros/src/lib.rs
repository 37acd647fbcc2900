use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{parse_macro_input, FnArg, ItemFn, Pat, PatType, ReturnType, Type};

enum ArgKind {
    Scalar,
    Slice,
}

fn arg_kind(ty: &Type) -> Option<ArgKind> {
    match ty {
        Type::Path(type_path) if type_path.path.is_ident("f64") => Some(ArgKind::Scalar),
        Type::Reference(reference) => match &*reference.elem {
            Type::Slice(slice) => match &*slice.elem {
                Type::Path(type_path) if type_path.path.is_ident("f64") => Some(ArgKind::Slice),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}

fn returns_result(output: &ReturnType) -> bool {
    match output {
        ReturnType::Type(_, ty) => match &**ty {
            Type::Path(type_path) => type_path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == "Result"),
            _ => false,
        },
        ReturnType::Default => false,
    }
}

/// Turns a plain numeric function into a native function callable from expressions.
///
/// `fn hyp(a: f64, b: f64) -> f64 { .. }` becomes
/// `fn hyp(args: &[f64]) -> Result<f64, String>`, rejecting the wrong number of
/// arguments. A function taking a single `&[f64]` receives every argument and is
/// not arity-checked. The body may also return `Result<f64, String>` to report
/// domain errors.
#[proc_macro_attribute]
pub fn numeval_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let attrs = &input.attrs;
    let vis = &input.vis;
    let fn_name = &input.sig.ident;
    let fn_args = &input.sig.inputs;
    let fn_output = &input.sig.output;
    let fn_body = &input.block;

    if matches!(fn_output, ReturnType::Default) {
        return Err(syn::Error::new(
            input.sig.span(),
            "numeval_fn functions must return `f64` or `Result<f64, String>`",
        ));
    }

    let mut kinds = Vec::new();
    for arg in fn_args.iter() {
        let FnArg::Typed(PatType { pat, ty, .. }) = arg else {
            return Err(syn::Error::new(arg.span(), "methods are not supported"));
        };
        if !matches!(**pat, Pat::Ident(_)) {
            return Err(syn::Error::new(pat.span(), "unsupported argument pattern"));
        }
        let kind = arg_kind(ty).ok_or_else(|| {
            syn::Error::new(ty.span(), "arguments must be `f64`, or a single `&[f64]`")
        })?;
        kinds.push(kind);
    }

    let variadic = kinds.iter().any(|kind| matches!(kind, ArgKind::Slice));
    if variadic && kinds.len() != 1 {
        return Err(syn::Error::new(
            fn_args.span(),
            "a `&[f64]` argument must be the only argument",
        ));
    }

    let inner = format_ident!("__{}_impl", fn_name);
    let (check, invocation) = if variadic {
        (quote! {}, quote! { #inner(args) })
    } else {
        let arity = kinds.len();
        let indices = 0..arity;
        (
            quote! {
                if args.len() != #arity {
                    return Err(format!("Expected {} arguments, but got {}", #arity, args.len()));
                }
            },
            quote! { #inner(#(args[#indices]),*) },
        )
    };

    let result = if returns_result(fn_output) {
        invocation
    } else {
        quote! { Ok(#invocation) }
    };

    Ok(quote! {
        #(#attrs)*
        #vis fn #fn_name(args: &[f64]) -> Result<f64, String> {
            fn #inner(#fn_args) #fn_output #fn_body

            #check
            #result
        }
    })
}
