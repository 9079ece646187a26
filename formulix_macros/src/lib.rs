use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, PatType, Type};

/// Rewrites a function with fixed `f64` parameters into the variadic
/// `fn(args: &[f64]) -> f64` shape expected by the function registry.
///
/// ```ignore
/// #[formulix_fn]
/// fn atan2(y: f64, x: f64) -> f64 {
///     y.atan2(x)
/// }
/// ```
///
/// expands to a function taking `args: &[f64]` that reads `y` from
/// `args[0]` and `x` from `args[1]`. No length check is emitted: the
/// registry validates the minimum arity before a call, and reading past
/// the end of a shorter slice is intercepted at the call boundary.
#[proc_macro_attribute]
pub fn formulix_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let fn_attrs = &input.attrs;
    let fn_name = &input.sig.ident;
    let fn_args = &input.sig.inputs;
    let fn_body = &input.block;
    let fn_output = &input.sig.output;

    let mut arg_extractions = Vec::new();

    for (i, arg) in fn_args.iter().enumerate() {
        if let FnArg::Typed(PatType { pat, ty, .. }) = arg {
            let arg_name = match **pat {
                syn::Pat::Ident(ref ident) => &ident.ident,
                _ => panic!("Unsupported pattern"),
            };

            match **ty {
                Type::Path(ref type_path) if type_path.path.is_ident("f64") => {
                    arg_extractions.push(quote! {
                        let #arg_name = args[#i];
                    });
                }
                _ => panic!("Unsupported parameter type, must be f64"),
            }
        }
    }

    let expanded = quote! {
        #(#fn_attrs)*
        pub fn #fn_name(args: &[f64]) #fn_output {
            #(#arg_extractions)*

            #fn_body
        }
    };

    TokenStream::from(expanded)
}
