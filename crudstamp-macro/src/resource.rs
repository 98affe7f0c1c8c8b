use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, Item, LitStr, Token,
};

struct ResourceArgs {
    path: LitStr,
}

impl Parse for ResourceArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut path = None;
        while !input.is_empty() {
            let name: syn::Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            if name == "path" {
                path = Some(input.parse::<LitStr>()?);
            } else {
                return Err(syn::Error::new(
                    name.span(),
                    format!("unknown #[resource] argument `{}`", name),
                ));
            }
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }
        let path = path.ok_or_else(|| input.error("#[resource] requires `path = \"...\"`"))?;
        validate_path(&path)?;
        Ok(ResourceArgs { path })
    }
}

fn validate_path(path: &LitStr) -> syn::Result<()> {
    let value = path.value();
    if !value.starts_with('/') {
        return Err(syn::Error::new(path.span(), "resource path must start with '/'"));
    }
    if value.len() > 1 && value.ends_with('/') {
        return Err(syn::Error::new(path.span(), "resource path must not end with '/'"));
    }
    if value.contains('{') || value.contains('}') {
        return Err(syn::Error::new(
            path.span(),
            "resource path must not contain captures; `{id}` is added by the router",
        ));
    }
    Ok(())
}

pub fn resource_attribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ResourceArgs);
    let input = parse_macro_input!(item as Item);
    TokenStream::from(generate_resource_impl(&args, &input).unwrap_or_else(|e| e.to_compile_error()))
}

fn generate_resource_impl(args: &ResourceArgs, input: &Item) -> syn::Result<TokenStream2> {
    let (ident, generics) = match input {
        Item::Struct(item) => (&item.ident, &item.generics),
        Item::Enum(item) => (&item.ident, &item.generics),
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "#[resource] can only be applied to structs and enums",
            ))
        }
    };
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let base_path = &args.path;

    Ok(quote! {
        #input

        impl #impl_generics ::crudstamp::Resource for #ident #ty_generics #where_clause {
            fn base_path() -> &'static str {
                #base_path
            }
        }
    })
}
