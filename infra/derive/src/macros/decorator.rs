use proc_macro2::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parser;
use syn::{Expr, ItemStruct, LitBool, LitStr, Token, Type, parse_quote};

#[derive(Default)]
struct DecoratorArgs {
    service: Option<Type>,
    order: Option<Expr>,
    key: Option<LitStr>,
    flags: Option<Type>,
    feature: Option<Expr>,
    wildcard: Option<bool>,
}

impl DecoratorArgs {
    fn parse_meta(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("service") {
            set_once(meta, &mut self.service, meta.value()?.parse()?)
        } else if meta.path.is_ident("order") {
            set_once(meta, &mut self.order, meta.value()?.parse()?)
        } else if meta.path.is_ident("key") {
            set_once(meta, &mut self.key, meta.value()?.parse()?)
        } else if meta.path.is_ident("flags") {
            set_once(meta, &mut self.flags, meta.value()?.parse()?)
        } else if meta.path.is_ident("feature") {
            set_once(meta, &mut self.feature, meta.value()?.parse()?)
        } else if meta.path.is_ident("open_generics_wildcard") {
            let enabled = if meta.input.peek(Token![=]) {
                meta.value()?.parse::<LitBool>()?.value
            } else {
                true
            };
            set_once(meta, &mut self.wildcard, enabled)
        } else {
            Err(syn::Error::new_spanned(
                &meta.path,
                "unsupported decorator argument, expected one of: service, order, key, flags, feature, open_generics_wildcard",
            ))
        }
    }
}

fn set_once<T>(meta: &ParseNestedMeta<'_>, slot: &mut Option<T>, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(&meta.path, "duplicate decorator argument"));
    }
    *slot = Some(value);
    Ok(())
}

pub fn expand_decorator(args: TokenStream, input: ItemStruct) -> TokenStream {
    expand(args, input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand(args: TokenStream, input: ItemStruct) -> syn::Result<TokenStream> {
    let mut parsed = DecoratorArgs::default();
    syn::meta::parser(|meta| parsed.parse_meta(&meta)).parse2(args)?;

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "decorator types must be 'static and cannot take lifetime parameters",
        ));
    }

    let domain = quote! { ::adi_kernel::domain };

    let flags = match (&parsed.flags, &parsed.feature) {
        (Some(flags), _) => quote! { #flags },
        (None, Some(feature)) => {
            return Err(syn::Error::new_spanned(
                feature,
                "`feature` requires `flags = <FlagType>` to name the feature flag type",
            ));
        },
        (None, None) => quote! { #domain::features::NoFeatures },
    };

    let service = parsed.service.as_ref().map(|ty| quote! { .service::<#ty>() });
    let order = parsed.order.as_ref().map(|order| quote! { .order(#order) });
    let key = parsed.key.as_ref().map(|key| quote! { .key(#key) });
    let feature = parsed.feature.as_ref().map(|feature| quote! { .feature(#feature) });
    let wildcard = parsed.wildcard.unwrap_or(false);

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #input

        #[automatically_derived]
        impl #impl_generics #domain::registry::Decorates<#flags> for #ident #ty_generics #where_clause {
            fn decorator() -> #domain::decorator::Decorator<#flags> {
                #domain::decorator::Decorator::<#flags>::builder()
                    #service
                    #order
                    #key
                    #feature
                    .open_generics_wildcard(#wildcard)
                    .build()
            }
        }
    })
}
