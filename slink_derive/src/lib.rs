use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Meta, Token, Type, TypePath
};

/// Parses the container attribute in the format: `crate_path = "path::to::crate"`.
struct SlotsAttribute {
    crate_path: syn::Path,
}

impl Parse for SlotsAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(SlotsAttribute { crate_path: path })
    }
}

/// Parses the field attribute in the format: `name = "SlotTypeName"`.
struct SlotAttribute {
    name: Option<Ident>,
}

impl Parse for SlotAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "name" {
            return Err(syn::Error::new(key.span(), "expected attribute `name`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let name: Ident = value.parse()?;

        Ok(SlotAttribute { name: Some(name) })
    }
}

fn pascal_case(ident: &Ident) -> String {
    ident
        .to_string()
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Derive macro generating one slot type per `#[slot]` link field.
///
/// A slot type names a single link field of the deriving element type, so the
/// same element can carry several link fields and participate in several lists
/// at once. The generated type is `<Struct><FieldName>` in Pascal case unless
/// overridden with `#[slot(name = "...")]`.
#[proc_macro_derive(Slots, attributes(slots, slot))]
pub fn slots_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let vis = &input.vis;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::slink };

    for attr in &input.attrs {
        if attr.path().is_ident("slots") {
            match attr.parse_args::<SlotsAttribute>() {
                Ok(slots_attr) => {
                    let path = slots_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return syn::Error::new_spanned(
                &input,
                "Slots derive macro only supports structs with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut slots = Vec::new();

    for field in fields {
        let Some(field_ident) = &field.ident else {
            continue;
        };

        let mut is_slot = false;
        let mut name_override = None;
        for attr in &field.attrs {
            if attr.path().is_ident("slot") {
                is_slot = true;
                if let Meta::List(_) = &attr.meta {
                    match attr.parse_args::<SlotAttribute>() {
                        Ok(slot_attr) => name_override = slot_attr.name,
                        Err(e) => return e.to_compile_error().into(),
                    }
                }
            }
        }
        if !is_slot {
            continue;
        }

        let is_link = matches!(&field.ty, Type::Path(TypePath { path, .. })
            if path.segments.last().is_some_and(|segment| segment.ident == "Link"));
        if !is_link {
            return syn::Error::new_spanned(
                &field.ty,
                "Field marked #[slot] must have type `Link<...>`",
            )
            .to_compile_error()
            .into();
        }

        let slot_ident = name_override
            .unwrap_or_else(|| format_ident!("{}{}", struct_name, pascal_case(field_ident)));
        slots.push((field_ident.clone(), slot_ident));
    }

    if slots.is_empty() {
        return syn::Error::new_spanned(
            struct_name,
            "Struct must have at least one field marked #[slot]",
        )
        .to_compile_error()
        .into();
    }

    let has_generics = !input.generics.params.is_empty();
    let mut expanded = quote! {};

    for (field_ident, slot_ident) in &slots {
        // A slot over a generic element has to mention the element's generics;
        // the fn-pointer phantom keeps the slot type Send/Sync/'static either way.
        let slot_def = if has_generics {
            quote! {
                #vis struct #slot_ident #impl_generics (
                    ::core::marker::PhantomData<fn() -> #struct_name #ty_generics>,
                ) #where_clause;
            }
        } else {
            quote! {
                #vis struct #slot_ident;
            }
        };

        let slot_impl = quote! {
            impl #impl_generics #crate_path::Slot for #slot_ident #ty_generics #where_clause {
                type Elem = #struct_name #ty_generics;

                #[inline]
                fn link(elem: &Self::Elem) -> &#crate_path::Link<Self::Elem> {
                    &elem.#field_ident
                }

                #[inline]
                fn link_mut(elem: &mut Self::Elem) -> &mut #crate_path::Link<Self::Elem> {
                    &mut elem.#field_ident
                }
            }
        };

        expanded = quote! {
            #expanded
            #slot_def
            #slot_impl
        };
    }

    TokenStream::from(expanded)
}
