use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Type, Variant};

const CONTEXT_FIELD: &str = "context";
const SOURCE_FIELD: &str = "source";
const INTERNAL_VARIANT: &str = "Internal";

/// Path prefixes accepted in front of `Option` and `Cow` in a context field type.
const PATH_PREFIXES: [&str; 4] = ["std::option::", "core::option::", "std::borrow::", "alloc::borrow::"];

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<&'a Field>,
    has_context: bool,
    cfg_attrs: Vec<&'a Attribute>,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "relay_error variants must use named fields",
            ));
        };

        let mut context = None;
        let mut source = None;
        for field in &fields.named {
            let Some(ident) = &field.ident else { continue };
            if ident == CONTEXT_FIELD {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                context = Some(field);
            } else if source.is_none()
                && (ident == SOURCE_FIELD || has_attr(field, "source") || has_attr(field, "from"))
            {
                source = Some(field);
            }
        }

        if source.is_some() && context.is_none() {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "relay_error requires `context: Option<Cow<'static, str>>` next to a source",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            source,
            has_context: context.is_some(),
            cfg_attrs: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
        })
    }

    fn is_internal(&self) -> bool {
        self.ident == INTERNAL_VARIANT
    }

    fn context_arm(&self, name: &Ident) -> Option<TokenStream> {
        if !self.has_context {
            return None;
        }
        let (ident, cfg_attrs) = (self.ident, &self.cfg_attrs);
        Some(quote! { #(#cfg_attrs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), })
    }

    fn source_impls(&self, name: &Ident, ext: &Ident) -> Option<TokenStream> {
        if self.is_internal() {
            return None;
        }
        let field = self.source?;
        let field_ident = field.ident.as_ref()?;
        let source_ty = &field.ty;
        let (ident, cfg_attrs) = (self.ident, &self.cfg_attrs);

        Some(quote! {
            #(#cfg_attrs)*
            #[automatically_derived]
            impl From<#source_ty> for #name {
                #[inline]
                fn from(#field_ident: #source_ty) -> Self {
                    Self::#ident { #field_ident, context: None }
                }
            }

            #(#cfg_attrs)*
            #[automatically_derived]
            impl<T> #ext<T> for ::std::result::Result<T, #source_ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name> {
                    self.map_err(|#field_ident| #name::#ident { #field_ident, context: Some(context.into()) })
                }
            }
        })
    }
}

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "relay_error can only be applied to enums"));
    };

    let variants =
        data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

    let derives = missing_derives(&input);
    let context_arms = variants.iter().filter_map(|v| v.context_arm(name));
    let source_impls = variants.iter().filter_map(|v| v.source_impls(name, &ext));
    let internal = variants.iter().find(|v| v.is_internal()).map(|v| internal_impls(name, v));

    Ok(quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        pub trait #ext<T> {
            /// Attaches a human-readable context to the error branch.
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> ::std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #(#context_arms)*
                        #[allow(unreachable_patterns)]
                        _ => {}
                    }
                    err
                })
            }
        }

        #(#source_impls)*
        #internal

        #[allow(dead_code)]
        fn format_context(context: &Option<::std::borrow::Cow<'static, str>>) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| ::std::borrow::Cow::Owned(format!(" ({c})")))
        }
    })
}

fn internal_impls(name: &Ident, internal: &ErrorVariant<'_>) -> TokenStream {
    let cfg_attrs = &internal.cfg_attrs;
    let context = if internal.has_context { quote!(, context: None) } else { quote!() };

    quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(message) #context }
            }
        }

        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(message) #context }
            }
        }
    }
}

/// Returns the `#[derive(...)]` for `Debug`/`Error` when the enum does not already list them.
fn missing_derives(input: &DeriveInput) -> TokenStream {
    let mut present = FxHashSet::default();
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                present.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote!(Debug));
    }
    if !present.contains("Error") {
        derives.push(quote!(::thiserror::Error));
    }

    if derives.is_empty() { quote!() } else { quote!(#[derive(#(#derives),*)]) }
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn is_context_type(ty: &Type) -> bool {
    let mut compact: String =
        quote!(#ty).to_string().chars().filter(|c| !c.is_whitespace()).collect();
    for prefix in PATH_PREFIXES {
        compact = compact.replace(&format!("::{prefix}"), "").replace(prefix, "");
    }
    compact == "Option<Cow<'static,str>>"
}
