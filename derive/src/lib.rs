use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::spanned::Spanned as _;
use syn::{Data, DeriveInput, Error, Fields, Path, Result};

macro_rules! abort {
    ($spanned:expr, $message:expr) => {
        return Err(Error::new($spanned.span(), $message))
    };
}

/// Derive `paramcomb::Domain` for a fieldless enum.
///
/// The members are listed in the order the variants are declared, so the
/// position of a variant in the source is its id in a tagged sequence.
///
/// The crate path can be overridden with `#[domain(crate = path)]` when
/// `paramcomb` is re-exported under another name.
#[proc_macro_derive(Domain, attributes(domain))]
pub fn derive_domain(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let item = syn::parse_macro_input!(item as DeriveInput);
    match expand(item) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.into_compile_error().into(),
    }
}

fn expand(item: DeriveInput) -> Result<TokenStream> {
    let krate = crate_path(&item)?;
    if !item.generics.params.is_empty() {
        abort!(item.generics, "Domain cannot be derived for a generic type");
    }
    let variants = match &item.data {
        Data::Enum(data) => &data.variants,
        Data::Struct(data) => abort!(
            data.struct_token,
            "Domain can only be derived for enums with unit variants"
        ),
        Data::Union(data) => abort!(
            data.union_token,
            "Domain can only be derived for enums with unit variants"
        ),
    };
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            abort!(variant, "Domain members cannot have fields");
        }
    }
    let ident = &item.ident;
    let members = variants.iter().map(|variant| &variant.ident);

    Ok(quote! {
        impl #krate::Domain for #ident {
            const MEMBERS: &'static [Self] = &[#(Self::#members),*];
        }
    })
}

// #[domain(crate = path)]
fn crate_path(item: &DeriveInput) -> Result<TokenStream> {
    let mut krate = None;
    for attr in &item.attrs {
        if !attr.path().is_ident("domain") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let path: Path = meta.value()?.parse()?;
                krate = Some(path.into_token_stream());
                Ok(())
            } else {
                Err(meta.error("unsupported domain attribute"))
            }
        })?;
    }
    Ok(krate.unwrap_or_else(|| quote!(::paramcomb)))
}
