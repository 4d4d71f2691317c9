use proc_macro2::*;
use quote::quote;
use syn::*;

fn parse_enum(item: TokenStream) -> core::result::Result<(Ident, DataEnum), TokenStream> {
    let input_parsed = syn::parse2::<DeriveInput>(item).map_err(|err| err.to_compile_error())?;
    match input_parsed.data {
        Data::Enum(body) => Ok((input_parsed.ident, body)),
        _ => Err(quote!( compile_error!("Not an enum"); )),
    }
}

/// Get the name of a variant, taken from a `#[name("...")]` attribute when present
fn variant_name(variant: &Variant) -> Result<String> {
    let attr = variant.attrs.iter()
        .find(|attr| attr.path().get_ident().map_or(false, |ident| ident == "name"));
    match attr {
        Some(attr) => attr.parse_args::<LitStr>().map(|lit| lit.value()),
        None => Ok(variant.ident.to_string()),
    }
}

fn variant_names(body_data: &DataEnum) -> core::result::Result<(Vec<Ident>, Vec<String>), TokenStream> {
    let mut members = Vec::with_capacity(body_data.variants.len());
    let mut names = Vec::with_capacity(body_data.variants.len());
    for variant in &body_data.variants {
        let name = variant_name(variant).map_err(|err| err.to_compile_error())?;
        if names.iter().any(|other: &String| other.eq_ignore_ascii_case(&name)) {
            let msg = format!("Duplicate name '{name}' for variant '{}'", variant.ident);
            return Err(quote!(compile_error!(#msg);));
        }
        members.push(variant.ident.clone());
        names.push(name);
    }
    Ok((members, names))
}

pub fn enum_count(item: TokenStream) -> TokenStream {
    let (ident, body_data) = match parse_enum(item) {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };
    let count = body_data.variants.len();

    quote!{
        impl texfmt_base::EnumCountT for #ident {
            const COUNT: usize = #count;
        }
    }
}

pub fn enum_from_index(item: TokenStream) -> TokenStream {
    let (ident, body_data) = match parse_enum(item) {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let mut variants = Vec::with_capacity(body_data.variants.len());
    let mut indices = Vec::with_capacity(body_data.variants.len());
    let mut i = 0;
    for variant in body_data.variants { 
        let idx = match variant.discriminant {
            Some((_, Expr::Lit(ExprLit { lit: Lit::Int(int), .. }))) => match int.base10_parse::<usize>() {
                Ok(int) => int,
                Err(err) => {
                    let msg = err.to_string();
                    return quote!(compile_error!(#msg););
                },
            },
            Some(_) => return quote!(compile_error!("Only integer discriminants are supported by EnumFromIndex");),
            None => i,
        };
        
        variants.push(variant.ident);
        indices.push(idx);

        i = idx + 1;
    }

    quote!{
        impl texfmt_base::EnumFromIndexT for #ident {
            fn from_idx(idx: usize) -> Option<Self> {
                match idx {
                    #(#indices => Some(Self::#variants),)*
                    _ => None,
                }
            }
            
            fn from_idx_or(idx: usize, default: Self) -> Self {
                match idx {
                    #(#indices => Self::#variants,)*
                    _ => default,
                }
            }

            unsafe fn from_idx_unchecked(idx: usize) -> Self {
                match idx {
                    #(#indices => Self::#variants,)*
                    _ => unreachable!()
                }
            }
        }
    }
}

pub fn enum_display(item: TokenStream) -> TokenStream {
    let (ident, body_data) = match parse_enum(item) {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };
    let (members, names) = match variant_names(&body_data) {
        Ok(names) => names,
        Err(err) => return err,
    };

    quote!{
        impl core::fmt::Display for #ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    #(#ident::#members => f.pad(#names),)*
                }
            }
        }
    }
}

pub fn enum_from_name(item: TokenStream) -> TokenStream {
    let (ident, body_data) = match parse_enum(item) {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };
    let (members, names) = match variant_names(&body_data) {
        Ok(names) => names,
        Err(err) => return err,
    };

    quote!{
        impl texfmt_base::EnumFromNameT for #ident {
            fn name(&self) -> &'static str {
                match self {
                    #(#ident::#members => #names,)*
                }
            }

            fn parse(s: &str) -> Option<Self> {
                #(
                    if s.eq_ignore_ascii_case(#names) {
                        return Some(Self::#members);
                    }
                )*
                None
            }
        }
    }
}
