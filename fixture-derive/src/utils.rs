use proc_macro2::{Ident, TokenStream};
use syn::{Attribute, Type};

/// This returns the attribute [`Ident`] if the attribute was found.
pub fn has_attribute(attrs: &[Attribute], attr_name: &str) -> Option<Ident> {
    for attr in attrs {
        if let Ok(syn::Meta::Path(path)) = attr.parse_meta() {
            if let Some(ident) = path.get_ident() {
                if ident == attr_name {
                    return Some(ident.clone());
                }
            }
        }
    }

    None
}

/// Make sure no two mutually exclusive attributes are set on the same item.
/// Returns a compile error pointing at the second attribute otherwise.
pub fn validate_attributes(attrs: &[Attribute], exclusive: &[&str]) -> Result<(), TokenStream> {
    let mut seen: Option<Ident> = None;

    for name in exclusive {
        if let Some(found) = has_attribute(attrs, name) {
            if let Some(first) = &seen {
                return Err(syn::Error::new(
                    found.span(),
                    format!("`#[{}]` cannot be combined with `#[{}]`", found, first),
                )
                .to_compile_error());
            }
            seen = Some(found);
        }
    }

    Ok(())
}

/// How a generated getter hands out a field.
pub enum Access {
    /// Scalar copied out.
    Value,
    /// `String` lent out as `&str`.
    Str,
    /// Anything else lent out as `&T`.
    Ref,
}

const SCALARS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize", "f32",
    "f64", "bool", "char",
];

pub fn access_for(ty: &Type) -> Access {
    if let Type::Path(type_path) = ty {
        if type_path.qself.is_none() {
            if let Some(segment) = type_path.path.segments.last() {
                if segment.arguments.is_empty() {
                    let name = segment.ident.to_string();
                    if SCALARS.contains(&name.as_str()) {
                        return Access::Value;
                    }
                    if name == "String" {
                        return Access::Str;
                    }
                }
            }
        }
    }

    Access::Ref
}
