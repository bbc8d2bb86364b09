mod utils;

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt, parse_macro_input, punctuated::Punctuated, token::Comma, Data, DeriveInput,
    Field, Fields, FieldsNamed,
};
use utils::{access_for, has_attribute, validate_attributes, Access};

/// Generate a getter and a `set_` prefixed setter for every named field.
///
/// Field attributes:
/// * `#[readonly]` - only the getter is generated.
/// * `#[skip]` - nothing is generated for the field.
///
/// ```
/// use fixture_derive::Accessors;
///
/// #[derive(Accessors)]
/// struct Seat {
///     #[readonly]
///     row: u8,
///     holder: String,
/// }
///
/// let mut seat = Seat { row: 4, holder: String::new() };
/// seat.set_holder("Ana".to_owned());
/// assert_eq!(seat.row(), 4);
/// assert_eq!(seat.holder(), "Ana");
/// ```
///
/// A `#[readonly]` field has no setter:
///
/// ```compile_fail
/// use fixture_derive::Accessors;
///
/// #[derive(Accessors)]
/// struct Seat {
///     #[readonly]
///     row: u8,
/// }
///
/// let mut seat = Seat { row: 4 };
/// seat.set_row(5);
/// ```
///
/// `#[readonly]` and `#[skip]` exclude each other:
///
/// ```compile_fail
/// use fixture_derive::Accessors;
///
/// #[derive(Accessors)]
/// struct Seat {
///     #[readonly]
///     #[skip]
///     row: u8,
/// }
/// ```
///
/// Only structs with named fields are accepted:
///
/// ```compile_fail
/// use fixture_derive::Accessors;
///
/// #[derive(Accessors)]
/// struct Seat(u8);
/// ```
///
/// ```compile_fail
/// use fixture_derive::Accessors;
///
/// #[derive(Accessors)]
/// enum Seat {
///     Aisle,
///     Window,
/// }
/// ```
#[proc_macro_derive(Accessors, attributes(readonly, skip))]
pub fn accessors(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;

    let fields = match named_fields(&ast, "Accessors") {
        Ok(fields) => fields,
        Err(err) => return err.into(),
    };

    let mut methods = vec![];

    for field in fields {
        if let Err(tokens) = validate_attributes(&field.attrs, &["readonly", "skip"]) {
            return tokens.into();
        }

        if has_attribute(&field.attrs, "skip").is_some() {
            continue;
        }

        methods.push(create_getter(field));

        if has_attribute(&field.attrs, "readonly").is_none() {
            methods.push(create_setter(field));
        }
    }

    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#methods)*
        }
    };

    expanded.into()
}

/// Implement [`std::fmt::Display`] as `TypeName [field=value, ...]`, listing
/// every named field in declaration order.
///
/// ```
/// use fixture_derive::Describe;
///
/// #[derive(Describe)]
/// struct Seat {
///     row: u8,
///     r#type: &'static str,
/// }
///
/// let seat = Seat { row: 4, r#type: "aisle" };
/// assert_eq!(seat.to_string(), "Seat [row=4, type=aisle]");
/// ```
///
/// Enums, unions and tuple structs are rejected:
///
/// ```compile_fail
/// use fixture_derive::Describe;
///
/// #[derive(Describe)]
/// enum Seat {
///     Aisle,
///     Window,
/// }
/// ```
///
/// ```compile_fail
/// use fixture_derive::Describe;
///
/// #[derive(Describe)]
/// union Seat {
///     row: u8,
///     code: u16,
/// }
/// ```
///
/// ```compile_fail
/// use fixture_derive::Describe;
///
/// #[derive(Describe)]
/// struct Seat(u8, u8);
/// ```
#[proc_macro_derive(Describe)]
pub fn describe(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;

    let fields = match named_fields(&ast, "Describe") {
        Ok(fields) => fields,
        Err(err) => return err.into(),
    };

    let mut template = format!("{} [", name);
    let mut values = vec![];

    for (i, field) in fields.iter().enumerate() {
        let field_name = field.ident.as_ref().expect("named field");
        if i > 0 {
            template.push_str(", ");
        }
        template.push_str(&format!("{}={{}}", field_name.unraw()));
        values.push(quote! { self.#field_name });
    }
    template.push(']');

    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, #template, #(#values),*)
            }
        }
    };

    expanded.into()
}

/// Named fields of a struct, or a compile error for anything else.
fn named_fields<'a>(
    ast: &'a DeriveInput,
    derive: &str,
) -> Result<&'a Punctuated<Field, Comma>, proc_macro2::TokenStream> {
    match &ast.data {
        Data::Struct(syn::DataStruct {
            fields: Fields::Named(FieldsNamed { named, .. }),
            ..
        }) => Ok(named),
        Data::Struct(syn::DataStruct {
            fields: Fields::Unit,
            ..
        }) => Err(syn::Error::new_spanned(
            &ast.ident,
            format!("`{}` needs a struct with named fields, use `{} {{}}`", derive, ast.ident),
        )
        .to_compile_error()),
        _ => Err(syn::Error::new_spanned(
            &ast.ident,
            format!("`{}` can only be derived on a struct with named fields", derive),
        )
        .to_compile_error()),
    }
}

fn create_getter(field: &Field) -> proc_macro2::TokenStream {
    let (field_name, type_name) = (field.ident.as_ref().expect("named field"), &field.ty);

    match access_for(type_name) {
        Access::Value => quote! {
            pub fn #field_name(&self) -> #type_name {
                self.#field_name
            }
        },
        Access::Str => quote! {
            pub fn #field_name(&self) -> &str {
                &self.#field_name
            }
        },
        Access::Ref => quote! {
            pub fn #field_name(&self) -> &#type_name {
                &self.#field_name
            }
        },
    }
}

fn create_setter(field: &Field) -> proc_macro2::TokenStream {
    let (field_name, type_name) = (field.ident.as_ref().expect("named field"), &field.ty);
    let setter = format_ident!("set_{}", field_name);

    quote! {
        pub fn #setter(&mut self, #field_name: #type_name) {
            self.#field_name = #field_name;
        }
    }
}
