//! Derive macros for todolist actions and state
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Classifies action variants as commands (intents) or events
//! - `#[derive(State)]` - Generates version accessors for state structs
//!
//! # Example
//!
//! ```ignore
//! use todolist_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     #[command]
//!     AddTodo { text: String },
//!
//!     #[event]
//!     TodoAdded { id: TodoId, text: String },
//! }
//!
//! assert!(TodoAction::AddTodo { text: "milk".into() }.is_command());
//! assert_eq!(TodoAction::AddTodo { text: "milk".into() }.name(), "AddTodo");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Variant};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_command()` - Returns true if this variant is a command
/// - `is_event()` - Returns true if this variant is an event
/// - `name()` - Returns the variant name, for logs and traces
///
/// # Attributes
///
/// - `#[command]` - Mark a variant as a command (a request from the UI)
/// - `#[event]` - Mark a variant as an event (a fact applied to state)
///
/// Unmarked variants are neither.
///
/// # Errors
///
/// Produces a compile error if:
/// - Applied to a non-enum type
/// - A variant has both `#[command]` and `#[event]` attributes
#[proc_macro_derive(Action, attributes(command, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut is_command_arms = Vec::new();
    let mut is_event_arms = Vec::new();
    let mut name_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_command = has_attribute(&variant.attrs, "command");
        let is_event = has_attribute(&variant.attrs, "event");

        if is_command && is_event {
            return syn::Error::new_spanned(variant, "Variant cannot be both #[command] and #[event]")
                .to_compile_error()
                .into();
        }

        let pattern = variant_pattern(variant);
        let variant_name = variant.ident.to_string();

        is_command_arms.push(quote! { #pattern => #is_command, });
        is_event_arms.push(quote! { #pattern => #is_event, });
        name_arms.push(quote! { #pattern => #variant_name, });
    }

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Returns true if this action is a command
            #[must_use]
            pub const fn is_command(&self) -> bool {
                match self {
                    #(#is_command_arms)*
                }
            }

            /// Returns true if this action is an event
            #[must_use]
            pub const fn is_event(&self) -> bool {
                match self {
                    #(#is_event_arms)*
                }
            }

            /// Returns the variant name
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for State structs
///
/// For a field marked `#[version]` (of type `todolist_core::Version`) this
/// generates:
/// - `version()` - Returns the current version
/// - `bump_version()` - Advances the version and returns the new value
///
/// Structs without a `#[version]` field get no extra methods.
///
/// # Errors
///
/// Produces a compile error if:
/// - Applied to a non-struct type
/// - More than one field is marked `#[version]`
///
/// # Example
///
/// ```ignore
/// use todolist_core::Version;
/// use todolist_macros::State;
///
/// #[derive(State, Clone, Debug, Default)]
/// struct TodosState {
///     pub todos: Vec<TodoItem>,
///     #[version]
///     pub version: Version,
/// }
/// ```
#[proc_macro_derive(State, attributes(version))]
pub fn derive_state(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(State)] can only be used on structs")
            .to_compile_error()
            .into();
    };

    let mut version_fields = data_struct
        .fields
        .iter()
        .filter(|field| has_attribute(&field.attrs, "version"));

    let Some(field) = version_fields.next() else {
        return TokenStream::new();
    };

    if let Some(duplicate) = version_fields.next() {
        return syn::Error::new_spanned(duplicate, "Only one field can be marked #[version]")
            .to_compile_error()
            .into();
    }

    let Some(version_field_name) = field.ident.as_ref() else {
        return syn::Error::new_spanned(field, "#[version] requires a named field")
            .to_compile_error()
            .into();
    };

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Get the current version of this state
            #[must_use]
            pub const fn version(&self) -> ::todolist_core::Version {
                self.#version_field_name
            }

            /// Advance the version of this state, returning the new version
            pub fn bump_version(&mut self) -> ::todolist_core::Version {
                self.#version_field_name = self.#version_field_name.next();
                self.#version_field_name
            }
        }
    };

    TokenStream::from(expanded)
}

/// Match pattern for a variant, ignoring its fields
fn variant_pattern(variant: &Variant) -> proc_macro2::TokenStream {
    let ident = &variant.ident;
    match &variant.fields {
        Fields::Named(_) => quote! { Self::#ident { .. } },
        Fields::Unnamed(_) => quote! { Self::#ident(..) },
        Fields::Unit => quote! { Self::#ident },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
